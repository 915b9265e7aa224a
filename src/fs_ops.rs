//! Small filesystem helpers shared by the sync workflow.

use std::fs::{self, File, FileTimes};
use std::io::{self, BufReader, Read};
use std::path::Path;

const CHUNK: usize = 8 * 1024;

/// Byte-for-byte comparison of two files.
///
/// Returns `Ok(false)` as soon as the sizes differ.
pub fn files_identical(a: &Path, b: &Path) -> io::Result<bool> {
    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }

    let mut left = BufReader::new(File::open(a)?);
    let mut right = BufReader::new(File::open(b)?);
    let mut left_buf = [0u8; CHUNK];
    let mut right_buf = [0u8; CHUNK];

    loop {
        let n = read_full(&mut left, &mut left_buf)?;
        let m = read_full(&mut right, &mut right_buf)?;
        if n != m || left_buf[..n] != right_buf[..m] {
            return Ok(false);
        }
        if n == 0 {
            return Ok(true);
        }
    }
}

fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Copies `src` to `dest` including permissions and access/modification times.
///
/// Refuses to copy a file onto itself (same path or reached through a symlink),
/// which would otherwise truncate the source before it is read.
pub fn copy_with_times(src: &Path, dest: &Path) -> io::Result<()> {
    if dest.exists() && fs::canonicalize(src)? == fs::canonicalize(dest)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} and {} are the same file",
                src.display(),
                dest.display()
            ),
        ));
    }

    let mut reader = File::open(src)?;
    let meta = reader.metadata()?;
    let mut writer = File::create(dest)?;
    io::copy(&mut reader, &mut writer)?;

    // times go on before permissions, which may drop write access
    writer.set_times(
        FileTimes::new()
            .set_accessed(meta.accessed()?)
            .set_modified(meta.modified()?),
    )?;
    drop(writer);
    fs::set_permissions(dest, meta.permissions())
}
