//! Command-line glue shared by the binaries

pub mod orchestration;

pub use orchestration::{run_bump_workflow, run_sync_workflow, BumpWorkflowArgs, SyncWorkflowArgs};

/// Prints a clap error and exits.
///
/// Usage mistakes exit with status 1; `--help` and `--version` keep clap's
/// own handling (printed to stdout, status 0).
pub fn exit_on_clap_error(err: clap::Error) -> ! {
    if err.use_stderr() {
        // printing can only fail if stderr is gone
        let _ = err.print();
        std::process::exit(1);
    }
    err.exit()
}
