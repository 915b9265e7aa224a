pub mod bump;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs_ops;
pub mod screenshots;
pub mod ui;
pub mod warning;

pub use error::{ReleaseToolsError, Result};
