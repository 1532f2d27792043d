pub mod boundary;
pub mod bumper;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod file_ops;
pub mod logging;
pub mod ui;

pub use bumper::{bump, BumpOutcome, VersionBumper};
pub use domain::{BumpKind, VersionTuple};
pub use error::{BumpError, Result};
