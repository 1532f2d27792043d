//! Domain logic - pure version rules independent of file I/O

pub mod bump_kind;
pub mod line;
pub mod version;

pub use bump_kind::BumpKind;
pub use line::{Declaration, SourceLine};
pub use version::{VersionError, VersionTuple};
