use std::fmt;
use std::path::PathBuf;

use crate::bumper::BumpOutcome;

/// Non-fatal conditions met while bumping a file.
/// These are reported to the user but never change the exit status.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The target file has no version-declaration line
    NoVersionDeclarations { path: PathBuf },
    /// Declaration lines ended up with different versions
    InconsistentVersions { first: String, last: String },
    /// The bump argument was not a known kind and fell back to build
    UnrecognizedBumpKind { value: String },
}

impl BoundaryWarning {
    /// Warnings describing a finished bump of `path`.
    pub fn from_outcome(path: impl Into<PathBuf>, outcome: &BumpOutcome) -> Vec<BoundaryWarning> {
        let mut warnings = Vec::new();
        match outcome.declarations.as_slice() {
            [] => {
                warnings.push(BoundaryWarning::NoVersionDeclarations { path: path.into() });
            }
            [first, .., last] if !outcome.is_consistent() => {
                warnings.push(BoundaryWarning::InconsistentVersions {
                    first: first.new_version.clone(),
                    last: last.new_version.clone(),
                });
            }
            _ => {}
        }
        warnings
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoVersionDeclarations { path } => {
                write!(
                    f,
                    "No version declarations found in '{}'; file left unchanged",
                    path.display()
                )
            }
            BoundaryWarning::InconsistentVersions { first, last } => {
                write!(
                    f,
                    "Version declarations disagree (first '{}', last '{}'); reporting '{}'",
                    first, last, last
                )
            }
            BoundaryWarning::UnrecognizedBumpKind { value } => {
                write!(
                    f,
                    "Unrecognized bump kind '{}'; bumping build instead",
                    value
                )
            }
        }
    }
}
