//! Version bumping over the lines of a source file.
//!
//! The transformation is pure: callers read the file, hand the lines to
//! [`VersionBumper::bump`], and write the result back themselves.

use tracing::debug;

use crate::domain::{BumpKind, SourceLine, VersionTuple};
use crate::error::{BumpError, Result};

/// Marker substrings recognized when no configuration overrides them.
pub const DEFAULT_MARKERS: [&str; 2] = ["AssemblyVersion", "AssemblyFileVersion"];

/// One rewritten version-declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenDeclaration {
    /// 1-based line number in the input
    pub line_number: usize,
    pub marker: String,
    pub old_version: String,
    pub new_version: String,
}

/// Result of bumping a file's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub lines: Vec<String>,
    /// Version written by the last declaration line, or empty if there was none
    pub version: String,
    pub declarations: Vec<RewrittenDeclaration>,
}

impl BumpOutcome {
    /// Whether every declaration line produced the same new version.
    pub fn is_consistent(&self) -> bool {
        self.declarations
            .windows(2)
            .all(|pair| pair[0].new_version == pair[1].new_version)
    }
}

/// Rewrites version-declaration lines identified by a set of markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBumper {
    markers: Vec<String>,
}

impl Default for VersionBumper {
    fn default() -> Self {
        VersionBumper::new(DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect())
    }
}

impl VersionBumper {
    pub fn new(markers: Vec<String>) -> Self {
        VersionBumper { markers }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Bump every version-declaration line in `lines`.
    ///
    /// Lines without a marker are copied unchanged. Stops at the first
    /// declaration whose quoted text is not a valid version, so a caller never
    /// sees partially rewritten output.
    pub fn bump<S: AsRef<str>>(&self, lines: &[S], kind: BumpKind) -> Result<BumpOutcome> {
        let mut new_lines = Vec::with_capacity(lines.len());
        let mut declarations = Vec::new();
        let mut version = String::new();

        for (index, line) in lines.iter().enumerate() {
            let text = line.as_ref();
            let line_number = index + 1;

            let decl = match SourceLine::classify(text, self.markers.as_slice()) {
                SourceLine::PassThrough(text) => {
                    new_lines.push(text.to_string());
                    continue;
                }
                SourceLine::Declaration(decl) => decl,
            };

            let old_version = decl.version_text().ok_or_else(|| {
                BumpError::malformed(line_number, text, "no quoted version string")
            })?;
            let bumped = VersionTuple::parse(old_version)
                .and_then(|current| current.bump(kind))
                .map_err(|e| BumpError::malformed(line_number, text, e.to_string()))?;

            let new_version = bumped.to_string();
            let rewritten = decl.replace_version(&new_version).ok_or_else(|| {
                BumpError::malformed(line_number, text, "no quoted version string")
            })?;

            debug!(
                line = line_number,
                marker = decl.marker,
                from = old_version,
                to = %new_version,
                "rewrote version declaration"
            );

            new_lines.push(rewritten);
            declarations.push(RewrittenDeclaration {
                line_number,
                marker: decl.marker.to_string(),
                old_version: old_version.to_string(),
                new_version: new_version.clone(),
            });
            version = new_version;
        }

        Ok(BumpOutcome {
            lines: new_lines,
            version,
            declarations,
        })
    }
}

/// Bump `lines` using the default assembly markers.
pub fn bump<S: AsRef<str>>(lines: &[S], kind: BumpKind) -> Result<BumpOutcome> {
    VersionBumper::default().bump(lines, kind)
}
