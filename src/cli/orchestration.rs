//! Main workflow orchestration logic
//!
//! Reads the target file, bumps its declarations, and writes it back. Kept
//! apart from `main.rs` so the workflow can be driven without clap.

use std::path::PathBuf;

use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::bumper::BumpOutcome;
use crate::config::Config;
use crate::domain::BumpKind;
use crate::error::Result;
use crate::file_ops;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Raw bump argument as given on the command line
    pub kind: Option<String>,

    /// Target file, overriding the configured one
    pub file: Option<PathBuf>,

    /// Compute the new version without writing the file
    pub dry_run: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The file that was (or, in a dry run, would have been) rewritten
    pub path: PathBuf,

    pub kind: BumpKind,

    pub outcome: BumpOutcome,

    /// Whether the file was written
    pub written: bool,

    pub warnings: Vec<BoundaryWarning>,
}

impl WorkflowResult {
    /// The version to report, empty when no declaration was found.
    pub fn version(&self) -> &str {
        &self.outcome.version
    }
}

/// Main bump workflow
///
/// 1. Resolve the bump kind and target file
/// 2. Read the file as lines
/// 3. Bump every declaration line (nothing is written if any line is malformed)
/// 4. Write the new content atomically unless `dry_run` is set
pub fn run_bump_workflow(args: BumpWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let kind = BumpKind::from_arg(args.kind.as_deref());
    let path = args.file.unwrap_or_else(|| config.file.clone());
    debug!(%kind, path = %path.display(), dry_run = args.dry_run, "starting bump");

    let mut warnings = Vec::new();
    if let Some(value) = args.kind.as_deref() {
        if !value.is_empty() && BumpKind::parse(value).is_none() {
            warnings.push(BoundaryWarning::UnrecognizedBumpKind {
                value: value.to_string(),
            });
        }
    }

    let lines = file_ops::read_lines(&path)?;
    let outcome = config.bumper().bump(&lines, kind)?;
    warnings.extend(BoundaryWarning::from_outcome(&path, &outcome));

    let written = if args.dry_run {
        false
    } else {
        file_ops::write_lines_atomic(&path, &outcome.lines)?;
        true
    };

    Ok(WorkflowResult {
        path,
        kind,
        outcome,
        written,
        warnings,
    })
}
