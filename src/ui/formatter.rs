//! Pure formatting functions for UI output.
//!
//! Everything here writes to stderr so stdout carries only the new version.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::bumper::RewrittenDeclaration;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").for_stderr().red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").for_stderr().green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").for_stderr().yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").for_stderr().yellow(), warning);
}

/// One line describing a rewritten declaration, e.g.
/// `line 11: AssemblyVersion 0.3.5.1 -> 0.3.5.2`.
pub fn format_declaration(decl: &RewrittenDeclaration) -> String {
    format!(
        "line {}: {} {} -> {}",
        decl.line_number, decl.marker, decl.old_version, decl.new_version
    )
}

/// Display every rewritten declaration under a bold heading.
pub fn display_declarations(declarations: &[RewrittenDeclaration]) {
    eprintln!("{}", style("Version declarations:").for_stderr().bold());
    for decl in declarations {
        eprintln!("  {}", format_declaration(decl));
    }
}
