//! User interface module - status, warning, and error output.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_declarations, display_error, display_status,
    display_success, format_declaration,
};

/// Print the new version on stdout, the only thing written there.
pub fn print_version(version: &str) {
    println!("{}", version);
}
