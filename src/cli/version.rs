//! Version command.

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The `--version` output line.
pub fn version_line() -> String {
    format!("folio {}", VERSION)
}

pub fn handle_version_command() {
    println!("{}", version_line());
}
