//! Version and help output.

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_LOG_FILTER, DEFAULT_TIMEOUT_MS, ENV_API_BASE_URL, ENV_API_TIMEOUT,
    ENV_EXPORT_DIR, ENV_LOG, ENV_LOG_FILE,
};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("mock-interview {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "\
{version}
Practice job interviews in the terminal.

USAGE:
    mock-interview [OPTIONS]

OPTIONS:
    -h, --help       Print this help
    -V, --version    Print version

ENVIRONMENT:
    {ENV_API_BASE_URL:<28} Backend URL (default {DEFAULT_BASE_URL})
    {ENV_API_TIMEOUT:<28} Request timeout in ms (default {DEFAULT_TIMEOUT_MS})
    {ENV_LOG:<28} Log filter (default {DEFAULT_LOG_FILTER})
    {ENV_LOG_FILE:<28} Log file path
    {ENV_EXPORT_DIR:<28} Directory for exported reports
",
        version = version_text()
    )
}
