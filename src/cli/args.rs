//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage and configuration
    Help,
    /// Run the TUI application (default)
    RunTui,
    /// Unrecognised argument
    Unknown(String),
}

/// Parse command-line arguments (program name first) into a command.
///
/// ```
/// use mock_interview::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["mock-interview".to_string(), "-V".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(mut args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    if let Some(arg) = args.nth(1) {
        return match arg.as_str() {
            "--version" | "-V" => CliCommand::Version,
            "--help" | "-h" => CliCommand::Help,
            _ => CliCommand::Unknown(arg),
        };
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["mock-interview", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["mock-interview", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["mock-interview", "--help"]), CliCommand::Help);
        assert_eq!(parse(&["mock-interview", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&["mock-interview"]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["mock-interview", "--sync"]),
            CliCommand::Unknown("--sync".to_string())
        );
    }
}
