//! Command-line interface.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use mock_interview::cli::{parse_args, run_cli_command};
//!
//! if let Some(result) = run_cli_command(parse_args(std::env::args())) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{help_text, version_text, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`], otherwise the outcome of the
/// command.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(Ok(()))
        }
        CliCommand::Help => {
            print!("{}", help_text());
            Some(Ok(()))
        }
        CliCommand::Unknown(arg) => Some(Err(eyre!(
            "unrecognised argument '{}' (see --help)",
            arg
        ))),
        CliCommand::RunTui => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(CliCommand::RunTui).is_none());
    }

    #[test]
    fn test_unknown_is_error() {
        let result = run_cli_command(CliCommand::Unknown("--nope".to_string())).unwrap();
        assert!(result.unwrap_err().to_string().contains("--nope"));
    }
}
