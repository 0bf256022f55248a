//! Command-line interface.
//!
//! The dispatcher runs early in `main()`, before configuration and the
//! terminal are touched:
//!
//! ```ignore
//! use justicia::cli::{parse_args, run_cli_command};
//!
//! let options = run_cli_command(parse_args(std::env::args()));
//! // continue to the TUI with `options`
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// `Version` and `Help` print and exit. `Run` hands back its options.
pub fn run_cli_command(command: CliCommand) -> RunOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(options) => options,
    }
}
