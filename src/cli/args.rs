//! Command-line argument parsing.
//!
//! Arguments are few enough to match by hand. Unknown arguments are
//! ignored so a stray flag never blocks the TUI from starting.

use std::path::PathBuf;

/// Options that shape a TUI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Model override (`--model <name>`)
    pub model: Option<String>,
    /// Log file override (`--log-file <path>`)
    pub log_file: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over anything else on the line. A value
/// flag at the end of the line without its value is ignored.
///
/// # Examples
///
/// ```
/// use justicia::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["justicia".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--model" => {
                if let Some(model) = args.next() {
                    options.model = Some(model);
                }
            }
            "--log-file" => {
                if let Some(path) = args.next() {
                    options.log_file = Some(PathBuf::from(path));
                }
            }
            _ => {
                if let Some(model) = arg.strip_prefix("--model=") {
                    options.model = Some(model.to_string());
                } else if let Some(path) = arg.strip_prefix("--log-file=") {
                    options.log_file = Some(PathBuf::from(path));
                }
            }
        }
    }
    CliCommand::Run(options)
}
