//! Command-line argument parsing
//!
//! Supports:
//! - Checking which paths the watchlist would track
//! - Showing the span a reformat at a given line would rewrite
//! - Inspecting or creating the watchlist resource

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::host::Position;

/// Inspect the incremental reformat layer from the shell
#[derive(Parser, Debug)]
#[command(
    name = "parsync",
    version,
    about = "Incremental structural reformatting helper"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Use this watchlist file instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub watchlist: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print whether each path would be tracked automatically
    Check {
        #[arg(value_name = "PATHS", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the row span a reformat with the cursor on a line would rewrite
    Span {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Cursor line (1-indexed)
        #[arg(long, value_name = "N")]
        line: usize,

        /// Cursor column (1-indexed)
        #[arg(long, value_name = "N")]
        column: Option<usize>,
    },

    /// Print the watchlist location and patterns
    Watchlist {
        /// Create the default file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

impl CliCommand {
    /// Cursor for `span`, converted from 1-indexed (user input) to 0-indexed
    pub fn cursor(&self) -> Option<Position> {
        match self {
            CliCommand::Span { line, column, .. } => Some(Position::new(
                line.saturating_sub(1),
                column.unwrap_or(1).saturating_sub(1),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_check_takes_multiple_paths() {
        let args = parse(&["parsync", "check", "a.clj", "b.txt"]);
        assert_eq!(
            args.command,
            CliCommand::Check {
                paths: vec![PathBuf::from("a.clj"), PathBuf::from("b.txt")]
            }
        );
    }

    #[test]
    fn test_check_requires_a_path() {
        assert!(CliArgs::try_parse_from(["parsync", "check"]).is_err());
    }

    #[test]
    fn test_span_line_column_conversion() {
        let args = parse(&["parsync", "span", "core.clj", "--line", "42", "--column", "10"]);
        // 1-indexed to 0-indexed: line 42 → 41, column 10 → 9
        assert_eq!(args.command.cursor(), Some(Position::new(41, 9)));
    }

    #[test]
    fn test_span_line_without_column() {
        let args = parse(&["parsync", "span", "core.clj", "--line", "1"]);
        assert_eq!(args.command.cursor(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_span_requires_line() {
        assert!(CliArgs::try_parse_from(["parsync", "span", "core.clj"]).is_err());
    }

    #[test]
    fn test_watchlist_init_flag() {
        let args = parse(&["parsync", "watchlist", "--init"]);
        assert_eq!(args.command, CliCommand::Watchlist { init: true });
        assert_eq!(args.command.cursor(), None);
    }

    #[test]
    fn test_global_watchlist_override() {
        let args = parse(&["parsync", "check", "a.clj", "--watchlist", "/tmp/exts.txt"]);
        assert_eq!(args.watchlist, Some(PathBuf::from("/tmp/exts.txt")));
    }
}
