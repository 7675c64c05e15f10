//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - add: append a todo to the store
//! - view: list, select, or count todos
//! - delete: remove one todo or all of them
//! - interactive: prompt-driven mode

use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand};

/// Todor - a flat-file todo manager
#[derive(Parser, Debug)]
#[command(name = "todor")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Configure:\n  TODO_FILENAME  where the todo file will be")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo
    Add {
        /// The title
        #[arg(long)]
        title: String,

        /// The due date
        #[arg(long, value_name = "YYYY-MM-DD")]
        due: Option<NaiveDate>,

        /// Don't show output on success
        #[arg(short, long)]
        silent: bool,
    },

    /// View todos
    View {
        /// Show all todos
        #[arg(long)]
        all: bool,

        /// Show one todo, use --line to choose which
        #[arg(long)]
        one: bool,

        /// Select a specific line
        #[arg(long, default_value_t = 1, value_parser = parse_position)]
        line: usize,

        /// Show total count of todos
        #[arg(long)]
        count: bool,
    },

    /// Remove a todo
    Delete(DeleteArgs),

    /// Open in interactive mode
    Interactive,
}

/// Arguments for `delete`: exactly one of `--all` or `--line`.
#[derive(Args, Debug)]
#[command(group = ArgGroup::new("target").required(true).args(["all", "line"]))]
pub struct DeleteArgs {
    /// Remove all todos, leaving an empty todo file
    #[arg(long)]
    pub all: bool,

    /// With --all, remove the todo file itself instead of recreating it
    #[arg(long, requires = "all")]
    pub purge: bool,

    /// Remove a specific line
    #[arg(long, value_parser = parse_position)]
    pub line: Option<usize>,
}

/// Parse a 1-based record position, rejecting zero and non-numeric input.
fn parse_position(value: &str) -> Result<usize, String> {
    let position: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if position == 0 {
        return Err("positions start at 1".to_string());
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["todor"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_with_title() {
        let cli = Cli::try_parse_from(["todor", "add", "--title", "buy milk"]).unwrap();
        match cli.command {
            Some(Commands::Add { title, due, silent }) => {
                assert_eq!(title, "buy milk");
                assert!(due.is_none());
                assert!(!silent);
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_with_due_date() {
        let cli =
            Cli::try_parse_from(["todor", "add", "--title", "taxes", "--due", "2026-04-15"])
                .unwrap();
        match cli.command {
            Some(Commands::Add { due, .. }) => {
                assert_eq!(due, NaiveDate::from_ymd_opt(2026, 4, 15));
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_rejects_malformed_due_date() {
        let result =
            Cli::try_parse_from(["todor", "add", "--title", "taxes", "--due", "15/04/2026"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_silent_flag() {
        let cli = Cli::try_parse_from(["todor", "add", "--title", "quiet", "-s"]).unwrap();
        match cli.command {
            Some(Commands::Add { silent, .. }) => assert!(silent),
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_requires_title() {
        let result = Cli::try_parse_from(["todor", "add"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_view_defaults() {
        let cli = Cli::try_parse_from(["todor", "view"]).unwrap();
        match cli.command {
            Some(Commands::View {
                all,
                one,
                line,
                count,
            }) => {
                assert!(!all);
                assert!(!one);
                assert_eq!(line, 1);
                assert!(!count);
            }
            _ => panic!("Expected view command"),
        }
    }

    #[test]
    fn test_view_all() {
        let cli = Cli::try_parse_from(["todor", "view", "--all"]).unwrap();
        match cli.command {
            Some(Commands::View { all, .. }) => assert!(all),
            _ => panic!("Expected view command"),
        }
    }

    #[test]
    fn test_view_one_with_line() {
        let cli = Cli::try_parse_from(["todor", "view", "--one", "--line", "3"]).unwrap();
        match cli.command {
            Some(Commands::View { one, line, .. }) => {
                assert!(one);
                assert_eq!(line, 3);
            }
            _ => panic!("Expected view command"),
        }
    }

    #[test]
    fn test_view_count() {
        let cli = Cli::try_parse_from(["todor", "view", "--count"]).unwrap();
        match cli.command {
            Some(Commands::View { count, .. }) => assert!(count),
            _ => panic!("Expected view command"),
        }
    }

    #[test]
    fn test_view_rejects_line_zero() {
        let result = Cli::try_parse_from(["todor", "view", "--one", "--line", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_view_rejects_non_numeric_line() {
        let result = Cli::try_parse_from(["todor", "view", "--one", "--line", "two"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_line() {
        let cli = Cli::try_parse_from(["todor", "delete", "--line", "2"]).unwrap();
        match cli.command {
            Some(Commands::Delete(args)) => {
                assert!(!args.all);
                assert!(!args.purge);
                assert_eq!(args.line, Some(2));
            }
            _ => panic!("Expected delete command"),
        }
    }

    #[test]
    fn test_delete_all() {
        let cli = Cli::try_parse_from(["todor", "delete", "--all"]).unwrap();
        match cli.command {
            Some(Commands::Delete(args)) => {
                assert!(args.all);
                assert!(!args.purge);
                assert!(args.line.is_none());
            }
            _ => panic!("Expected delete command"),
        }
    }

    #[test]
    fn test_delete_all_purge() {
        let cli = Cli::try_parse_from(["todor", "delete", "--all", "--purge"]).unwrap();
        match cli.command {
            Some(Commands::Delete(args)) => {
                assert!(args.all);
                assert!(args.purge);
            }
            _ => panic!("Expected delete command"),
        }
    }

    #[test]
    fn test_delete_requires_a_target() {
        let result = Cli::try_parse_from(["todor", "delete"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_all_conflicts_with_line() {
        let result = Cli::try_parse_from(["todor", "delete", "--all", "--line", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_purge_requires_all() {
        let result = Cli::try_parse_from(["todor", "delete", "--line", "1", "--purge"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_rejects_line_zero() {
        let result = Cli::try_parse_from(["todor", "delete", "--line", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_interactive_command() {
        let cli = Cli::try_parse_from(["todor", "interactive"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Interactive)));
    }

    #[test]
    fn test_unrecognized_command_fails() {
        let result = Cli::try_parse_from(["todor", "archive"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_works() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        // Version flag causes early exit with error (expected)
        let result = Cli::try_parse_from(["todor", "--version"]);
        assert!(result.is_err());
    }
}
