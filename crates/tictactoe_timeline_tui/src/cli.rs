//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_timeline::SortOrder;

/// Tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with time-travel replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the settings file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "tictactoe_timeline.toml")]
        config: PathBuf,

        /// Log file, overriding the settings file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a sequence of moves and print the resulting position
    Replay {
        /// Cell indices 0-8, comma separated (illegal moves are skipped)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History index to view after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Move-list ordering, overriding the settings file
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Path to the settings file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "tictactoe_timeline.toml")]
        config: PathBuf,
    },
}

/// Move-list ordering as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Oldest move first
    Asc,
    /// Newest move first
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}
