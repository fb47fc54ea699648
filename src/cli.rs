//! Command-line interface for musicquiz.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Music quiz - guess song titles from their first letters
#[derive(Parser, Debug)]
#[command(name = "musicquiz")]
#[command(about = "Text-based music trivia game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `game`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Play a game on the console with players and songs loaded from JSON
    Game {
        /// JSON file of players (prompted for if not given)
        #[arg(long)]
        players: Option<PathBuf>,

        /// JSON file of songs (prompted for if not given)
        #[arg(long)]
        songs: Option<PathBuf>,

        /// Seed for a reproducible song order
        #[arg(long)]
        seed: Option<u64>,

        /// Write the final standings to this JSON file
        #[arg(long)]
        results: Option<PathBuf>,
    },

    /// Play with three built-in players and four built-in songs
    DebugGame {
        /// Seed for a reproducible song order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Create a player record from a username and password (read from stdin)
    NewPlayer {
        /// Username of the new player (prompted for if not given)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Print the players found in a players file
    ReadPlayers {
        /// Path to the players JSON file
        path: PathBuf,
    },
}

impl Cli {
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Game {
            players: None,
            songs: None,
            seed: None,
            results: None,
        })
    }
}
