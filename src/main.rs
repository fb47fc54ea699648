use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use musicquiz::cli::{Cli, Command};
use musicquiz::commands;
use musicquiz::config::QuizConfig;
use musicquiz::console::{ConsoleAnnouncer, ConsoleGuessSource};
use musicquiz::error::QuizResult;

fn main() -> ExitCode {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Logs go to stderr so the game narration on stdout stays readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "musicquiz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli.command()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> QuizResult<()> {
    match command {
        Command::Game {
            players,
            songs,
            seed,
            results,
        } => {
            let config = QuizConfig::from_env().merge(QuizConfig {
                players_file: players,
                songs_file: songs,
                results_file: results,
                seed,
            });
            commands::game(
                config,
                ConsoleGuessSource::stdio(),
                ConsoleAnnouncer::stdout(),
            )?;
        }
        Command::DebugGame { seed } => {
            let seed = seed.or(QuizConfig::from_env().seed);
            commands::debug_game(
                seed,
                ConsoleGuessSource::stdio(),
                ConsoleAnnouncer::stdout(),
            )?;
        }
        Command::NewPlayer { username } => {
            println!("Create a new User.");
            let record = commands::new_player(username, &mut ConsoleGuessSource::stdio())?;
            println!("{}", record);
        }
        Command::ReadPlayers { path } => {
            for line in commands::read_players(&path)? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
