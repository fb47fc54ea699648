//! What each subcommand does, written against the I/O traits so the whole
//! flow can be driven from tests.

use crate::config::QuizConfig;
use crate::console::{Announcer, ConsoleGuessSource, GuessSource};
use crate::error::QuizResult;
use crate::import::{self, PlayerRecord};
use crate::rng::RandomIndex;
use crate::state::{Game, PlayerRotation, SongPool};
use crate::types::*;
use std::io::{BufRead, Write};

/// Players used by `debug-game`
pub fn debug_players(count: i64) -> Vec<Player> {
    (1..=count)
        .map(|i| Player::new(format!("Player {}", i), i))
        .collect()
}

/// Songs used by `debug-game`
pub fn debug_songs() -> Vec<Song> {
    vec![
        Song::new("DMCA", "City Animals"),
        Song::new("Oldwater", "20 Years of Winter"),
        Song::new("Forwards", "Unknown"),
        Song::new("Laughing outside the moon", "Ball"),
    ]
}

/// Pool drawing at random, reproducibly when a seed is given
pub fn random_pool(songs: Vec<Song>, seed: Option<u64>) -> SongPool {
    let picker = match seed {
        Some(seed) => {
            tracing::info!("Drawing songs with seed {}", seed);
            RandomIndex::seeded(seed)
        }
        None => RandomIndex::from_entropy(),
    };
    let mut pool = SongPool::with_picker(picker);
    let added = pool.add_all(songs);
    tracing::debug!("Song pool holds {} songs", added);
    pool
}

/// Run a session to completion and return its report
pub fn run_session<G: GuessSource, A: Announcer>(
    players: Vec<Player>,
    pool: SongPool,
    guesses: G,
    announcer: A,
) -> QuizResult<(SessionReport, A)> {
    let mut game = Game::new(PlayerRotation::from_players(players), pool, guesses, announcer);
    let songs_passed = game.play()?;
    let report = game.report();

    let (_, mut announcer) = game.into_quizmaster().into_parts();
    announcer.announce(&format!("Songs guessed: {}", songs_passed));
    Ok((report, announcer))
}

/// `game`: load the lists (asking for missing paths) and play on the console
pub fn game<R: BufRead, W: Write, A: Announcer>(
    config: QuizConfig,
    mut console: ConsoleGuessSource<R, W>,
    announcer: A,
) -> QuizResult<SessionReport> {
    let players_file = match config.players_file {
        Some(path) => path,
        None => console.ask("Path to JSON file of players: ")?.trim().into(),
    };
    let players = import::load_players_from_path(&players_file)?;

    let songs_file = match config.songs_file {
        Some(path) => path,
        None => console.ask("Path to JSON file of songs: ")?.trim().into(),
    };
    let songs = import::load_songs_from_path(&songs_file)?;

    let (report, _) = run_session(players, random_pool(songs, config.seed), console, announcer)?;

    if let Some(path) = config.results_file {
        import::write_report_to_path(path, &report)?;
    }
    Ok(report)
}

/// `debug-game`: three numbered players and the built-in songs
pub fn debug_game<G: GuessSource, A: Announcer>(
    seed: Option<u64>,
    guesses: G,
    announcer: A,
) -> QuizResult<SessionReport> {
    let (report, _) = run_session(
        debug_players(3),
        random_pool(debug_songs(), seed),
        guesses,
        announcer,
    )?;
    Ok(report)
}

/// `new-player`: build an import record from credentials
pub fn new_player<R: BufRead, W: Write>(
    username: Option<String>,
    console: &mut ConsoleGuessSource<R, W>,
) -> QuizResult<String> {
    let username = match username {
        Some(name) => name,
        None => console.ask("Username: ")?,
    };
    let password = console.ask("Password: ")?;
    let record = PlayerRecord::new_user(&username, &password)?;
    Ok(serde_json::to_string(&record)?)
}

/// `read-players`: one line per player in the file
pub fn read_players(path: &std::path::Path) -> QuizResult<Vec<String>> {
    Ok(import::load_players_from_path(path)?
        .iter()
        .map(|p| format!("{} (id {})", p.display_name, p.id))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedGuesses;
    use std::io::Cursor;

    #[test]
    fn test_debug_players() {
        let players = debug_players(3);
        assert_eq!(players.len(), 3);
        assert_eq!(players[2].display_name, "Player 3");
        assert_eq!(players[2].id, 3);
    }

    #[test]
    fn test_random_pool_dedupes() {
        let mut songs = debug_songs();
        songs.push(Song::new("DMCA", "City Animals"));
        assert_eq!(random_pool(songs, Some(1)).count(), 4);
    }

    #[test]
    fn test_run_session_announces_total() {
        let (report, messages) = run_session(
            debug_players(1),
            SongPool::from_songs(vec![Song::new("Alpha", "X")]),
            ScriptedGuesses::new(["Alpha"]),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(report.songs_resolved, 1);
        assert_eq!(messages.last().unwrap(), "Songs guessed: 1");
    }

    #[test]
    fn test_debug_game_all_wrong_ends_with_eliminations() {
        let report = debug_game(Some(3), ScriptedGuesses::new(vec!["?"; 6]), Vec::new()).unwrap();
        assert_eq!(report.phase, GamePhase::Over);
        assert_eq!(report.songs_resolved, 2);
        assert_eq!(report.songs_left, 1);
        assert!(report.standings.iter().all(|s| s.eliminated));
    }

    #[test]
    fn test_game_prompts_for_paths_and_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let players = dir.path().join("players.json");
        let songs = dir.path().join("songs.json");
        let results = dir.path().join("results.json");
        std::fs::write(&players, r#"[{"username": "alice", "authId": 1}]"#).unwrap();
        std::fs::write(&songs, r#"[{"name": "Alpha", "artist": "X"}]"#).unwrap();

        let input = format!("{}\n{}\nAlpha\n", players.display(), songs.display());
        let console = ConsoleGuessSource::new(Cursor::new(input), Vec::new());
        let config = QuizConfig {
            results_file: Some(results.clone()),
            ..Default::default()
        };

        let report = game(config, console, Vec::new()).unwrap();
        assert_eq!(report.songs_resolved, 1);
        assert_eq!(report.standings[0].score, 3);
        assert!(results.exists());
    }

    #[test]
    fn test_new_player_reads_password() {
        let mut console = ConsoleGuessSource::new(Cursor::new("hunter2\n"), Vec::new());
        let json = new_player(Some("alice".to_string()), &mut console).unwrap();
        let record: PlayerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.username, "alice");
        assert!(Player::from(record).authenticate("hunter2"));
    }

    #[test]
    fn test_read_players() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(&path, r#"[{"username": "bob", "authId": 5}]"#).unwrap();
        assert_eq!(read_players(&path).unwrap(), vec!["bob (id 5)".to_string()]);
    }
}
