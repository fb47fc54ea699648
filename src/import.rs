//! JSON player and song lists, and the end-of-game report.
//!
//! Players file: `[{"username": "alice", "authId": 123}, ...]`
//! Songs file: `[{"name": "Oldwater", "artist": "20 Years of Winter"}, ...]`

use crate::error::QuizResult;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// A player as stored in the players file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default)]
    pub auth_id: PlayerId,
}

fn default_username() -> String {
    "Unknown".to_string()
}

impl PlayerRecord {
    /// Create a record whose id is derived from the credentials
    pub fn new_user(username: &str, password: &str) -> QuizResult<Self> {
        let auth_id = crate::auth::credential_id(username, password)?;
        Ok(Self {
            username: username.to_string(),
            auth_id: PlayerId::from(auth_id),
        })
    }
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        Player::new(record.username, record.auth_id)
    }
}

pub fn load_players(reader: impl Read) -> QuizResult<Vec<Player>> {
    let records: Vec<PlayerRecord> = serde_json::from_reader(reader)?;
    Ok(records.into_iter().map(Player::from).collect())
}

pub fn load_songs(reader: impl Read) -> QuizResult<Vec<Song>> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_players_from_path(path: impl AsRef<Path>) -> QuizResult<Vec<Player>> {
    let path = path.as_ref();
    let players = load_players(BufReader::new(File::open(path)?))?;
    tracing::info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

pub fn load_songs_from_path(path: impl AsRef<Path>) -> QuizResult<Vec<Song>> {
    let path = path.as_ref();
    let songs = load_songs(BufReader::new(File::open(path)?))?;
    tracing::info!("Loaded {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

/// Pretty-printed JSON report
pub fn write_report(writer: impl Write, report: &SessionReport) -> QuizResult<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

pub fn write_report_to_path(path: impl AsRef<Path>, report: &SessionReport) -> QuizResult<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    write_report(&mut file, report)?;
    file.flush()?;
    tracing::info!("Wrote session report to {}", path.display());
    Ok(())
}
