use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type PlayerId = i64;
pub type SessionId = String;

/// How many wrong guesses a player may make on one song before elimination
pub const ALLOWED_CHANCES: u32 = 2;

/// Points for a correct guess, indexed by misses already made on the song
pub const POINTS_BY_MISSES: [u32; 2] = [3, 1];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Running,
    Over,
}

/// A song to be guessed. Songs are compared by value.
///
/// The JSON import format names the title `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Song {
    #[serde(rename = "name")]
    pub title: String,
    pub artist: String,
}

/// A contestant and their per-game state
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub score: u32,
    /// Misses on songs already resolved
    pub prior_misses: u32,
    /// Misses on the song currently being guessed
    pub current_misses: u32,
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

/// Final result line for one player
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStanding {
    pub username: String,
    pub auth_id: PlayerId,
    pub score: u32,
    pub incorrect: u32,
    pub eliminated: bool,
}

/// A serializable summary of a finished (or abandoned) session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub session_id: SessionId,
    /// Export timestamp (RFC 3339)
    pub finished_at: String,
    pub phase: GamePhase,
    pub songs_resolved: u32,
    pub songs_left: usize,
    pub standings: Vec<PlayerStanding>,
}
