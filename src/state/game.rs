use super::{PlayerRotation, Quizmaster, SongPool};
use crate::console::{Announcer, GuessSource};
use crate::error::QuizResult;
use crate::types::*;

/// One session of the quiz: players take turns until the songs or the
/// players run out.
#[derive(Debug)]
pub struct Game<G, A> {
    pub id: SessionId,
    phase: GamePhase,
    players: PlayerRotation,
    songs: SongPool,
    quizmaster: Quizmaster<G, A>,
    /// Dropped from the rotation but kept for the final standings
    eliminated: Vec<Player>,
    songs_resolved: u32,
}

impl<G: GuessSource, A: Announcer> Game<G, A> {
    pub fn new(players: PlayerRotation, songs: SongPool, guesses: G, announcer: A) -> Self {
        let game = Self {
            id: ulid::Ulid::new().to_string(),
            phase: GamePhase::Running,
            players,
            songs,
            quizmaster: Quizmaster::new(guesses, announcer),
            eliminated: Vec::new(),
            songs_resolved: 0,
        };
        tracing::info!(
            "Created game {} with {} players and {} songs",
            game.id,
            game.players.len(),
            game.songs.count()
        );
        game
    }

    pub fn players(&self) -> &PlayerRotation {
        &self.players
    }

    pub fn songs(&self) -> &SongPool {
        &self.songs
    }

    pub fn eliminated(&self) -> &[Player] {
        &self.eliminated
    }

    pub fn quizmaster(&self) -> &Quizmaster<G, A> {
        &self.quizmaster
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn songs_resolved(&self) -> u32 {
        self.songs_resolved
    }

    /// True once the game has ended or either collection has run dry
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over || self.players.is_empty() || self.songs.is_empty()
    }

    /// Play a single round: next player, next song.
    /// Returns true when the session is over.
    pub fn play_once(&mut self) -> QuizResult<bool> {
        if self.phase == GamePhase::Over {
            return Ok(true);
        }

        let Some(player) = self.players.next() else {
            return Ok(self.finish());
        };
        let Some(song) = self.songs.draw() else {
            return Ok(self.finish());
        };

        let eliminated = self.quizmaster.run_guess_round(player, &song)?;
        if eliminated {
            let message = format!(
                "{} messed up at {} and has been eliminated.",
                player.display_name,
                song.describe()
            );
            self.quizmaster.announce(&message);
            if let Some(out) = self.players.remove_current() {
                tracing::info!("Player {} eliminated", out.id);
                self.eliminated.push(out);
            }
        } else {
            self.quizmaster.announce("...");
        }

        let no_more_songs = self.songs.is_empty();
        let no_more_players = self.players.is_empty();
        let over = no_more_songs || no_more_players;
        tracing::debug!(
            is_game_over = over,
            no_more_songs,
            no_more_players,
            "Round finished"
        );

        // The final round only counts if its song was actually guessed
        if !over || !eliminated {
            self.songs_resolved += 1;
        }

        if over {
            self.finish();
        }
        Ok(over)
    }

    /// Play until the players or the songs are exhausted.
    ///
    /// Returns the number of rounds completed, not the number of correct
    /// guesses: a round that eliminates a player still counts unless it
    /// ends the session.
    pub fn play(&mut self) -> QuizResult<u32> {
        while !self.play_once()? {}
        Ok(self.songs_resolved)
    }

    /// Everyone who took part, best score first
    pub fn standings(&self) -> Vec<PlayerStanding> {
        let mut standings: Vec<_> = self
            .players
            .iter()
            .chain(self.eliminated.iter())
            .map(Player::standing)
            .collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            session_id: self.id.clone(),
            finished_at: chrono::Utc::now().to_rfc3339(),
            phase: self.phase,
            songs_resolved: self.songs_resolved,
            songs_left: self.songs.count(),
            standings: self.standings(),
        }
    }

    pub fn into_quizmaster(self) -> Quizmaster<G, A> {
        self.quizmaster
    }

    fn finish(&mut self) -> bool {
        if self.phase != GamePhase::Over {
            self.phase = GamePhase::Over;
            tracing::info!(
                "Game {} over: {} songs resolved, {} players left, {} songs left",
                self.id,
                self.songs_resolved,
                self.players.len(),
                self.songs.count()
            );
        }
        true
    }
}
