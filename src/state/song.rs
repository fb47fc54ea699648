use crate::error::{QuizError, QuizResult};
use crate::types::Song;
use std::fmt;

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Exact comparison against the title. Callers trim the guess first.
    pub fn matches(&self, guess: &str) -> bool {
        self.title == guess
    }

    pub fn first_letter_of_title(&self) -> QuizResult<char> {
        self.title.chars().next().ok_or(QuizError::EmptyField("title"))
    }

    pub fn first_letter_of_artist(&self) -> QuizResult<char> {
        self.artist
            .chars()
            .next()
            .ok_or(QuizError::EmptyField("artist"))
    }

    /// "<title> by <artist>"
    pub fn describe(&self) -> String {
        format!("{} by {}", self.title, self.artist)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}
