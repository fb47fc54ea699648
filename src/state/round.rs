use crate::console::{Announcer, GuessSource};
use crate::error::QuizResult;
use crate::types::*;

/// Asks players for guesses and narrates the outcome
#[derive(Debug)]
pub struct Quizmaster<G, A> {
    guesses: G,
    announcer: A,
}

impl<G: GuessSource, A: Announcer> Quizmaster<G, A> {
    pub fn new(guesses: G, announcer: A) -> Self {
        Self { guesses, announcer }
    }

    pub fn announce(&mut self, message: &str) {
        self.announcer.announce(message);
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    pub fn guesses(&self) -> &G {
        &self.guesses
    }

    pub fn into_parts(self) -> (G, A) {
        (self.guesses, self.announcer)
    }

    /// Quiz one player on one song until they get it or run out of chances.
    /// Returns whether the player has been eliminated.
    pub fn run_guess_round(&mut self, player: &mut Player, song: &Song) -> QuizResult<bool> {
        loop {
            if player.chances_left() == ALLOWED_CHANCES {
                self.announce_hints(player, song)?;
            }
            self.announcer
                .announce(&format!("Chances left: {}", player.chances_left()));

            let guess = self.guesses.read_guess()?;
            let correct = song.matches(guess.trim());
            let eliminated = player.guess(correct);

            tracing::debug!(
                player = player.id,
                correct,
                chances_left = player.chances_left(),
                "Guess recorded"
            );

            if correct {
                self.announcer.announce("You guessed correctly!");
                return Ok(eliminated);
            }
            self.announcer.announce("Your guess was wrong.");
            if eliminated {
                return Ok(true);
            }
        }
    }

    fn announce_hints(&mut self, player: &Player, song: &Song) -> QuizResult<()> {
        let title_letter = song.first_letter_of_title()?;
        let artist_letter = song.first_letter_of_artist()?;
        self.announcer.announce(&format!(
            "Player: {}\nGuess the name of the song:\n - First letter of name: {}\n - First letter of artist's name: {}",
            player.display_name, title_letter, artist_letter
        ));
        Ok(())
    }
}
