use crate::types::*;

impl Player {
    pub fn new(display_name: impl Into<String>, id: PlayerId) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            score: 0,
            prior_misses: 0,
            current_misses: 0,
        }
    }

    /// Record the outcome of one guess.
    /// Returns true when the player has run out of chances and is eliminated.
    pub fn guess(&mut self, correct: bool) -> bool {
        if correct {
            self.guess_correctly();
        } else {
            self.current_misses += 1;
        }
        self.is_eliminated()
    }

    /// Score is awarded from the miss count before it is reset
    fn guess_correctly(&mut self) {
        let points = POINTS_BY_MISSES
            .get(self.current_misses as usize)
            .copied()
            .unwrap_or(0);
        self.score += points;
        self.prior_misses += self.current_misses;
        self.current_misses = 0;
    }

    pub fn is_eliminated(&self) -> bool {
        self.current_misses >= ALLOWED_CHANCES
    }

    /// Chances remaining on the current song
    pub fn chances_left(&self) -> u32 {
        ALLOWED_CHANCES.saturating_sub(self.current_misses)
    }

    /// Wrong guesses across the whole game
    pub fn total_misses(&self) -> u32 {
        self.prior_misses + self.current_misses
    }

    /// Check a password against the credential hash this player was created with
    pub fn authenticate(&self, password: &str) -> bool {
        match crate::auth::credential_id(&self.display_name, password) {
            Ok(id) => PlayerId::from(id) == self.id,
            Err(e) => {
                tracing::warn!("Failed to hash credentials for {}: {}", self.display_name, e);
                false
            }
        }
    }

    pub fn standing(&self) -> PlayerStanding {
        PlayerStanding {
            username: self.display_name.clone(),
            auth_id: self.id,
            score: self.score,
            incorrect: self.total_misses(),
            eliminated: self.is_eliminated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_fresh() {
        let player = Player::new("Alice", 1);
        assert_eq!(player.score, 0);
        assert_eq!(player.chances_left(), ALLOWED_CHANCES);
        assert!(!player.is_eliminated());
    }

    #[test]
    fn test_first_try_scores_three() {
        let mut player = Player::new("Alice", 1);
        assert!(!player.guess(true));
        assert_eq!(player.score, 3);
        assert_eq!(player.current_misses, 0);
        assert_eq!(player.prior_misses, 0);
    }

    #[test]
    fn test_second_try_scores_one_and_folds_miss() {
        let mut player = Player::new("Alice", 1);
        assert!(!player.guess(false));
        assert_eq!(player.chances_left(), 1);

        assert!(!player.guess(true));
        assert_eq!(player.score, 1);
        assert_eq!(player.prior_misses, 1);
        assert_eq!(player.current_misses, 0);
        assert_eq!(player.chances_left(), ALLOWED_CHANCES);
    }

    #[test]
    fn test_two_misses_eliminate() {
        let mut player = Player::new("Alice", 1);
        assert!(!player.guess(false));
        assert!(player.guess(false));
        assert!(player.is_eliminated());
        assert_eq!(player.chances_left(), 0);
        assert_eq!(player.total_misses(), 2);
    }

    #[test]
    fn test_correct_guess_past_last_chance_scores_nothing() {
        let mut player = Player::new("Alice", 1);
        player.current_misses = ALLOWED_CHANCES;
        assert!(!player.guess(true));
        assert_eq!(player.score, 0);
        assert_eq!(player.prior_misses, ALLOWED_CHANCES);
        assert_eq!(player.current_misses, 0);
    }

    #[test]
    fn test_misses_accumulate_across_songs() {
        let mut player = Player::new("Alice", 1);
        player.guess(false);
        player.guess(true);
        player.guess(false);
        player.guess(true);
        player.guess(true);
        assert_eq!(player.score, 5);
        assert_eq!(player.prior_misses, 2);
        assert_eq!(player.total_misses(), 2);
    }

    #[test]
    fn test_equality_by_id() {
        let mut a = Player::new("Alice", 7);
        let b = Player::new("Somebody else", 7);
        a.score = 12;
        assert_eq!(a, b);
        assert_ne!(a, Player::new("Alice", 8));
    }

    #[test]
    fn test_authenticate() {
        let id = crate::auth::credential_id("alice", "hunter2").unwrap();
        let player = Player::new("alice", PlayerId::from(id));
        assert!(player.authenticate("hunter2"));
        assert!(!player.authenticate("hunter3"));
    }

    #[test]
    fn test_standing() {
        let mut player = Player::new("Alice", 4);
        player.guess(false);
        player.guess(true);
        let standing = player.standing();
        assert_eq!(standing.username, "Alice");
        assert_eq!(standing.auth_id, 4);
        assert_eq!(standing.score, 1);
        assert_eq!(standing.incorrect, 1);
        assert!(!standing.eliminated);
    }
}
