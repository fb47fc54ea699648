//! Round-robin rotation over the players still in the game.

use crate::types::*;

/// Players in join order, served one at a time and wrapping around.
///
/// The cursor is the index of the next player to serve. It is recomputed
/// against the live length after every removal.
#[derive(Debug, Clone, Default)]
pub struct PlayerRotation {
    players: Vec<Player>,
    cursor: usize,
}

impl PlayerRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rotation from loaded players, skipping duplicate ids
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Self {
        let mut rotation = Self::new();
        rotation.add_all(players);
        rotation
    }

    /// Add a player. Returns false if a player with the same id is already seated.
    pub fn add(&mut self, player: Player) -> bool {
        if self.players.contains(&player) {
            tracing::debug!("Player {} already in rotation", player.id);
            return false;
        }
        self.players.push(player);
        true
    }

    /// Add several players, returning how many were actually added
    pub fn add_all(&mut self, players: impl IntoIterator<Item = Player>) -> usize {
        players
            .into_iter()
            .map(|p| self.add(p))
            .filter(|added| *added)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Serve the player at the cursor and advance it
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&mut Player> {
        if self.players.is_empty() {
            return None;
        }
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.players.len();
        self.players.get_mut(index)
    }

    /// Remove the player most recently served by `next`.
    /// The following `next` serves the player who came after them.
    pub fn remove_current(&mut self) -> Option<Player> {
        let len = self.players.len();
        if len == 0 {
            return None;
        }
        let index = (self.cursor + len - 1) % len;
        let removed = self.players.remove(index);

        if index < self.cursor {
            self.cursor -= 1;
        }
        self.cursor = match self.players.len() {
            0 => 0,
            remaining => self.cursor % remaining,
        };

        tracing::debug!("Removed player {} from rotation", removed.id);
        Some(removed)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

impl FromIterator<Player> for PlayerRotation {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self::from_players(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation_of(n: i64) -> PlayerRotation {
        (1..=n)
            .map(|i| Player::new(format!("Player {}", i), i))
            .collect()
    }

    fn next_id(rotation: &mut PlayerRotation) -> Option<PlayerId> {
        rotation.next().map(|p| p.id)
    }

    #[test]
    fn test_empty_rotation() {
        let mut rotation = PlayerRotation::new();
        assert!(rotation.is_empty());
        assert!(rotation.next().is_none());
        assert!(rotation.remove_current().is_none());
    }

    #[test]
    fn test_add_rejects_duplicate_ids() {
        let mut rotation = PlayerRotation::new();
        assert!(rotation.add(Player::new("Alice", 1)));
        assert!(!rotation.add(Player::new("Alice again", 1)));
        assert!(rotation.add(Player::new("Bob", 2)));
        assert_eq!(rotation.len(), 2);
        assert_eq!(rotation.get(1).unwrap().display_name, "Alice");
    }

    #[test]
    fn test_add_all_counts_new_entries() {
        let mut rotation = rotation_of(2);
        let added = rotation.add_all(vec![
            Player::new("dup", 1),
            Player::new("Carol", 3),
            Player::new("Carol", 3),
            Player::new("Dave", 4),
        ]);
        assert_eq!(added, 2);
        assert_eq!(rotation.len(), 4);
    }

    #[test]
    fn test_next_visits_in_order_and_wraps() {
        let mut rotation = rotation_of(3);
        let served: Vec<_> = (0..4).filter_map(|_| next_id(&mut rotation)).collect();
        assert_eq!(served, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_remove_current_serves_following_player() {
        let mut rotation = rotation_of(4);
        assert_eq!(next_id(&mut rotation), Some(1));
        assert_eq!(next_id(&mut rotation), Some(2));
        assert_eq!(rotation.remove_current().map(|p| p.id), Some(2));
        assert_eq!(next_id(&mut rotation), Some(3));
        assert_eq!(next_id(&mut rotation), Some(4));
        assert_eq!(next_id(&mut rotation), Some(1));
        assert_eq!(next_id(&mut rotation), Some(3));
    }

    #[test]
    fn test_remove_last_in_order_wraps_to_first() {
        let mut rotation = rotation_of(3);
        for _ in 0..3 {
            rotation.next();
        }
        assert_eq!(rotation.remove_current().map(|p| p.id), Some(3));
        assert_eq!(next_id(&mut rotation), Some(1));
        assert_eq!(next_id(&mut rotation), Some(2));
        assert_eq!(next_id(&mut rotation), Some(1));
    }

    #[test]
    fn test_remove_first_player() {
        let mut rotation = rotation_of(3);
        rotation.next();
        assert_eq!(rotation.remove_current().map(|p| p.id), Some(1));
        assert_eq!(next_id(&mut rotation), Some(2));
        assert_eq!(next_id(&mut rotation), Some(3));
        assert_eq!(next_id(&mut rotation), Some(2));
    }

    #[test]
    fn test_remove_sole_player_resets_cursor() {
        let mut rotation = rotation_of(1);
        assert_eq!(next_id(&mut rotation), Some(1));
        assert_eq!(rotation.remove_current().map(|p| p.id), Some(1));
        assert!(rotation.is_empty());
        assert!(rotation.next().is_none());

        rotation.add(Player::new("Late", 9));
        assert_eq!(next_id(&mut rotation), Some(9));
    }

    #[test]
    fn test_remove_everyone_one_by_one() {
        let mut rotation = rotation_of(3);
        let mut removed = Vec::new();
        while rotation.next().is_some() {
            removed.push(rotation.remove_current().unwrap().id);
        }
        assert_eq!(removed, vec![1, 2, 3]);
    }

    #[test]
    fn test_next_returns_mutable_player() {
        let mut rotation = rotation_of(2);
        if let Some(player) = rotation.next() {
            player.guess(true);
        }
        assert_eq!(rotation.get(1).unwrap().score, 3);
        assert_eq!(rotation.get(2).unwrap().score, 0);
    }
}
