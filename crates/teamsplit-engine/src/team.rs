use serde::{Deserialize, Serialize};

use crate::Player;

/// One output partition: an ordered set of players plus their aggregate score.
///
/// Teams start empty with a total of 0 and grow only through [`Team::push`],
/// which keeps `total_score` equal to the sum of member scores. Member order
/// is assignment order, not roster order.
///
/// # Example
///
/// ```
/// use teamsplit_engine::{Player, Team};
///
/// let mut team = Team::new();
/// team.push(Player::new("Alice", 7.0));
/// team.push(Player::new("Bob", 3.0));
/// assert_eq!(team.total_score(), 10.0);
/// assert_eq!(team.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    players: Vec<Player>,
    total_score: f32,
}

impl Team {
    /// Creates an empty team with an aggregate score of 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a player and adds their score to the team total.
    pub fn push(&mut self, player: Player) {
        self.total_score += player.score;
        self.players.push(player);
    }

    /// Members in assignment order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Sum of member scores.
    #[must_use]
    pub fn total_score(&self) -> f32 {
        self.total_score
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the team has no members yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_maintains_total() {
        let mut team = Team::new();
        assert_eq!(team.total_score(), 0.0);
        team.push(Player::new("a", 4.0));
        team.push(Player::new("b", 6.0));
        assert_eq!(team.total_score(), 10.0);
        assert_eq!(team.players()[0].name, "a");
    }

    #[test]
    fn json_round_trip() {
        let mut team = Team::new();
        team.push(Player::new("a", 4.0));
        team.push(Player::new("b", 6.0));

        let json = serde_json::to_string(&team).unwrap();
        let parsed: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, team);
        assert_eq!(parsed.total_score(), 10.0);
    }
}
