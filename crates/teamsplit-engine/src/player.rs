use serde::{Deserialize, Serialize};

/// A named participant carrying a skill rating.
///
/// Players are the unit being distributed across teams. The engine never
/// mutates a player; partitioning only decides team membership.
///
/// # Example
///
/// ```
/// use teamsplit_engine::Player;
///
/// let player = Player::new("Alice", 7.0);
/// assert_eq!(player.name, "Alice");
/// assert_eq!(player.score, 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Expected to be non-empty and unique within a roster
    /// (case-insensitively); see [`crate::roster::validate_roster`].
    pub name: String,
    /// Skill rating. Higher means stronger.
    pub score: f32,
}

impl Player {
    /// Creates a player from a name and score.
    #[must_use]
    pub fn new(name: impl Into<String>, score: f32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}
