//! Roster validation: the checks an input-collecting front end must run
//! before handing players to the partitioner.
//!
//! The partitioner itself assumes pre-validated input (see
//! [`crate::split_teams`]); these helpers exist so every front end applies
//! the same rules instead of reimplementing them.

use std::collections::HashSet;

use crate::Player;

/// Lowest score a roster accepts.
pub const MIN_SCORE: f32 = 0.0;
/// Highest score a roster accepts.
pub const MAX_SCORE: f32 = 10.0;

/// A roster that cannot be partitioned as-is.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum RosterError {
    /// A player's name is empty (or whitespace only).
    #[display("player {index} has an empty name")]
    EmptyName {
        /// Zero-based position in the roster.
        index: usize,
    },
    /// Two players share a name, ignoring case.
    #[display("duplicate player name: {name}")]
    DuplicateName {
        /// The offending name as it appeared the second time.
        name: String,
    },
    /// A score is non-finite or outside [`MIN_SCORE`]`..=`[`MAX_SCORE`].
    #[display("score {score} for {name} is outside {MIN_SCORE}..={MAX_SCORE}")]
    ScoreOutOfRange {
        /// The player whose score is invalid.
        name: String,
        /// The rejected score.
        score: f32,
    },
}

/// Checks that every player has a usable name and score.
///
/// Names must be non-empty after trimming and unique case-insensitively;
/// scores must be finite and within [`MIN_SCORE`]`..=`[`MAX_SCORE`]. The
/// first violation in roster order is returned.
///
/// # Example
///
/// ```
/// use teamsplit_engine::{Player, RosterError, validate_roster};
///
/// let roster = [Player::new("Alice", 7.0), Player::new("alice", 3.0)];
/// assert_eq!(
///     validate_roster(&roster),
///     Err(RosterError::DuplicateName {
///         name: "alice".into()
///     })
/// );
/// ```
pub fn validate_roster(players: &[Player]) -> Result<(), RosterError> {
    let mut seen = HashSet::with_capacity(players.len());
    for (index, player) in players.iter().enumerate() {
        let name = player.name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName { index });
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(RosterError::DuplicateName {
                name: player.name.clone(),
            });
        }
        if !player.score.is_finite() || player.score < MIN_SCORE || player.score > MAX_SCORE {
            return Err(RosterError::ScoreOutOfRange {
                name: player.name.clone(),
                score: player.score,
            });
        }
    }
    Ok(())
}
