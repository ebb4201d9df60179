//! Core model and partitioning engine for balanced team generation.
//!
//! This crate owns the pure, I/O-free half of the system:
//!
//! - [`Player`] and [`Team`] - the data model
//! - [`split_teams`] / [`split_teams_with_rng`] - the partitioner, a greedy
//!   multiway-partition heuristic with a random round-robin fallback for
//!   rosters whose scores carry no signal
//! - [`validate_roster`] - the input checks front ends run before calling
//!   the partitioner
//!
//! Scoring the resulting teams lives in the `teamsplit-evaluator` crate.
//!
//! # Example
//!
//! ```
//! use teamsplit_engine::{Player, split_teams, validate_roster};
//!
//! let roster = [
//!     Player::new("Alice", 9.0),
//!     Player::new("Bob", 7.0),
//!     Player::new("Carol", 4.0),
//!     Player::new("Dan", 2.0),
//! ];
//! validate_roster(&roster)?;
//!
//! let teams = split_teams(&roster, 2);
//! assert_eq!(teams.len(), 2);
//! let members: usize = teams.iter().map(|t| t.len()).sum();
//! assert_eq!(members, roster.len());
//! # Ok::<(), teamsplit_engine::RosterError>(())
//! ```

pub use self::{partition::*, player::*, roster::*, team::*};

pub mod partition;
pub mod player;
pub mod roster;
pub mod team;
