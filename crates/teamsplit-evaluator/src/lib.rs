//! Balance scoring for generated teams.
//!
//! Consumes the teams produced by `teamsplit-engine` and reduces them to a
//! single [`BalanceReport`]: the spread between the heaviest and lightest
//! team, the mean team total, and a normalized 0-100 balance percent. A
//! [`BalanceTier`] band maps the percent to a coarse quality label for
//! display.
//!
//! Like the partitioner, scoring is a pure function over its input: no
//! state, no I/O, `None` when there are no teams to score.
//!
//! # Example
//!
//! ```
//! use teamsplit_engine::{Player, split_teams};
//! use teamsplit_evaluator::{BalanceTier, balance_report};
//!
//! let roster = [
//!     Player::new("Alice", 9.0),
//!     Player::new("Bob", 7.0),
//!     Player::new("Carol", 4.0),
//!     Player::new("Dan", 2.0),
//! ];
//! let teams = split_teams(&roster, 2);
//! let report = balance_report(&teams).unwrap();
//! assert_eq!(report.tier(), BalanceTier::Excellent);
//! ```

pub use self::balance::*;

pub mod balance;
