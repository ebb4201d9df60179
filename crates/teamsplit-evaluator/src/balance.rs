use std::fmt;

use serde::{Serialize, Serializer};
use teamsplit_engine::Team;

/// Quality summary for a set of generated teams.
///
/// The headline number is the balance percent: `100` means every team has
/// the same aggregate score, lower values mean a wider spread relative to
/// the mean. It is clamped to 0 so a pathological spread (one team far
/// heavier than the rest) still reports a usable figure instead of a
/// negative one.
///
/// Reports are derived values: recomputed on every call, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    spread: f32,
    mean_score: f32,
    #[serde(rename = "balance_percent", serialize_with = "serialize_percent")]
    percent: f32,
}

/// Renders the percent the way it is displayed: fixed-point, one decimal.
fn serialize_percent<S>(percent: &f32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{percent:.1}"))
}

impl BalanceReport {
    /// Difference between the highest and lowest team totals.
    #[must_use]
    pub fn spread(&self) -> f32 {
        self.spread
    }

    /// Mean team total.
    #[must_use]
    pub fn mean_score(&self) -> f32 {
        self.mean_score
    }

    /// Balance percent as displayed: fixed-point with one decimal,
    /// in `0.0..=100.0`.
    #[must_use]
    pub fn balance_percent(&self) -> String {
        format!("{:.1}", self.percent)
    }

    /// Quality band for the percent, for human-readable output.
    #[must_use]
    pub fn tier(&self) -> BalanceTier {
        BalanceTier::from_percent(self.percent)
    }
}

/// Coarse quality band over the balance percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceTier {
    /// Balance above 80%.
    Excellent,
    /// Balance above 60%.
    Fair,
    /// Balance at or below 60%.
    Poor,
}

impl BalanceTier {
    /// Maps a percent to its band.
    #[must_use]
    pub fn from_percent(percent: f32) -> Self {
        if percent > 80.0 {
            Self::Excellent
        } else if percent > 60.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for BalanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "excellent",
            Self::Fair => "fair",
            Self::Poor => "poor",
        };
        f.write_str(label)
    }
}

/// Scores a set of teams, or returns `None` when there is nothing to score.
///
/// `spread` is max minus min of the team totals and `mean_score` their
/// average; the percent is `100 - spread / mean * 100`, clamped to 0. When
/// the mean itself is 0 (every team total is 0) the divisor falls back to 1,
/// so an all-zero roster reports a clean `100.0` rather than a division
/// error.
///
/// # Example
///
/// ```
/// use teamsplit_engine::{Player, split_teams};
/// use teamsplit_evaluator::balance_report;
///
/// let roster = [
///     Player::new("Alice", 10.0),
///     Player::new("Bob", 8.0),
///     Player::new("Carol", 6.0),
///     Player::new("Dan", 4.0),
/// ];
/// let teams = split_teams(&roster, 2);
/// let report = balance_report(&teams).unwrap();
/// assert_eq!(report.spread(), 0.0);
/// assert_eq!(report.balance_percent(), "100.0");
///
/// assert!(balance_report(&[]).is_none());
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn balance_report(teams: &[Team]) -> Option<BalanceReport> {
    if teams.is_empty() {
        return None;
    }

    let totals = teams.iter().map(Team::total_score);
    let max = totals.clone().fold(f32::MIN, f32::max);
    let min = totals.clone().fold(f32::MAX, f32::min);
    let spread = max - min;
    let mean_score = totals.sum::<f32>() / (teams.len() as f32);

    let denom = if mean_score == 0.0 { 1.0 } else { mean_score };
    let percent = (100.0 - (spread / denom) * 100.0).max(0.0);

    Some(BalanceReport {
        spread,
        mean_score,
        percent,
    })
}
