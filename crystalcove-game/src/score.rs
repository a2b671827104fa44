//! Daily completion scoring and health projection.
//!
//! The only place the tier formula lives. Everything here is a pure function
//! of the current metrics and goals so the projected health shown to the
//! player can never go stale.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BONUS_TIER_WEIGHT, CRITICAL_TIER_WEIGHT, HEALTH_GAIN, HEALTH_LOSS, HEALTH_MAX,
    IMPORTANT_TIER_WEIGHT, MEALS_PER_DAY, SCORE_GAIN_THRESHOLD, SCORE_HOLD_THRESHOLD,
};
use crate::state::{DailyMetrics, GameState, GoalConfig};

/// Derived completion tiers for the current day. Each tier covers two
/// boolean goal checks; never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub critical_complete: u8,
    pub important_complete: u8,
    pub bonus_complete: u8,
    pub completion_score: i32,
    pub health_delta: i32,
}

/// Score the day's metrics against the current goals.
#[must_use]
pub fn compute_summary(metrics: &DailyMetrics, goals: &GoalConfig) -> ProgressSummary {
    let critical_complete =
        u8::from(metrics.water >= goals.water_goal) + u8::from(metrics.alcohol <= goals.alcohol_limit);
    let important_complete =
        u8::from(metrics.steps >= goals.steps_goal) + u8::from(metrics.sleep >= goals.sleep_goal);
    let bonus_complete = u8::from(metrics.meals == MEALS_PER_DAY) + u8::from(metrics.mood.is_some());

    let completion_score = i32::from(critical_complete) * CRITICAL_TIER_WEIGHT
        + i32::from(important_complete) * IMPORTANT_TIER_WEIGHT
        + i32::from(bonus_complete) * BONUS_TIER_WEIGHT;

    let health_delta = if completion_score >= SCORE_GAIN_THRESHOLD {
        HEALTH_GAIN
    } else if completion_score >= SCORE_HOLD_THRESHOLD {
        0
    } else {
        HEALTH_LOSS
    };

    ProgressSummary {
        critical_complete,
        important_complete,
        bonus_complete,
        completion_score,
        health_delta,
    }
}

/// Preview of committed health if the day ended right now.
#[must_use]
pub fn projected_health(health: i32, summary: &ProgressSummary) -> i32 {
    (health + summary.health_delta).clamp(0, HEALTH_MAX)
}

/// Convenience wrapper scoring a whole state.
#[must_use]
pub fn summarize(state: &GameState) -> ProgressSummary {
    compute_summary(&state.metrics, &state.goals)
}
