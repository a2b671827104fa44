//! Daily quest mutations.
//!
//! Every write clamps to its domain, so no call can leave a metric out of
//! range. Malformed numeric input never reaches these functions; the session
//! layer drops it first (see `numbers`).

use crate::constants::{
    ALCOHOL_HARD_CAP, LOG_ALCOHOL_CAPPED, MEALS_PER_DAY, SLEEP_HARD_CAP, STEPS_HARD_CAP,
};
use crate::state::{GameState, Mood, QuestKind};

/// Nudge a counted quest up or down. Over- and undershoot are clamped, not
/// rejected: water saturates at its goal, alcohol at the hard cap of 12.
pub fn adjust_quest(state: &mut GameState, kind: QuestKind, delta: i32) {
    match kind {
        QuestKind::Water => {
            state.metrics.water =
                (state.metrics.water.saturating_add(delta)).clamp(0, state.goals.water_goal);
        }
        QuestKind::Alcohol => {
            state.metrics.alcohol =
                (state.metrics.alcohol.saturating_add(delta)).clamp(0, ALCOHOL_HARD_CAP);
        }
    }
}

/// Move the alcohol limit. Lowering the limit below drinks already logged
/// caps the logged count down to the new limit; the excess is dropped, not
/// flagged.
pub fn set_alcohol_limit(state: &mut GameState, value: i32) {
    state.goals.alcohol_limit = value.clamp(0, ALCOHOL_HARD_CAP);
    if state.metrics.alcohol > state.goals.alcohol_limit {
        state.metrics.alcohol = state.goals.alcohol_limit;
        state.push_log(LOG_ALCOHOL_CAPPED);
    }
}

pub fn set_steps(state: &mut GameState, value: i32) {
    state.metrics.steps = value.clamp(0, STEPS_HARD_CAP);
}

pub fn set_sleep(state: &mut GameState, hours: f32) {
    state.metrics.sleep = hours.clamp(0.0, SLEEP_HARD_CAP);
}

/// Record how many of the three meal checkboxes are ticked.
pub fn set_meals(state: &mut GameState, completed: u8) {
    state.metrics.meals = completed.min(MEALS_PER_DAY);
}

pub fn set_mood(state: &mut GameState, mood: Mood) {
    state.metrics.mood = Some(mood);
}
