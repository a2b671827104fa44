//! Weigh-in log and derived weight-loss progress.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{LOG_WEIGHT_LOGGED, RECENT_WEIGH_IN_WINDOW, WEEKLY_LOSS_TARGET_LBS};
use crate::numbers::{ceil_f32_to_u32, clamp_percent, parse_float_input};
use crate::state::GameState;

/// A single weigh-in, tagged with the day it was logged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub day: u32,
    pub value: f32,
}

/// Append-only weigh-in journal plus the start/goal targets it is measured
/// against. `current` always mirrors the latest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightState {
    pub start: f32,
    pub goal: f32,
    pub current: f32,
    pub entries: Vec<WeightEntry>,
}

impl WeightState {
    /// Start a journal at the configured weight, with one seed entry for the
    /// given day.
    #[must_use]
    pub fn seeded(day: u32, start: f32, goal: f32) -> Self {
        Self {
            start,
            goal,
            current: start,
            entries: vec![WeightEntry { day, value: start }],
        }
    }

    /// Record a weigh-in: update the current weight and append to the log.
    pub fn log(&mut self, day: u32, value: f32) {
        self.current = value;
        self.entries.push(WeightEntry { day, value });
    }

    /// Derived progress toward the goal weight, at one pound per week.
    #[must_use]
    pub fn progress(&self) -> WeightProgress {
        let total_to_lose = self.start - self.goal;
        let lost_so_far = self.start - self.current;
        let remaining = (self.current - self.goal).max(0.0);
        let projected_weeks = ceil_f32_to_u32(remaining / WEEKLY_LOSS_TARGET_LBS);
        let percent_complete = clamp_percent(lost_so_far / total_to_lose * 100.0);
        WeightProgress {
            lost_so_far,
            remaining,
            projected_weeks,
            percent_complete,
        }
    }

    /// The most recent weigh-ins, newest first, capped to the panel window.
    #[must_use]
    pub fn recent(&self) -> SmallVec<[WeightEntry; RECENT_WEIGH_IN_WINDOW]> {
        self.entries
            .iter()
            .rev()
            .take(RECENT_WEIGH_IN_WINDOW)
            .copied()
            .collect()
    }
}

/// Record a weigh-in from raw input text, stamped with the current day.
/// Malformed or non-finite input is dropped without touching the journal.
pub fn log_weigh_in(state: &mut GameState, raw: &str) {
    let Some(value) = parse_float_input(raw) else {
        return;
    };
    state.weight.log(state.day, value);
    state.push_log(LOG_WEIGHT_LOGGED);
}

/// Render view for the weight panel. Pure derivation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProgress {
    pub lost_so_far: f32,
    pub remaining: f32,
    pub projected_weeks: u32,
    pub percent_complete: f32,
}
