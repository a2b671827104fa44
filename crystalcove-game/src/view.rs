//! Render snapshot handed to a UI layer.
//!
//! Everything a front end needs to repaint after a mutation, derived fresh
//! from state on every call so nothing shown can be stale.

use serde::Serialize;
use smallvec::SmallVec;

use crate::constants::{HEALTH_DANGER_THRESHOLD, RECENT_WEIGH_IN_WINDOW};
use crate::score::{self, ProgressSummary};
use crate::state::{GameState, Mood};
use crate::story::{ChapterView, StoryData};
use crate::weight::{WeightEntry, WeightProgress};

/// Current quest values paired with the goals they are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuestView {
    pub water: i32,
    pub water_goal: i32,
    pub alcohol: i32,
    pub alcohol_limit: i32,
    pub steps: i32,
    pub steps_goal: i32,
    pub sleep: f32,
    pub sleep_goal: f32,
    pub meals: u8,
    pub mood: Option<Mood>,
}

/// Full render snapshot for one repaint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub day: u32,
    pub days_survived: u32,
    pub health: i32,
    pub projected_health: i32,
    pub danger: bool,
    pub summary: ProgressSummary,
    pub quests: QuestView,
    pub chapter: Option<ChapterView>,
    pub weight: WeightProgress,
    pub recent_weigh_ins: SmallVec<[WeightEntry; RECENT_WEIGH_IN_WINDOW]>,
}

/// Derive the full view from state. The story panel shows committed health;
/// the health bar shows the live projection.
#[must_use]
pub fn render(state: &GameState, data: &StoryData) -> GameView {
    let summary = score::summarize(state);
    let projected_health = score::projected_health(state.health, &summary);
    GameView {
        day: state.day,
        days_survived: state.days_survived,
        health: state.health,
        projected_health,
        danger: projected_health < HEALTH_DANGER_THRESHOLD,
        summary,
        quests: QuestView {
            water: state.metrics.water,
            water_goal: state.goals.water_goal,
            alcohol: state.metrics.alcohol,
            alcohol_limit: state.goals.alcohol_limit,
            steps: state.metrics.steps,
            steps_goal: state.goals.steps_goal,
            sleep: state.metrics.sleep,
            sleep_goal: state.goals.sleep_goal,
            meals: state.metrics.meals,
            mood: state.metrics.mood,
        },
        chapter: data.view(&state.story, state.health),
        weight: state.weight.progress(),
        recent_weigh_ins: state.weight.recent(),
    }
}
