//! The day-end transition.
//!
//! The single state-transition boundary of the game: commits the day's score
//! to health, archives the day, advances the narrative, and resets the daily
//! metrics. Atomic from the caller's perspective; callers only ever observe
//! the fully-applied result.

use crate::constants::{HEALTH_MAX, LOG_DAY_END, LOG_HEALTH_GAIN, LOG_HEALTH_LOSS, LOG_HEALTH_STEADY};
use crate::score::{self, ProgressSummary};
use crate::state::{GameState, HistoryEntry};
use crate::story::{self, StoryData};

/// Result of ending a day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayOutcome {
    pub summary: ProgressSummary,
    pub new_health: i32,
    pub record: HistoryEntry,
}

/// Commit the current day and roll over to the next one.
///
/// Order matters: health is committed and the history snapshot taken before
/// the day counter moves, so the archived entry carries the day it describes;
/// the story advances after the commit, so any health-dependent narrative
/// reads the new committed value; the metric reset comes last.
pub fn end_day(state: &mut GameState, data: &StoryData) -> DayOutcome {
    let summary = score::summarize(state);
    state.health = (state.health + summary.health_delta).clamp(0, HEALTH_MAX);

    let record = state.snapshot_day();
    state.history.push(record.clone());

    state.days_survived += 1;
    state.day += 1;

    let story_log = story::advance_story(&mut state.story, data);
    state.metrics.reset();

    state.push_log(LOG_DAY_END);
    state.push_log(health_log_key(summary.health_delta));
    state.push_log(story_log);

    DayOutcome {
        summary,
        new_health: state.health,
        record,
    }
}

const fn health_log_key(delta: i32) -> &'static str {
    if delta > 0 {
        LOG_HEALTH_GAIN
    } else if delta < 0 {
        LOG_HEALTH_LOSS
    } else {
        LOG_HEALTH_STEADY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quests;
    use crate::state::{DailyMetrics, Mood, QuestKind};
    use crate::story::story_data;

    fn perfect_day(state: &mut GameState) {
        let (water_goal, steps_goal, sleep_goal) = (
            state.goals.water_goal,
            state.goals.steps_goal,
            state.goals.sleep_goal,
        );
        quests::adjust_quest(state, QuestKind::Water, water_goal);
        quests::set_steps(state, steps_goal);
        quests::set_sleep(state, sleep_goal);
        quests::set_meals(state, 3);
        quests::set_mood(state, Mood::Upbeat);
    }

    #[test]
    fn perfect_day_commits_gain_and_archives() {
        let mut state = GameState::default();
        state.health = 80;
        perfect_day(&mut state);

        let outcome = end_day(&mut state, story_data());

        assert_eq!(outcome.summary.completion_score, 140);
        assert_eq!(outcome.new_health, 85);
        assert_eq!(state.health, 85);
        assert_eq!(state.day, 2);
        assert_eq!(state.days_survived, 1);
        assert_eq!(state.history.len(), 1);
        assert_eq!(outcome.record.day, 1);
        assert_eq!(outcome.record.mood, Some(Mood::Upbeat));
        assert!(state.logs.iter().any(|entry| entry == LOG_HEALTH_GAIN));
    }

    #[test]
    fn day_end_resets_all_daily_metrics() {
        let mut state = GameState::default();
        perfect_day(&mut state);
        quests::adjust_quest(&mut state, QuestKind::Alcohol, 2);

        end_day(&mut state, story_data());

        assert_eq!(state.metrics, DailyMetrics::default());
        assert!(state.metrics.mood.is_none());
    }

    #[test]
    fn history_records_mood_used_for_scoring_before_reset() {
        let mut state = GameState::default();
        quests::set_mood(&mut state, Mood::Rough);

        let outcome = end_day(&mut state, story_data());

        assert_eq!(outcome.record.mood, Some(Mood::Rough));
        assert!(state.metrics.mood.is_none());
    }

    #[test]
    fn neglected_day_drains_health() {
        let mut state = GameState::default();
        quests::adjust_quest(&mut state, QuestKind::Alcohol, 8);

        let outcome = end_day(&mut state, story_data());

        assert_eq!(outcome.summary.health_delta, -10);
        assert_eq!(state.health, 90);
        assert!(state.logs.iter().any(|entry| entry == LOG_HEALTH_LOSS));
    }

    #[test]
    fn untouched_day_holds_health() {
        let mut state = GameState::default();
        let outcome = end_day(&mut state, story_data());
        assert_eq!(outcome.summary.health_delta, 0);
        assert_eq!(state.health, 100);
        assert!(state.logs.iter().any(|entry| entry == LOG_HEALTH_STEADY));
    }

    #[test]
    fn health_never_leaves_bounds() {
        let mut state = GameState::default();
        state.health = 5;
        for _ in 0..3 {
            quests::adjust_quest(&mut state, QuestKind::Alcohol, 12);
            end_day(&mut state, story_data());
        }
        assert_eq!(state.health, 0);

        state.health = 98;
        perfect_day(&mut state);
        end_day(&mut state, story_data());
        assert_eq!(state.health, 100);
    }

    #[test]
    fn story_advances_once_per_day_and_saturates() {
        let mut state = GameState::default();
        for _ in 0..5 {
            end_day(&mut state, story_data());
        }
        assert_eq!(state.story.chapter_index, 2);
        assert_eq!(state.day, 6);
        assert_eq!(state.days_survived, 5);
        assert_eq!(state.history.len(), 5);
        // Entries are archived in day order.
        let days: Vec<u32> = state.history.iter().map(|entry| entry.day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
    }
}
