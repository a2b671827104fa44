//! Centralized balance and tuning constants for Crystal Cove game logic.
//!
//! These values define the deterministic math for daily scoring and the
//! day-end transition. Keeping them together ensures that gameplay can only
//! be adjusted via code changes reviewed in version control, rather than
//! through external JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_DAY_END: &str = "log.day.end";
pub(crate) const LOG_HEALTH_GAIN: &str = "log.health.gain";
pub(crate) const LOG_HEALTH_STEADY: &str = "log.health.steady";
pub(crate) const LOG_HEALTH_LOSS: &str = "log.health.loss";
pub(crate) const LOG_STORY_ADVANCE: &str = "log.story.advance";
pub(crate) const LOG_STORY_FINALE: &str = "log.story.finale";
pub(crate) const LOG_WEIGHT_LOGGED: &str = "log.weight.logged";
pub(crate) const LOG_ALCOHOL_CAPPED: &str = "log.alcohol.capped";

// Daily metric bounds ------------------------------------------------------
pub(crate) const ALCOHOL_HARD_CAP: i32 = 12;
pub(crate) const STEPS_HARD_CAP: i32 = 50_000;
pub(crate) const SLEEP_HARD_CAP: f32 = 24.0;
pub(crate) const MEALS_PER_DAY: u8 = 3;

// Default goals ------------------------------------------------------------
pub(crate) const DEFAULT_WATER_GOAL: i32 = 8;
pub(crate) const DEFAULT_ALCOHOL_LIMIT: i32 = 6;
pub(crate) const DEFAULT_STEPS_GOAL: i32 = 10_000;
pub(crate) const DEFAULT_SLEEP_GOAL: f32 = 7.0;
pub(crate) const DEFAULT_START_WEIGHT: f32 = 150.0;
pub(crate) const DEFAULT_GOAL_WEIGHT: f32 = 135.0;

// Scoring ------------------------------------------------------------------
pub(crate) const CRITICAL_TIER_WEIGHT: i32 = 40;
pub(crate) const IMPORTANT_TIER_WEIGHT: i32 = 20;
pub(crate) const BONUS_TIER_WEIGHT: i32 = 10;
pub(crate) const SCORE_GAIN_THRESHOLD: i32 = 60;
pub(crate) const SCORE_HOLD_THRESHOLD: i32 = 40;
pub(crate) const HEALTH_GAIN: i32 = 5;
pub(crate) const HEALTH_LOSS: i32 = -10;
pub(crate) const HEALTH_MAX: i32 = 100;
pub(crate) const HEALTH_DANGER_THRESHOLD: i32 = 40;

// Nutrition heuristics -----------------------------------------------------
pub(crate) const ACTIVITY_HIGH_STEPS: i32 = 10_000;
pub(crate) const ACTIVITY_MODERATE_STEPS: i32 = 6_000;
pub(crate) const SLEEP_RESTED_HOURS: f32 = 7.0;
pub(crate) const SLEEP_OK_HOURS: f32 = 6.0;

// Weight tracking ----------------------------------------------------------
pub(crate) const WEEKLY_LOSS_TARGET_LBS: f32 = 1.0;
pub(crate) const RECENT_WEIGH_IN_WINDOW: usize = 5;
