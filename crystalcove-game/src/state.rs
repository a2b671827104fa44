use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{
    ALCOHOL_HARD_CAP, DEFAULT_ALCOHOL_LIMIT, DEFAULT_GOAL_WEIGHT, DEFAULT_SLEEP_GOAL,
    DEFAULT_START_WEIGHT, DEFAULT_STEPS_GOAL, DEFAULT_WATER_GOAL, HEALTH_MAX, SLEEP_HARD_CAP,
};
use crate::story::StoryProgress;
use crate::weight::WeightState;

/// Self-reported mood for the current day, level 1 (rough) through 5
/// (energized). Absent until the player picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Rough,
    Low,
    Neutral,
    Upbeat,
    Energized,
}

impl Mood {
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Rough => 1,
            Self::Low => 2,
            Self::Neutral => 3,
            Self::Upbeat => 4,
            Self::Energized => 5,
        }
    }

    /// Map a raw 1..=5 level to a mood, `None` outside the scale.
    #[must_use]
    pub const fn from_level(level: i32) -> Option<Self> {
        match level {
            1 => Some(Self::Rough),
            2 => Some(Self::Low),
            3 => Some(Self::Neutral),
            4 => Some(Self::Upbeat),
            5 => Some(Self::Energized),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rough => "Rough",
            Self::Low => "Low",
            Self::Neutral => "Neutral",
            Self::Upbeat => "Upbeat",
            Self::Energized => "Energized",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rough" => Ok(Self::Rough),
            "low" => Ok(Self::Low),
            "neutral" => Ok(Self::Neutral),
            "upbeat" => Ok(Self::Upbeat),
            "energized" => Ok(Self::Energized),
            _ => Err(()),
        }
    }
}

/// Which of the two fairy guides the player sided with, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideChoice {
    Astra,
    Nox,
    Neutral,
}

impl GuideChoice {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Astra => "astra",
            Self::Nox => "nox",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for GuideChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GuideChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astra" => Ok(Self::Astra),
            "nox" => Ok(Self::Nox),
            "neutral" => Ok(Self::Neutral),
            _ => Err(()),
        }
    }
}

/// Quests adjusted by +/- delta buttons rather than absolute entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Water,
    Alcohol,
}

impl QuestKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Alcohol => "alcohol",
        }
    }
}

/// Goal configuration validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("water goal must be at least 1 glass")]
    WaterGoal,
    #[error("alcohol limit must be within 0..=12 drinks")]
    AlcoholLimit,
    #[error("steps goal must be at least 1 step")]
    StepsGoal,
    #[error("sleep goal must be within (0, 24] hours")]
    SleepGoal,
    #[error("start weight must be above goal weight, both positive")]
    WeightTargets,
}

/// Daily goals and weight targets. Fixed at session start except for the
/// alcohol limit, which the player may tighten or loosen mid-day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    #[serde(default = "default_water_goal")]
    pub water_goal: i32,
    #[serde(default = "default_alcohol_limit")]
    pub alcohol_limit: i32,
    #[serde(default = "default_steps_goal")]
    pub steps_goal: i32,
    #[serde(default = "default_sleep_goal")]
    pub sleep_goal: f32,
    #[serde(default = "default_start_weight")]
    pub start_weight: f32,
    #[serde(default = "default_goal_weight")]
    pub goal_weight: f32,
}

fn default_water_goal() -> i32 {
    DEFAULT_WATER_GOAL
}

fn default_alcohol_limit() -> i32 {
    DEFAULT_ALCOHOL_LIMIT
}

fn default_steps_goal() -> i32 {
    DEFAULT_STEPS_GOAL
}

fn default_sleep_goal() -> f32 {
    DEFAULT_SLEEP_GOAL
}

fn default_start_weight() -> f32 {
    DEFAULT_START_WEIGHT
}

fn default_goal_weight() -> f32 {
    DEFAULT_GOAL_WEIGHT
}

impl GoalConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            water_goal: DEFAULT_WATER_GOAL,
            alcohol_limit: DEFAULT_ALCOHOL_LIMIT,
            steps_goal: DEFAULT_STEPS_GOAL,
            sleep_goal: DEFAULT_SLEEP_GOAL,
            start_weight: DEFAULT_START_WEIGHT,
            goal_weight: DEFAULT_GOAL_WEIGHT,
        }
    }

    /// Check the configuration invariants before a session is built.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.water_goal < 1 {
            return Err(ConfigError::WaterGoal);
        }
        if !(0..=ALCOHOL_HARD_CAP).contains(&self.alcohol_limit) {
            return Err(ConfigError::AlcoholLimit);
        }
        if self.steps_goal < 1 {
            return Err(ConfigError::StepsGoal);
        }
        if !(self.sleep_goal > 0.0 && self.sleep_goal <= SLEEP_HARD_CAP) {
            return Err(ConfigError::SleepGoal);
        }
        if !(self.goal_weight > 0.0 && self.start_weight > self.goal_weight) {
            return Err(ConfigError::WeightTargets);
        }
        Ok(())
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

/// The five daily quest metrics, all scoped to the current unfinished day.
/// Every field is clamped to its domain on write; see `quests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DailyMetrics {
    #[serde(default)]
    pub water: i32,
    #[serde(default)]
    pub alcohol: i32,
    #[serde(default)]
    pub steps: i32,
    #[serde(default)]
    pub sleep: f32,
    #[serde(default)]
    pub meals: u8,
    #[serde(default)]
    pub mood: Option<Mood>,
}

impl DailyMetrics {
    /// Return every metric to its unset default for a fresh day.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One archived day. Written exactly once by the day-end transition and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub day: u32,
    pub steps: i32,
    pub sleep: f32,
    pub mood: Option<Mood>,
    pub meals: u8,
    pub weight: f32,
}

/// Complete mutable session state. One live instance, driven sequentially by
/// a single UI actor; no field survives the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub day: u32,
    pub days_survived: u32,
    pub health: i32,
    pub goals: GoalConfig,
    pub metrics: DailyMetrics,
    pub history: Vec<HistoryEntry>,
    pub weight: WeightState,
    pub story: StoryProgress,
    #[serde(default)]
    pub logs: Vec<String>,
}

impl GameState {
    /// Build a fresh day-one state from validated goals, seeding the weight
    /// log with the configured starting weight.
    #[must_use]
    pub fn new(goals: GoalConfig) -> Self {
        let weight = WeightState::seeded(1, goals.start_weight, goals.goal_weight);
        Self {
            day: 1,
            days_survived: 0,
            health: HEALTH_MAX,
            goals,
            metrics: DailyMetrics::default(),
            history: Vec::new(),
            weight,
            story: StoryProgress::default(),
            logs: Vec::new(),
        }
    }

    pub fn push_log(&mut self, key: &str) {
        self.logs.push(key.to_string());
    }

    /// Snapshot the current day for the archive, including the weight at
    /// this moment. Mood is captured before the day-end reset clears it.
    #[must_use]
    pub fn snapshot_day(&self) -> HistoryEntry {
        HistoryEntry {
            day: self.day,
            steps: self.metrics.steps,
            sleep: self.metrics.sleep,
            mood: self.metrics.mood,
            meals: self.metrics.meals,
            weight: self.weight.current,
        }
    }

    /// Most recent archived day, if any day has ended yet.
    #[must_use]
    pub fn yesterday(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GoalConfig::default_config())
    }
}
