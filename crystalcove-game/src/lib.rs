//! Crystal Cove Game Engine
//!
//! Platform-agnostic core game logic for the Crystal Cove habit-tracking
//! cave game. This crate provides scoring, day transitions, narrative
//! progression, and weight tracking without UI or platform-specific
//! dependencies; a rendering layer drives it through [`GameSession`] and
//! repaints from the returned [`GameView`].

pub mod constants;
pub mod day;
pub mod numbers;
pub mod nutrition;
pub mod quests;
pub mod score;
pub mod session;
pub mod state;
pub mod story;
pub mod view;
pub mod weight;

// Re-export commonly used types
pub use day::{DayOutcome, end_day};
pub use nutrition::{ActivityLevel, MealPlan, MoodTone, SleepQuality, suggest_meals};
pub use quests::{adjust_quest, set_alcohol_limit, set_meals, set_mood, set_sleep, set_steps};
pub use score::{ProgressSummary, compute_summary, projected_health, summarize};
pub use session::{GameSession, Intent};
pub use state::{
    ConfigError, DailyMetrics, GameState, GoalConfig, GuideChoice, HistoryEntry, Mood, QuestKind,
};
pub use story::{Chapter, ChapterView, StoryData, StoryProgress, guidance_message, story_data};
pub use view::{GameView, QuestView, render};
pub use weight::{WeightEntry, WeightProgress, WeightState, log_weigh_in};

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load chapter data from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the story data cannot be loaded.
    fn load_story_data(&self) -> Result<StoryData, Self::Error>;

    /// Load configuration data for a specific system
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Main game engine for constructing sessions from loaded data
pub struct GameEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> GameEngine<L>
where
    L: DataLoader,
{
    /// Create a new game engine with the provided data loader
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Construct a fresh session from loaded goals and story data.
    ///
    /// # Errors
    ///
    /// Returns an error if the story or goal configuration cannot be loaded,
    /// or if the goal configuration fails validation.
    pub fn create_session(&self) -> Result<GameSession, anyhow::Error> {
        let story = self
            .data_loader
            .load_story_data()
            .map_err(anyhow::Error::new)?;
        let goals: GoalConfig = self
            .data_loader
            .load_config("goals")
            .map_err(anyhow::Error::new)?;
        goals.validate()?;
        Ok(GameSession::new(goals, story))
    }
}
