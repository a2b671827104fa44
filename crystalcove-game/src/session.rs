//! High-level session wrapper binding the story catalog to a mutable game
//! state, driven through an explicit command interface.
//!
//! The UI layer hands over raw input exactly as captured (button deltas,
//! checkbox booleans, untrimmed text field contents) and receives a fresh
//! render snapshot back. Malformed numeric text is dropped before it reaches
//! game state, which is the crate's entire error story for user input.

use crate::day::{self, DayOutcome};
use crate::numbers::{parse_float_input, parse_int_input};
use crate::quests;
use crate::state::{GameState, GoalConfig, GuideChoice, Mood, QuestKind};
use crate::story::StoryData;
use crate::view::{self, GameView};
use crate::weight;

/// One user action, as captured by the UI. Numeric text fields arrive raw.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    AdjustQuest { kind: QuestKind, delta: i32 },
    SetAlcoholLimit { raw: String },
    SetSteps { raw: String },
    SetSleep { raw: String },
    SetMeals { breakfast: bool, lunch: bool, dinner: bool },
    SetMood { mood: Mood },
    LogWeight { raw: String },
    ChooseGuide { choice: GuideChoice },
    EndDay,
}

/// A running game: story catalog plus the single live state record.
#[derive(Debug, Clone)]
pub struct GameSession {
    story: StoryData,
    state: GameState,
}

impl GameSession {
    /// Start a fresh session from validated goals and chapter data.
    #[must_use]
    pub fn new(goals: GoalConfig, story: StoryData) -> Self {
        Self {
            story,
            state: GameState::new(goals),
        }
    }

    /// Resume a session around an existing state.
    #[must_use]
    pub fn from_state(state: GameState, story: StoryData) -> Self {
        Self { story, state }
    }

    /// Apply one user action and return the snapshot to repaint from.
    /// Unparseable numeric input leaves state untouched.
    pub fn apply(&mut self, intent: Intent) -> GameView {
        match intent {
            Intent::AdjustQuest { kind, delta } => {
                quests::adjust_quest(&mut self.state, kind, delta);
            }
            Intent::SetAlcoholLimit { raw } => {
                if let Some(value) = parse_int_input(&raw) {
                    quests::set_alcohol_limit(&mut self.state, value);
                }
            }
            Intent::SetSteps { raw } => {
                if let Some(value) = parse_int_input(&raw) {
                    quests::set_steps(&mut self.state, value);
                }
            }
            Intent::SetSleep { raw } => {
                if let Some(hours) = parse_float_input(&raw) {
                    quests::set_sleep(&mut self.state, hours);
                }
            }
            Intent::SetMeals {
                breakfast,
                lunch,
                dinner,
            } => {
                let completed = u8::from(breakfast) + u8::from(lunch) + u8::from(dinner);
                quests::set_meals(&mut self.state, completed);
            }
            Intent::SetMood { mood } => {
                quests::set_mood(&mut self.state, mood);
            }
            Intent::LogWeight { raw } => {
                weight::log_weigh_in(&mut self.state, &raw);
            }
            Intent::ChooseGuide { choice } => {
                self.state.story.choose_guide(choice);
            }
            Intent::EndDay => {
                let _ = day::end_day(&mut self.state, &self.story);
            }
        }
        self.view()
    }

    /// End the current day, returning the committed outcome directly.
    pub fn end_day(&mut self) -> DayOutcome {
        day::end_day(&mut self.state, &self.story)
    }

    /// Current render snapshot without applying anything.
    #[must_use]
    pub fn view(&self) -> GameView {
        view::render(&self.state, &self.story)
    }

    /// Borrow the underlying immutable game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Borrow the underlying mutable game state.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the session, returning the underlying game state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GoalConfig::default_config(), StoryData::load_from_static())
    }
}
