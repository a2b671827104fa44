//! Meal suggestion engine.
//!
//! Derives a nutrition focus and meal ideas from today's metrics plus the
//! most recent archived day. Pure derivation; nothing here writes state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{
    ACTIVITY_HIGH_STEPS, ACTIVITY_MODERATE_STEPS, SLEEP_OK_HOURS, SLEEP_RESTED_HOURS,
};
use crate::state::{GameState, Mood};

const FOCUS_LOW_SLEEP: &str = "extra protein + complex carbs early to offset low sleep";
const FOCUS_STEPS: &str = "steady energy carbs paired with lean protein to support steps";
const FOCUS_MOOD: &str = "comforting warm meals with omega-3 fats for mood support";
const FOCUS_BALANCED: &str = "balanced plates with fiber, protein, and color";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Light,
    Moderate,
    High,
}

impl ActivityLevel {
    #[must_use]
    pub const fn from_steps(steps: i32) -> Self {
        if steps >= ACTIVITY_HIGH_STEPS {
            Self::High
        } else if steps >= ACTIVITY_MODERATE_STEPS {
            Self::Moderate
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Tired,
    Ok,
    Rested,
}

impl SleepQuality {
    #[must_use]
    pub fn from_hours(hours: f32) -> Self {
        if hours >= SLEEP_RESTED_HOURS {
            Self::Rested
        } else if hours >= SLEEP_OK_HOURS {
            Self::Ok
        } else {
            Self::Tired
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tired => "tired",
            Self::Ok => "ok",
            Self::Rested => "rested",
        }
    }
}

/// Coarse read of today's mood for meal framing. `Open` when no mood has
/// been logged yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTone {
    Open,
    Energized,
    Positive,
    Steady,
    Fragile,
}

impl MoodTone {
    #[must_use]
    pub const fn from_mood(mood: Option<Mood>) -> Self {
        match mood {
            None => Self::Open,
            Some(Mood::Energized) => Self::Energized,
            Some(Mood::Upbeat) => Self::Positive,
            Some(Mood::Neutral) => Self::Steady,
            Some(Mood::Rough | Mood::Low) => Self::Fragile,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Energized => "energized",
            Self::Positive => "positive",
            Self::Steady => "steady",
            Self::Fragile => "fragile",
        }
    }
}

/// Suggested meals and focus lines for the nutrition panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlan {
    pub activity: ActivityLevel,
    pub sleep: SleepQuality,
    pub mood: MoodTone,
    pub focus: SmallVec<[&'static str; 4]>,
    pub breakfast: Vec<&'static str>,
    pub lunch: Vec<&'static str>,
    pub dinner: Vec<&'static str>,
    pub snacks: Vec<&'static str>,
    pub prompt: String,
}

/// Build today's meal plan from current metrics and yesterday's archive.
#[must_use]
pub fn suggest_meals(state: &GameState) -> MealPlan {
    let activity = ActivityLevel::from_steps(state.metrics.steps);
    let sleep = SleepQuality::from_hours(state.metrics.sleep);
    let mood = MoodTone::from_mood(state.metrics.mood);
    let yesterday = state.yesterday();

    let mut focus: SmallVec<[&'static str; 4]> = SmallVec::new();
    let slept_badly_yesterday = yesterday.is_some_and(|entry| entry.sleep < SLEEP_OK_HOURS);
    if sleep == SleepQuality::Tired || slept_badly_yesterday {
        focus.push(FOCUS_LOW_SLEEP);
    }
    let missed_steps_yesterday = yesterday.is_some_and(|entry| entry.steps < state.goals.steps_goal);
    if activity == ActivityLevel::High || missed_steps_yesterday {
        focus.push(FOCUS_STEPS);
    }
    if state
        .metrics
        .mood
        .is_some_and(|logged| logged.level() <= 2)
    {
        focus.push(FOCUS_MOOD);
    }
    if focus.is_empty() {
        focus.push(FOCUS_BALANCED);
    }

    let mut breakfast = vec![
        "Greek yogurt parfait with berries, chia, and granola",
        "Veggie omelet with avocado toast (1 slice) and salsa",
        "Protein smoothie with spinach, banana, peanut butter, and oats",
    ];
    let mut lunch = vec![
        "Grilled chicken or tofu bowl with quinoa, greens, and roasted veggies",
        "Turkey, hummus, and veggie wrap with a side of carrots",
        "Lentil soup with mixed green salad and olive oil vinaigrette",
    ];
    let mut dinner = vec![
        "Salmon or tempeh with roasted potatoes, asparagus, and lemon",
        "Stir-fry with shrimp or edamame, brown rice, and colorful veg",
        "Taco salad with black beans, salsa, avocado, and crunchy slaw",
    ];
    let mut snacks = vec![
        "Apple slices with almond butter",
        "String cheese and grapes",
        "Roasted chickpeas or trail mix portion",
    ];

    if sleep == SleepQuality::Tired {
        breakfast.push("Steel-cut oats with walnuts, cinnamon, and protein powder");
    }
    if activity == ActivityLevel::High {
        lunch.push("Soba noodle bowl with edamame, veggies, and sesame dressing");
        snacks.push("Greek yogurt with honey and pumpkin seeds");
    }
    if mood == MoodTone::Fragile {
        dinner.push("Roast chicken with sweet potato mash and steamed greens");
        snacks.push("Dark chocolate square with almonds");
    }

    let yesterday_note = yesterday.map_or_else(
        || "No prior-day data yet.".to_string(),
        |entry| format!("Yesterday: {} steps, {}h sleep.", entry.steps, entry.sleep),
    );
    let prompt = format!(
        "Based on {} activity, {} sleep, and feeling {}: focus on {}. {}",
        activity.as_str(),
        sleep.as_str(),
        mood.as_str(),
        focus.join(" & "),
        yesterday_note
    );

    MealPlan {
        activity,
        sleep,
        mood,
        focus,
        breakfast,
        lunch,
        dinner,
        snacks,
        prompt,
    }
}
