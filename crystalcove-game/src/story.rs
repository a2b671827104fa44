//! Narrative progression through the cave's fixed chapters.
//!
//! Chapter content is static reference data; only the chapter index and the
//! guide choice live in session state. The index moves once per day-end and
//! saturates at the final chapter.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::constants::{LOG_STORY_ADVANCE, LOG_STORY_FINALE};
use crate::state::GuideChoice;

const DEFAULT_STORY_DATA: &str = include_str!("../assets/data/story.json");

pub(crate) const GUIDANCE_ASTRA: &str =
    "Astra whispers: Protect your rituals and the cave will yield.";
pub(crate) const GUIDANCE_NOX: &str =
    "Nox remarks: Adapt when the cave shifts. Your instincts matter most.";
pub(crate) const GUIDANCE_NEUTRAL: &str =
    "Both guides nod—balance light and shadow to find your own way.";
pub(crate) const GUIDANCE_PROMPT: &str =
    "Complete your critical quests to receive today's guidance...";

/// One chapter of the cave narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub label: String,
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// Container for all chapter data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoryData {
    pub chapters: Vec<Chapter>,
}

impl StoryData {
    /// Create empty story data (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            chapters: Vec::new(),
        }
    }

    /// Load story data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid chapters.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn from_chapters(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// The built-in three-chapter campaign shipped with the crate.
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_STORY_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.chapters.len().saturating_sub(1)
    }

    /// Build the render view for the given progress and committed health.
    /// Returns `None` only when the data holds no chapters at all.
    #[must_use]
    pub fn view(&self, progress: &StoryProgress, health: i32) -> Option<ChapterView> {
        let chapter = self
            .chapters
            .get(progress.chapter_index.min(self.last_index()))?;
        Some(ChapterView {
            label: chapter.label.clone(),
            title: chapter.title.clone(),
            paragraphs: chapter.paragraphs.clone(),
            health,
            guidance: guidance_message(progress.guide).to_string(),
        })
    }
}

/// Shared static story catalog.
pub fn story_data() -> &'static StoryData {
    static STORY: OnceLock<StoryData> = OnceLock::new();
    STORY.get_or_init(StoryData::load_from_static)
}

/// Mutable narrative position within the fixed chapter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoryProgress {
    #[serde(default)]
    pub chapter_index: usize,
    #[serde(default)]
    pub guide: Option<GuideChoice>,
}

impl StoryProgress {
    /// Move to the next chapter, saturating at the final one. Monotonic:
    /// there is no wraparound and no error once the end is reached.
    pub fn advance(&mut self, last_index: usize) -> bool {
        if self.chapter_index < last_index {
            self.chapter_index += 1;
            true
        } else {
            self.chapter_index = last_index;
            false
        }
    }

    pub fn choose_guide(&mut self, choice: GuideChoice) {
        self.guide = Some(choice);
    }
}

/// Advance the narrative at day-end, returning the log key describing what
/// happened.
pub(crate) fn advance_story(progress: &mut StoryProgress, data: &StoryData) -> &'static str {
    if progress.advance(data.last_index()) {
        LOG_STORY_ADVANCE
    } else {
        LOG_STORY_FINALE
    }
}

/// Fixed mapping from guide choice to the surfaced message.
#[must_use]
pub fn guidance_message(guide: Option<GuideChoice>) -> &'static str {
    match guide {
        Some(GuideChoice::Astra) => GUIDANCE_ASTRA,
        Some(GuideChoice::Nox) => GUIDANCE_NOX,
        Some(GuideChoice::Neutral) => GUIDANCE_NEUTRAL,
        None => GUIDANCE_PROMPT,
    }
}

/// Render view for the story panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterView {
    pub label: String,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub health: i32,
    pub guidance: String,
}
