use crystalcove_game::{
    GameSession, GameState, GoalConfig, Intent, Mood, QuestKind, StoryData, story_data,
};

#[test]
fn builtin_story_asset_parses_into_three_chapters() {
    let data = story_data();
    assert_eq!(data.chapters.len(), 3);
    for (index, chapter) in data.chapters.iter().enumerate() {
        assert_eq!(chapter.label, format!("CHAPTER {}", index + 1));
        assert!(!chapter.title.is_empty());
        assert!(!chapter.paragraphs.is_empty());
    }
}

#[test]
fn story_data_tolerates_missing_paragraphs() {
    let data = StoryData::from_json(r#"{"chapters": [{"label": "CHAPTER 1", "title": "T"}]}"#)
        .expect("minimal chapter shape");
    assert!(data.chapters[0].paragraphs.is_empty());
}

#[test]
fn goal_config_fills_defaults_field_by_field() {
    let cfg: GoalConfig =
        serde_json::from_str(r#"{"steps_goal": 8000, "sleep_goal": 8.0}"#).unwrap();
    assert_eq!(cfg.steps_goal, 8_000);
    assert!((cfg.sleep_goal - 8.0).abs() <= f32::EPSILON);
    assert_eq!(cfg.water_goal, 8);
    assert_eq!(cfg.alcohol_limit, 6);
    assert!((cfg.start_weight - 150.0).abs() <= f32::EPSILON);
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn game_state_serde_round_trips_mid_session() {
    let mut session = GameSession::default();
    session.apply(Intent::AdjustQuest {
        kind: QuestKind::Water,
        delta: 5,
    });
    session.apply(Intent::SetMood { mood: Mood::Low });
    session.apply(Intent::LogWeight {
        raw: "148.4".to_string(),
    });
    session.apply(Intent::EndDay);
    session.apply(Intent::AdjustQuest {
        kind: QuestKind::Alcohol,
        delta: 2,
    });

    let state = session.state();
    let json = serde_json::to_string(state).expect("state serializes");
    let restored: GameState = serde_json::from_str(&json).expect("state deserializes");
    assert_eq!(&restored, state);
    assert_eq!(restored.day, 2);
    assert_eq!(restored.history.len(), 1);
    assert_eq!(restored.metrics.alcohol, 2);
}
