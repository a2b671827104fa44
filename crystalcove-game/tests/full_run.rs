use crystalcove_game::{GameSession, GuideChoice, Intent, Mood, QuestKind};

fn perfect_day_intents() -> Vec<Intent> {
    vec![
        Intent::AdjustQuest {
            kind: QuestKind::Water,
            delta: 8,
        },
        Intent::SetSteps {
            raw: "10000".to_string(),
        },
        Intent::SetSleep {
            raw: "7".to_string(),
        },
        Intent::SetMeals {
            breakfast: true,
            lunch: true,
            dinner: true,
        },
        Intent::SetMood { mood: Mood::Upbeat },
    ]
}

#[test]
fn spec_examples_score_as_documented() {
    let mut session = GameSession::default();
    for intent in perfect_day_intents() {
        session.apply(intent);
    }
    session.apply(Intent::AdjustQuest {
        kind: QuestKind::Alcohol,
        delta: 3,
    });

    let view = session.view();
    assert_eq!(view.summary.critical_complete, 2);
    assert_eq!(view.summary.important_complete, 2);
    assert_eq!(view.summary.bonus_complete, 2);
    assert_eq!(view.summary.completion_score, 140);
    assert_eq!(view.summary.health_delta, 5);

    // An untouched day still gets the alcohol check for free.
    let fresh = GameSession::default().view();
    assert_eq!(fresh.summary.critical_complete, 1);
    assert_eq!(fresh.summary.completion_score, 40);
    assert_eq!(fresh.summary.health_delta, 0);
}

#[test]
fn week_of_neglect_drains_health_into_danger() {
    let mut session = GameSession::default();
    for _ in 0..7 {
        session.apply(Intent::AdjustQuest {
            kind: QuestKind::Alcohol,
            delta: 10,
        });
        session.apply(Intent::EndDay);
    }
    let view = session.view();
    assert_eq!(view.health, 30);
    assert!(view.danger);
    assert_eq!(view.day, 8);
    assert_eq!(view.days_survived, 7);
    assert_eq!(session.state().history.len(), 7);
}

#[test]
fn mixed_campaign_keeps_every_counter_consistent() {
    let mut session = GameSession::default();
    session.apply(Intent::ChooseGuide {
        choice: GuideChoice::Astra,
    });

    // Three good days, two lazy days, one bad day.
    for _ in 0..3 {
        for intent in perfect_day_intents() {
            session.apply(intent);
        }
        session.apply(Intent::EndDay);
    }
    for _ in 0..2 {
        session.apply(Intent::SetSteps {
            raw: "4000".to_string(),
        });
        session.apply(Intent::EndDay);
    }
    session.apply(Intent::AdjustQuest {
        kind: QuestKind::Alcohol,
        delta: 12,
    });
    let view = session.apply(Intent::EndDay);

    // +5 capped at 100 three times, 0 twice, -10 once.
    assert_eq!(view.health, 90);
    assert_eq!(view.day, 7);
    assert_eq!(view.days_survived, 6);

    let state = session.state();
    assert_eq!(state.history.len(), 6);
    let days: Vec<u32> = state.history.iter().map(|entry| entry.day).collect();
    assert_eq!(days, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(state.history[0].mood, Some(Mood::Upbeat));
    assert!(state.history[3].mood.is_none());

    // Guide choice survives day ends; chapter saturates at the finale.
    assert_eq!(state.story.guide, Some(GuideChoice::Astra));
    assert_eq!(state.story.chapter_index, 2);
    let chapter = view.chapter.unwrap();
    assert_eq!(chapter.label, "CHAPTER 3");
    assert!(chapter.guidance.starts_with("Astra"));
}

#[test]
fn weigh_ins_thread_through_history_and_panel() {
    let mut session = GameSession::default();
    session.apply(Intent::LogWeight {
        raw: "148.0".to_string(),
    });
    session.apply(Intent::EndDay);
    session.apply(Intent::EndDay);
    session.apply(Intent::LogWeight {
        raw: "147.0".to_string(),
    });
    let view = session.apply(Intent::EndDay);

    let state = session.state();
    // History snapshots the weight current at each day end.
    assert!((state.history[0].weight - 148.0).abs() <= f32::EPSILON);
    assert!((state.history[1].weight - 148.0).abs() <= f32::EPSILON);
    assert!((state.history[2].weight - 147.0).abs() <= f32::EPSILON);

    // Seed entry plus two explicit weigh-ins; day ends add nothing.
    assert_eq!(state.weight.entries.len(), 3);
    assert_eq!(view.recent_weigh_ins[0].day, 3);
    assert!((view.weight.lost_so_far - 3.0).abs() <= f32::EPSILON);
    assert_eq!(view.weight.projected_weeks, 12);
}

#[test]
fn projection_preview_matches_later_commit() {
    let mut session = GameSession::default();
    for intent in perfect_day_intents() {
        session.apply(intent);
    }
    let preview = session.view().projected_health;
    let outcome = session.end_day();
    assert_eq!(outcome.new_health, preview);
}
