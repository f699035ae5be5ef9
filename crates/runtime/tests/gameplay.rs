use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use game_core::{Catalog, RoundEffect, SessionSummary, Weapon};
use runtime::{
    GameEvent, PacingConfig, PresentationPort, Runtime, RuntimeConfig, RuntimeError,
    RuntimeHandle, SessionId, Topic, TriggerId, View,
};

/// Outcome generator that replays a fixed script of rolls.
struct ScriptedRolls(VecDeque<u32>);

impl ScriptedRolls {
    fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self(rolls.into_iter().collect())
    }
}

impl game_core::Randomizer for ScriptedRolls {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn int_in_range(&mut self, max: u32) -> u32 {
        self.0.pop_front().expect("roll script exhausted").min(max)
    }
}

#[derive(Clone, Default)]
struct Recorder {
    views: Arc<Mutex<Vec<(SessionId, View)>>>,
}

impl Recorder {
    fn views(&self) -> Vec<View> {
        self.views
            .lock()
            .unwrap()
            .iter()
            .map(|(_, view)| view.clone())
            .collect()
    }

    fn targets(&self) -> Vec<SessionId> {
        self.views
            .lock()
            .unwrap()
            .iter()
            .map(|(target, _)| target.clone())
            .collect()
    }
}

impl PresentationPort for Recorder {
    fn present(&self, target: &SessionId, view: &View) {
        self.views
            .lock()
            .unwrap()
            .push((target.clone(), view.clone()));
    }
}

/// Port that paints every view twice.
struct Twice(Recorder);

impl PresentationPort for Twice {
    fn present(&self, target: &SessionId, view: &View) {
        self.0.present(target, view);
        self.0.present(target, view);
    }
}

fn config(session: &str) -> RuntimeConfig {
    RuntimeConfig {
        session_id: SessionId::new(session),
        seed: Some(7),
        pacing: PacingConfig::instant(),
        ..RuntimeConfig::default()
    }
}

async fn until_armed(handle: &RuntimeHandle, id: &str) {
    let mut armed = handle.watch_armed();
    let _ = armed
        .wait_for(|ids| ids.iter().any(|armed| armed == id))
        .await
        .expect("runtime dropped");
}

async fn enter_name(handle: &RuntimeHandle, name: &str) {
    until_armed(handle, "ok").await;
    handle.set_field("name", name);
    handle.click("ok").await.unwrap();
    // Welcome screen.
    handle.click("ok").await.unwrap();
}

/// Sword vs Wolf: enemy rolls 4, attack rolls 6 and wins. Then three failed
/// dodges against the Troll end the run.
const SCENARIO_ROLLS: [u32; 8] = [4, 6, 6, 1, 6, 1, 6, 1];

async fn play_scenario(port: impl PresentationPort + 'static) -> (SessionSummary, Vec<GameEvent>) {
    let mut runtime = Runtime::builder()
        .config(config("scenario"))
        .rng(ScriptedRolls::new(SCENARIO_ROLLS))
        .presentation(port)
        .build()
        .unwrap();
    let handle = runtime.handle();
    let mut combat = handle.subscribe(Topic::Combat);
    let session = tokio::spawn(async move { runtime.run_session().await });

    enter_name(&handle, "Ada").await;
    handle.click("weapon-0").await.unwrap();
    handle.click("ok").await.unwrap();

    handle.click("attack").await.unwrap();
    for _ in 0..3 {
        handle.click("dodge").await.unwrap();
    }
    handle.click("retry").await.unwrap();

    let summary = session.await.unwrap().unwrap();

    let mut events = Vec::new();
    while let Ok(event) = combat.try_recv() {
        events.push(event);
    }
    (summary, events)
}

fn effects(events: &[GameEvent]) -> Vec<RoundEffect> {
    events
        .iter()
        .filter_map(|event| match event {
            GameEvent::ActionResolved { effect, .. } => Some(*effect),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn winning_attack_then_three_failed_dodges() {
    let recorder = Recorder::default();
    let (summary, events) = play_scenario(recorder.clone()).await;

    assert_eq!(
        summary,
        SessionSummary {
            player_name: "Ada".into(),
            weapon: Weapon::new("Sword", 6, 12),
            score: 1,
            enemies_defeated: 1,
        }
    );
    assert_eq!(
        effects(&events),
        vec![
            RoundEffect::EnemyDefeated { score_gained: 1 },
            RoundEffect::Wounded { hit_points: 2 },
            RoundEffect::Wounded { hit_points: 1 },
            RoundEffect::Wounded { hit_points: 0 },
        ]
    );

    let views = recorder.views();
    assert_eq!(views[0], View::NamePrompt);
    assert_eq!(
        views[1],
        View::Welcome {
            player_name: "Ada".into()
        }
    );
    assert_eq!(
        views.last(),
        Some(&View::GameOver {
            player_name: "Ada".into(),
            score: 1
        })
    );
    assert!(
        recorder
            .targets()
            .iter()
            .all(|target| target.as_str() == "scenario")
    );
}

#[tokio::test]
async fn hit_points_only_fall_and_roll_preview_ends_on_the_real_roll() {
    let recorder = Recorder::default();
    play_scenario(recorder.clone()).await;
    let views = recorder.views();

    let hit_points: Vec<u32> = views
        .iter()
        .filter_map(|view| match view {
            View::Encounter { hit_points, .. } => Some(*hit_points),
            _ => None,
        })
        .collect();
    assert_eq!(hit_points, vec![3, 3, 2, 1]);

    // Each action shows the cosmetic frames plus the resolved roll, and the
    // result view follows the final frame directly.
    let rolls = views
        .iter()
        .filter(|view| matches!(view, View::Roll { .. }))
        .count();
    assert_eq!(rolls, 4 * (PacingConfig::instant().preview_steps + 1));

    let attack_result = views
        .iter()
        .position(|view| matches!(view, View::AttackResult { success: true, .. }))
        .unwrap();
    assert_eq!(
        views[attack_result - 1],
        View::Roll {
            enemy_roll: 4,
            player_roll: 6
        }
    );
}

#[tokio::test]
async fn presenting_twice_changes_nothing() {
    let once = play_scenario(Recorder::default()).await;

    let recorder = Recorder::default();
    let twice = play_scenario(Twice(recorder.clone())).await;

    assert_eq!(once, twice);
    assert_eq!(recorder.views()[0], recorder.views()[1]);
}

#[tokio::test]
async fn weapon_controls_select_their_catalog_position() {
    let catalog = Catalog::default();

    for (index, expected) in catalog.weapons().iter().enumerate() {
        let task = Runtime::builder()
            .config(config("weapons"))
            .presentation(Recorder::default())
            .build()
            .unwrap()
            .spawn();
        let handle = task.handle();
        let mut session = handle.subscribe(Topic::Session);

        enter_name(&handle, "Ada").await;
        handle.click(&format!("weapon-{index}")).await.unwrap();
        handle.click("ok").await.unwrap();

        match session.recv().await.unwrap() {
            GameEvent::SessionStarted { weapon, .. } => assert_eq!(&weapon, expected),
            other => panic!("unexpected event {other:?}"),
        }
        task.shutdown().await.unwrap();
    }
}

#[tokio::test]
async fn controls_outside_the_current_phase_are_ignored() {
    let task = Runtime::builder()
        .config(config("ignored"))
        .presentation(Recorder::default())
        .build()
        .unwrap()
        .spawn();
    let handle = task.handle();

    until_armed(&handle, "ok").await;
    assert!(!handle.fire("attack"));
    assert!(!handle.fire("weapon-0"));
    assert_eq!(handle.armed(), vec![TriggerId::from("ok")]);

    task.shutdown().await.unwrap();
    assert!(handle.is_shut_down());
}

#[tokio::test]
async fn building_without_presentation_fails() {
    let result = Runtime::builder().config(config("headless")).build();
    assert!(matches!(result, Err(RuntimeError::MissingPresentation)));
}

#[tokio::test]
async fn retry_starts_a_fresh_session() {
    let recorder = Recorder::default();
    // Session one: three failed dodges against the Wolf. Session two: one
    // enemy roll before the first encounter.
    let task = Runtime::builder()
        .config(config("retry"))
        .rng(ScriptedRolls::new([4, 1, 4, 1, 4, 1, 3]))
        .presentation(recorder.clone())
        .build()
        .unwrap()
        .spawn();
    let handle = task.handle();
    let mut sessions = handle.subscribe(Topic::Session);

    enter_name(&handle, "Ada").await;
    handle.click("weapon-0").await.unwrap();
    handle.click("ok").await.unwrap();
    for _ in 0..3 {
        handle.click("dodge").await.unwrap();
    }
    handle.click("retry").await.unwrap();

    // The previous name must not leak into the new prompt.
    handle.click("ok").await.unwrap();
    handle.click("ok").await.unwrap();
    handle.click("weapon-1").await.unwrap();
    handle.click("ok").await.unwrap();
    until_armed(&handle, "attack").await;

    let views = recorder.views();
    let restart = views
        .iter()
        .rposition(|view| *view == View::NamePrompt)
        .unwrap();
    assert!(restart > 0, "a second name prompt follows the retry");
    assert_eq!(
        views[restart + 1],
        View::Welcome {
            player_name: String::new()
        }
    );
    assert_eq!(
        views.last(),
        Some(&View::Encounter {
            enemy: Catalog::default().enemies()[0].clone(),
            enemy_roll: 3,
            hit_points: 3,
            weapon: Weapon::new("Bow", 4, 16),
        })
    );

    let mut started = Vec::new();
    let mut ended = 0;
    while let Ok(event) = sessions.try_recv() {
        match event {
            GameEvent::SessionStarted { player_name, .. } => started.push(player_name),
            GameEvent::SessionEnded { summary, .. } => {
                assert_eq!(summary.score, 0);
                ended += 1;
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(started, vec!["Ada".to_string(), String::new()]);
    assert_eq!(ended, 1);

    task.shutdown().await.unwrap();
}
