//! End-to-end walkthroughs: tap to place, speak to move.

use glam::{Vec2, Vec3};
use tracing_subscriber::EnvFilter;

use voicebot_control::{ControlConfig, MovementState, Session};
use voicebot_scene::{AnimationClip, MemoryScene, ScriptedHitTester, Stage};
use voicebot_speech::{QueuedSpeechSource, TranscriptionUpdate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn placed_session(
    source: QueuedSpeechSource,
) -> Session<MemoryScene, ScriptedHitTester, QueuedSpeechSource> {
    init_tracing();

    let mut scene = MemoryScene::new();
    let robot = scene.spawn(vec![AnimationClip::new("walk")]);
    let mut session = Session::new(
        scene,
        robot,
        ScriptedHitTester::hitting(Vec3::new(1.0, 0.0, 2.0)),
        source,
        ControlConfig::default(),
    );

    let placed = session.handle_tap(Vec2::new(512.0, 384.0));
    assert_eq!(placed, Some(Vec3::new(1.0, 0.0, 2.0)));
    session
}

#[test]
fn tap_then_forward_walks_one_unit() {
    let mut session = placed_session(QueuedSpeechSource::new(Vec::new()));
    let robot = session.entity();

    session.apply_update(&TranscriptionUpdate::from_words(["forward"], false));

    // The move and the walk animation run for the same duration.
    let controller = session.controller().unwrap();
    assert_eq!(controller.state(session.scene()), MovementState::Executing);
    let (clip, remaining, _) = session.scene().active_playback(robot).unwrap();
    assert_eq!(clip.name, "walk");
    assert_eq!(remaining, 5.0);

    session.scene_mut().advance(5.0);
    assert_eq!(
        session.scene().translation(robot),
        Vec3::new(1.0, 0.0, 3.0)
    );
    assert!(session.scene().active_playback(robot).is_none());
}

#[test]
fn unrecognized_speech_changes_nothing() {
    let mut session = placed_session(QueuedSpeechSource::new(Vec::new()));
    let robot = session.entity();

    session.apply_update(&TranscriptionUpdate::from_words(["hello"], true));

    assert_eq!(
        session.scene().translation(robot),
        Vec3::new(1.0, 0.0, 2.0)
    );
    assert!(session.scene().active_playback(robot).is_none());
    let controller = session.controller().unwrap();
    assert_eq!(controller.state(session.scene()), MovementState::Idle);
}

#[test]
fn a_revised_hypothesis_preempts_the_step_in_flight() {
    let mut session = placed_session(QueuedSpeechSource::new(Vec::new()));
    let robot = session.entity();

    session.apply_update(&TranscriptionUpdate::from_words(["forward"], false));
    session.apply_update(&TranscriptionUpdate::from_words(["back"], false));
    session.scene_mut().advance(5.0);

    // Last command wins over the whole step, not an intermediate blend.
    assert_eq!(
        session.scene().translation(robot),
        Vec3::new(1.0, 0.0, 1.0)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn scripted_stream_drives_the_session_to_completion() {
    let mut session = placed_session(QueuedSpeechSource::speaking(["left", "forward"]));
    let robot = session.entity();

    session.start_listening();
    session.run().await;
    session.scene_mut().advance(5.0);

    // The turn and the step land on independent transform fields.
    assert_eq!(
        session.scene().translation(robot),
        Vec3::new(1.0, 0.0, 3.0)
    );
    let expected = glam::Quat::from_rotation_y(90.0_f32.to_radians());
    assert!(session.scene().orientation(robot).abs_diff_eq(expected, 1e-6));

    session.teardown();
}

#[test]
fn config_serde_round() {
    let json = r#"{
        "movement_duration_secs": 2.0,
        "step_distance": 0.5,
        "turn_degrees": 45.0,
        "walk_fade_in_secs": 0.25
    }"#;

    let config: ControlConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.movement_duration_secs, 2.0);
    assert_eq!(config.step_distance, 0.5);
    assert_eq!(config.turn_degrees, 45.0);
    assert_eq!(config.walk_fade_in_secs, 0.25);
}
