use pw_core::PathError;
use pw_editor::{parse_script, EditorSession, InputSnapshot, MarkerRole, MarkerScene};
use pw_follow::Easing;
use pw_math::DVec3;

const SQUARE: &str = include_str!("../demos/square.json");

fn replay(script: &[InputSnapshot]) -> (EditorSession, MarkerScene, Vec<pw_editor::TickOutput>) {
    let mut session = EditorSession::default();
    let mut scene = MarkerScene::new();
    let mut outputs = Vec::new();
    for input in script {
        let out = session.tick(input);
        scene.apply_all(&out.commands);
        outputs.push(out);
    }
    (session, scene, outputs)
}

#[test]
fn test_demo_script_parses() {
    let script: Vec<InputSnapshot> = parse_script(SQUARE).unwrap();
    assert_eq!(script.len(), 14);
    assert_eq!(script[1].hover_position, Some(DVec3::new(4.0, 0.0, 0.0)));
    assert!(script[0].place_pressed);
    assert!(!script[0].drag_held);
    assert_eq!(script[7].easing_key, Some(2));
}

#[test]
fn test_demo_script_replays() {
    let script: Vec<InputSnapshot> = parse_script(SQUARE).unwrap();
    let (session, scene, outputs) = replay(&script);

    // Four anchors placed, one undone.
    let curve = session.curve();
    assert_eq!(curve.anchor_count(), 3);
    assert_eq!(scene.count(MarkerRole::Anchor), 3);
    assert_eq!(scene.count(MarkerRole::Handle), 4);
    assert_eq!(scene.count(MarkerRole::Sample), 200);
    assert_eq!(
        curve.control_points().position(3),
        Some(DVec3::new(5.5, 0.0, -1.5))
    );

    assert_eq!(session.follower().easing(), Easing::CubicInOut);
    assert!(outputs[8].pose.is_some());
    // The undo tick releases the move input and hides the follower.
    assert!(outputs[12].pose.is_none());
    assert!(outputs[13].pose.is_some());
}

#[test]
fn test_tick_output_serializes() {
    let script: Vec<InputSnapshot> = parse_script(SQUARE).unwrap();
    let (_, _, outputs) = replay(&script[..2]);
    let json = serde_json::to_string(&outputs[1]).unwrap();
    assert!(json.contains("\"Create\""));
    assert!(json.contains("\"Sample\""));
}

#[test]
fn test_unknown_key_is_rejected() {
    let text = r#"[{ "dt": 0.016, "edit_mod": true }]"#;
    assert!(matches!(parse_script(text), Err(PathError::Json(_))));
}

#[test]
fn test_nested_step_shape_is_rejected() {
    // Wrapping the snapshot under "input" must not parse as an empty tick.
    let text = r#"[
        { "dt": 0.016, "input": { "edit_mode": true, "place_pressed": true, "hover_position": [0.0, 0.0, 0.0] } },
        { "dt": 0.016, "input": { "edit_mode": true, "place_pressed": true, "hover_position": [3.0, 0.0, 0.0] } }
    ]"#;
    assert!(parse_script(text).is_err());
}

#[test]
fn test_missing_keys_default() {
    let script = parse_script(r#"[{}, { "move_held": true, "dt": 0.5 }]"#).unwrap();
    assert_eq!(script[0], InputSnapshot::default());
    assert!(script[1].move_held);
    assert_eq!(script[1].dt, 0.5);
}
