extern crate ar_placement;

use ar_placement::api::{MockArInit, MockArPlatformCreator};
use ar_placement::mock::MockArControlMsg;
use ar_placement::{ArError, ArPose, ArScene, ArSceneConfig, ArSessionState, CapabilityError, SessionStartError};
use std::sync::mpsc::Sender;

fn scene(init: MockArInit) -> (ArScene, Sender<MockArControlMsg>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let (platform, remote) = MockArPlatformCreator::new_platform_with_remote(init);
    let mut scene = ArScene::new(platform, ArSceneConfig::default()).unwrap();
    scene.tick();
    (scene, remote)
}

fn active_scene() -> (ArScene, Sender<MockArControlMsg>) {
    let (mut scene, remote) = scene(MockArInit::default());
    scene.request_enter().unwrap();
    scene.tick();
    assert_eq!(scene.state(), ArSessionState::Active);
    (scene, remote)
}

fn at(x: f32) -> ArPose {
    ArPose::from_position([x, 0.0, 0.0])
}

#[test]
fn hits_without_select_only_move_the_indicator() {
    let (mut scene, remote) = active_scene();
    for x in 0..3 {
        remote.send(MockArControlMsg::Hit(at(x as f32))).unwrap();
        scene.tick();
    }
    assert_eq!(scene.tracking_pose().unwrap().position, [2.0, 0.0, 0.0]);
    assert_eq!(scene.placement(), None);
    assert_eq!(scene.model_matrix(), None);
    assert!(scene.reticle_matrix().is_some());
    assert_eq!(scene.frames(), 3);
}

#[test]
fn select_before_any_hit_places_nothing() {
    let (mut scene, remote) = active_scene();
    remote.send(MockArControlMsg::Miss).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    scene.tick();
    assert_eq!(scene.select(), None);
    assert_eq!(scene.placement(), None);
}

#[test]
fn placement_does_not_follow_later_hits() {
    let (mut scene, remote) = active_scene();
    remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
    scene.tick();
    assert_eq!(scene.select(), Some(at(1.0)));

    remote.send(MockArControlMsg::Hit(at(4.0))).unwrap();
    remote.send(MockArControlMsg::Miss).unwrap();
    scene.tick();
    assert_eq!(scene.placement(), Some(at(1.0)));
    assert_eq!(scene.tracking_pose(), Some(at(4.0)));
}

#[test]
fn second_select_moves_the_placement() {
    let (mut scene, remote) = active_scene();
    remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    scene.tick();
    remote.send(MockArControlMsg::Hit(at(2.0))).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    scene.tick();
    assert_eq!(scene.placement(), Some(at(2.0)));
}

#[test]
fn select_commits_the_hit_from_the_same_frame() {
    let (mut scene, remote) = active_scene();
    remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
    scene.tick();

    remote.send(MockArControlMsg::Hit(at(2.0))).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    scene.tick();
    assert_eq!(scene.placement(), Some(at(2.0)));
}

#[test]
fn select_ignores_hits_reported_after_it() {
    let (mut scene, remote) = active_scene();
    remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    remote.send(MockArControlMsg::Hit(at(2.0))).unwrap();
    remote.send(MockArControlMsg::Hit(at(3.0))).unwrap();
    scene.tick();

    assert_eq!(scene.placement(), Some(at(1.0)));
    assert_eq!(scene.tracking_pose(), Some(at(3.0)));
}

#[test]
fn each_select_in_a_batch_commits_its_own_frame() {
    let (mut scene, remote) = active_scene();
    remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    remote.send(MockArControlMsg::Hit(at(2.0))).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    remote.send(MockArControlMsg::Hit(at(3.0))).unwrap();
    scene.tick();
    assert_eq!(scene.placement(), Some(at(2.0)));
}

#[test]
fn hit_matrices_are_decomposed() {
    let (mut scene, remote) = active_scene();
    let mut matrix = [1.0, 0.0, 0.0, 0.0,
                      0.0, 1.0, 0.0, 0.0,
                      0.0, 0.0, 1.0, 0.0,
                      0.25, -1.5, -2.0, 1.0];
    // Scale baked into the hit transform must not leak into the pose
    for i in 0..11 {
        matrix[i] *= 3.0;
    }
    remote.send(MockArControlMsg::HitMatrix(matrix)).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    scene.tick();

    let placed = scene.placement().unwrap();
    assert_eq!(placed.position, [0.25, -1.5, -2.0]);
    assert_eq!(placed.orientation, [0.0, 0.0, 0.0, 1.0]);
}

fn assert_matrix_close(actual: &[f32; 16], expected: &[f32; 16]) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-5, "{:?} != {:?}", actual, expected);
    }
}

// q and -q describe the same rotation
fn assert_same_rotation(actual: [f32; 4], expected: [f32; 4]) {
    let close = |sign: f32| actual.iter().zip(expected.iter()).all(|(a, e)| (a - sign * e).abs() < 1e-5);
    assert!(close(1.0) || close(-1.0), "{:?} != {:?}", actual, expected);
}

#[test]
fn half_turn_hit_keeps_its_orientation() {
    let (mut scene, remote) = active_scene();
    // Pi about Y, translated to (1, 0, -2)
    let matrix = [-1.0, 0.0, 0.0, 0.0,
                  0.0, 1.0, 0.0, 0.0,
                  0.0, 0.0, -1.0, 0.0,
                  1.0, 0.0, -2.0, 1.0];
    remote.send(MockArControlMsg::HitMatrix(matrix)).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    scene.tick();

    let placed = scene.placement().unwrap();
    assert_eq!(placed.position, [1.0, 0.0, -2.0]);
    assert_same_rotation(placed.orientation, [0.0, 1.0, 0.0, 0.0]);
    assert_matrix_close(&scene.reticle_matrix().unwrap(), &matrix);
    assert_matrix_close(&scene.model_matrix().unwrap(), &matrix);
}

#[test]
fn rotated_hits_flow_through_to_render_matrices() {
    let half = std::f32::consts::FRAC_PI_8;
    let cases = [
        [0.0, half.sin(), 0.0, half.cos()],
        [half.sin(), 0.0, 0.0, half.cos()],
        [0.0, 0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
    ];
    for orientation in cases.iter() {
        let (mut scene, remote) = active_scene();
        let hit = ArPose::new([0.5, -1.0, -3.0], *orientation);
        let matrix = hit.to_matrix();
        remote.send(MockArControlMsg::HitMatrix(matrix)).unwrap();
        remote.send(MockArControlMsg::Select).unwrap();
        scene.tick();

        let placed = scene.placement().unwrap();
        assert_same_rotation(placed.orientation, *orientation);
        assert_same_rotation(scene.tracking_pose().unwrap().orientation, *orientation);
        assert_matrix_close(&scene.reticle_matrix().unwrap(), &matrix);
        assert_matrix_close(&scene.model_matrix().unwrap(), &matrix);
    }
}

#[test]
fn model_spins_only_once_placed() {
    let (mut scene, remote) = active_scene();
    remote.send(MockArControlMsg::Hit(at(0.0))).unwrap();
    remote.send(MockArControlMsg::Miss).unwrap();
    scene.tick();
    assert_eq!(scene.model().rotation_y(), 0.0);

    scene.select().unwrap();
    for _ in 0..10 {
        remote.send(MockArControlMsg::Miss).unwrap();
    }
    scene.tick();
    assert!((scene.model().rotation_y() - 0.1).abs() < 1e-5);
}

#[test]
fn exit_discards_placement() {
    let (mut scene, remote) = active_scene();
    remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    scene.tick();
    assert!(scene.placement().is_some());

    scene.request_exit().unwrap();
    scene.tick();
    assert_eq!(scene.state(), ArSessionState::Inactive);
    assert_eq!(scene.placement(), None);
    assert_eq!(scene.tracking_pose(), None);
    assert_eq!(scene.model().rotation_y(), 0.0);

    // A new session starts from scratch
    scene.request_enter().unwrap();
    scene.tick();
    assert_eq!(scene.select(), None);
}

#[test]
fn platform_end_discards_placement_and_stops_events() {
    let (mut scene, remote) = active_scene();
    remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    remote.send(MockArControlMsg::EndSession).unwrap();
    remote.send(MockArControlMsg::Hit(at(2.0))).unwrap();
    scene.tick();
    assert_eq!(scene.state(), ArSessionState::Inactive);
    assert_eq!(scene.placement(), None);
    assert_eq!(scene.select(), None);
}

#[test]
fn tracking_is_hidden_while_ending() {
    let (mut scene, remote) = scene(MockArInit {
        auto_confirm_end: false,
        ..Default::default()
    });
    scene.request_enter().unwrap();
    scene.tick();
    remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
    scene.tick();
    assert!(scene.tracking_pose().is_some());

    scene.request_exit().unwrap();
    scene.tick();
    assert_eq!(scene.state(), ArSessionState::Ending);
    assert_eq!(scene.tracking_pose(), None);
    assert_eq!(scene.select(), None);

    remote.send(MockArControlMsg::ConfirmEnd).unwrap();
    scene.tick();
    assert_eq!(scene.state(), ArSessionState::Inactive);
}

#[test]
fn unsupported_device_never_offers_enter() {
    let (mut scene, remote) = scene(MockArInit {
        supported: false,
        ..Default::default()
    });
    for _ in 0..5 {
        remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
        scene.tick();
        assert_eq!(scene.state(), ArSessionState::Unsupported);
        assert!(!scene.lifecycle().enter_offered());
    }
    assert_eq!(
        scene.request_enter(),
        Err(ArError::Capability(CapabilityError::NotSupported))
    );
}

#[test]
fn denied_session_never_becomes_active() {
    let (mut scene, remote) = scene(MockArInit {
        auto_grant: false,
        ..Default::default()
    });
    scene.request_enter().unwrap();
    scene.tick();
    assert_eq!(scene.state(), ArSessionState::Requesting);

    remote.send(MockArControlMsg::Hit(at(1.0))).unwrap();
    remote.send(MockArControlMsg::DenySession(SessionStartError::Timeout)).unwrap();
    scene.tick();
    assert_eq!(scene.state(), ArSessionState::Inactive);
    assert_eq!(scene.tracking_pose(), None);
    assert_eq!(
        scene.lifecycle().last_error(),
        Some(&ArError::SessionStart(SessionStartError::Timeout))
    );
}

#[test]
fn model_settings_carry_into_the_matrix() {
    let (mut scene, remote) = active_scene();
    scene.model_mut().set_color_hex("#00ff00").unwrap();
    scene.model_mut().set_scale(0.5);
    remote.send(MockArControlMsg::Hit(ArPose::from_position([0.0, 0.0, -1.0]))).unwrap();
    remote.send(MockArControlMsg::Select).unwrap();
    scene.tick();

    let matrix = scene.model_matrix().unwrap();
    assert_eq!(matrix[0], 0.5);
    assert_eq!(&matrix[12..15], &[0.0, 0.0, -1.0]);
    assert_eq!(scene.model().color_hex(), "#00ff00");
}
