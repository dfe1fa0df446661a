extern crate ar_placement;
#[macro_use]
extern crate log;

use ar_placement::api::{MockArInit, MockArPlatformCreator};
use ar_placement::mock::MockArControlMsg;
use ar_placement::{ArPose, ArScene, ArSceneConfig};

// Headless walk through one session: enter, sweep the reticle across the
// floor, tap to place, keep rendering, exit.
fn main() {
    env_logger::init();

    let (platform, remote) = MockArPlatformCreator::new_platform_with_remote(MockArInit::default());
    let mut scene = match ArScene::new(platform, ArSceneConfig::default()) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Could not build scene: {}", e);
            return;
        },
    };

    scene.tick();
    if !scene.lifecycle().enter_offered() {
        println!("{}", scene.lifecycle().last_error().map(|e| e.to_string())
                                        .unwrap_or_else(|| "AR not available".into()));
        return;
    }

    if let Err(e) = scene.request_enter() {
        error!("Enter AR failed: {}", e);
        return;
    }
    scene.tick();

    for step in 0..30 {
        let msg = if step % 4 == 3 {
            MockArControlMsg::Miss
        } else {
            MockArControlMsg::Hit(ArPose::from_position([step as f32 * 0.05, 0.0, -1.0]))
        };
        let _ = remote.send(msg);
        if step == 20 {
            let _ = remote.send(MockArControlMsg::Select);
        }
        scene.tick();

        if let Some(matrix) = scene.model_matrix() {
            info!("frame {}: model at {:?}", scene.frames(), &matrix[12..15]);
        } else if let Some(pose) = scene.tracking_pose() {
            info!("frame {}: reticle at {:?}", scene.frames(), pose.position);
        }
    }

    scene.model_mut().set_scale(1.5);
    if let Err(e) = scene.model_mut().set_color_hex("#3366ff") {
        warn!("{}", e);
    }
    println!("placed {:?} color {} scale {}", scene.placement().map(|p| p.position),
             scene.model().color_hex(), scene.model().scale());

    if let Err(e) = scene.request_exit() {
        error!("Exit AR failed: {}", e);
    }
    scene.tick();
    println!("session {:?}", scene.state());
}
