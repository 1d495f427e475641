//! Spinning torus knot under a spot light, headless.
//!
//! Builds the scene, then steps the animation at a fixed timestep and prints
//! the centerpiece rotation so the motion is visible without a renderer.

use anyhow::Result;
use glam::Vec3;

use vitrine::compose::{
    CenterpieceConfig, CenterpieceGeometry, CenterpieceMaterial, LightConfig, Motion,
    ShowcaseConfig, build_showcase,
};
use vitrine::{AudioTrack, FrameTiming, GestureEvent, TorusKnotOptions};

fn main() -> Result<()> {
    env_logger::init();

    let config = ShowcaseConfig {
        centerpiece: Some(
            CenterpieceConfig::new(
                CenterpieceGeometry::TorusKnot(TorusKnotOptions::default()),
                CenterpieceMaterial::ColorShift {
                    color: Vec3::new(0.05, 0.2, 0.1),
                },
            )
            .with_motion(Motion::Spin {
                rate: Vec3::new(0.5, 0.7, 0.0),
            }),
        ),
        lights: vec![
            LightConfig::Spot {
                color: Vec3::ONE,
                intensity: 2.0,
                position: Vec3::new(10.0, 10.0, 10.0),
                range: 0.0,
                angle: 0.3,
                penumbra: 1.0,
                shadows: Some(vitrine::scene::ShadowConfig {
                    map_size: 512,
                    ..Default::default()
                }),
            },
            LightConfig::Point {
                color: Vec3::ONE,
                intensity: 0.5,
                position: Vec3::new(-10.0, -10.0, -10.0),
                range: 0.0,
            },
        ],
        audio: Some(AudioTrack::new("sounds/constellation.mp3")),
        ..ShowcaseConfig::default()
    };

    let mut showcase = build_showcase(config)?;
    let centerpiece = showcase
        .centerpiece
        .ok_or_else(|| anyhow::anyhow!("centerpiece missing"))?;

    // First click unlocks the audio track.
    if showcase.notify_gesture(GestureEvent::PointerClick) {
        if let Some(track) = &showcase.audio {
            println!("audio unlocked: {}", track.url);
        }
    }

    let dt = 1.0 / 60.0;
    for frame in 0..600u32 {
        let elapsed = frame as f32 * dt;
        showcase.advance(FrameTiming::new(elapsed, dt));

        if frame % 120 == 0 {
            if let Some(node) = showcase.scene.get_node(centerpiece) {
                let r = node.transform.rotation;
                println!("t={elapsed:5.2}s rotation=({:.3}, {:.3}, {:.3})", r.x, r.y, r.z);
            }
        }
    }

    Ok(())
}
