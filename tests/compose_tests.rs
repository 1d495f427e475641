//! Scene Composition Tests
//!
//! Tests for:
//! - build_showcase wiring: camera, lights, centerpiece, backdrop, drivers
//! - Extruded-text centerpiece skip when glyph geometry is pending
//! - Configuration validation errors
//! - AudioGate one-shot unlock semantics
//! - Showcase frame advancement and teardown

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use vitrine::compose::{
    AudioGate, AudioTrack, BackdropConfig, CameraPlacement, CenterpieceConfig,
    CenterpieceGeometry, CenterpieceMaterial, GateState, GestureEvent, Motion, ShowcaseConfig,
    build_showcase,
};
use vitrine::{
    ExtrudedTextOptions, FrameTiming, Geometry, TorusKnotOptions, VitrineError,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn knot_config() -> ShowcaseConfig {
    ShowcaseConfig {
        centerpiece: Some(
            CenterpieceConfig::new(
                CenterpieceGeometry::TorusKnot(TorusKnotOptions {
                    tubular_segments: 16,
                    radial_segments: 8,
                    ..TorusKnotOptions::default()
                }),
                CenterpieceMaterial::ColorShift {
                    color: Vec3::new(0.05, 0.2, 0.1),
                },
            )
            .with_motion(Motion::Spin {
                rate: Vec3::new(0.5, 0.7, 0.0),
            }),
        ),
        backdrop: Some(BackdropConfig::default()),
        ..ShowcaseConfig::default()
    }
}

fn quad_geometry() -> Geometry {
    let positions = vec![
        Vec3::new(-1.0, -0.5, 0.0),
        Vec3::new(1.0, -0.5, 0.0),
        Vec3::new(1.0, 0.5, 0.0),
        Vec3::new(-1.0, 0.5, 0.0),
    ];
    let normals = vec![Vec3::Z; 4];
    let uvs = vec![Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
    Geometry::from_raw(positions, normals, uvs, vec![0, 1, 2, 0, 2, 3]).unwrap()
}

// ============================================================================
// Builder wiring
// ============================================================================

#[test]
fn builds_camera_and_activates() {
    let showcase = build_showcase(ShowcaseConfig::default()).unwrap();
    assert_eq!(showcase.scene.active_camera, Some(showcase.camera));

    let camera = showcase.scene.active_camera_component().unwrap();
    assert!(approx(camera.fov, 50.0_f32.to_radians()));
}

#[test]
fn camera_placed_and_aimed() {
    let config = ShowcaseConfig {
        camera: CameraPlacement {
            position: Vec3::new(5.0, 2.0, 10.0),
            fov: 45.0,
            ..CameraPlacement::default()
        },
        ..ShowcaseConfig::default()
    };
    let showcase = build_showcase(config).unwrap();

    let node = showcase.scene.get_node(showcase.camera).unwrap();
    assert_eq!(node.transform.position, Vec3::new(5.0, 2.0, 10.0));

    // Camera forward (-Z) points at the origin
    let forward = node.transform.local_matrix().transform_vector3(-Vec3::Z);
    let expected = -Vec3::new(5.0, 2.0, 10.0).normalize();
    assert!((forward - expected).length() < 1e-3, "got {forward}");
}

#[test]
fn default_lights_present() {
    let showcase = build_showcase(ShowcaseConfig::default()).unwrap();
    assert_eq!(showcase.scene.lights.len(), 2);
}

#[test]
fn centerpiece_gets_drivers() {
    let showcase = build_showcase(knot_config()).unwrap();

    assert!(showcase.centerpiece.is_some());
    assert!(showcase.backdrop.is_some());
    // Centerpiece: time + spin. Backdrop: time + resolution.
    assert_eq!(showcase.playbook().len(), 4);
}

#[test]
fn centerpiece_mesh_flags_follow_shadows() {
    let with = build_showcase(knot_config()).unwrap();
    let node = with.scene.get_node(with.centerpiece.unwrap()).unwrap();
    let mesh = with.scene.meshes[node.mesh.unwrap()];
    assert!(mesh.casts_shadow());
    assert!(mesh.receives_shadow());

    let mut config = knot_config();
    config.shadows = false;
    let without = build_showcase(config).unwrap();
    let node = without.scene.get_node(without.centerpiece.unwrap()).unwrap();
    let mesh = without.scene.meshes[node.mesh.unwrap()];
    assert!(!mesh.casts_shadow());
}

#[test]
fn backdrop_laid_flat() {
    let showcase = build_showcase(knot_config()).unwrap();
    let node = showcase.scene.get_node(showcase.backdrop.unwrap()).unwrap();

    assert!(approx(node.transform.rotation.x, -FRAC_PI_2));
    assert!(approx(node.transform.position.y, -0.8));

    let mesh = showcase.scene.meshes[node.mesh.unwrap()];
    assert!(mesh.receives_shadow());
    assert!(!mesh.casts_shadow());
}

#[test]
fn named_composition_nodes() {
    let showcase = build_showcase(knot_config()).unwrap();
    assert_eq!(
        showcase.scene.get_name(showcase.centerpiece.unwrap()),
        Some("centerpiece")
    );
    assert_eq!(
        showcase.scene.get_name(showcase.backdrop.unwrap()),
        Some("backdrop")
    );
}

// ============================================================================
// Extruded text
// ============================================================================

fn text_config(source: Option<Geometry>) -> ShowcaseConfig {
    ShowcaseConfig {
        centerpiece: Some(CenterpieceConfig::new(
            CenterpieceGeometry::ExtrudedText {
                text: "HELLO".to_string(),
                options: ExtrudedTextOptions::default(),
                source,
            },
            CenterpieceMaterial::GlossyGradient {
                color_a: Vec3::new(0.0, 0.44, 0.95),
                color_b: Vec3::new(0.0, 0.65, 0.93),
            },
        )),
        backdrop: Some(BackdropConfig::default()),
        ..ShowcaseConfig::default()
    }
}

#[test]
fn pending_text_skips_centerpiece() {
    let showcase = build_showcase(text_config(None)).unwrap();

    // Degraded but functional: backdrop and its drivers still run
    assert!(showcase.centerpiece.is_none());
    assert!(showcase.backdrop.is_some());
    assert_eq!(showcase.playbook().len(), 2);
}

#[test]
fn delivered_text_builds_centerpiece() {
    let showcase = build_showcase(text_config(Some(quad_geometry()))).unwrap();
    assert!(showcase.centerpiece.is_some());
}

#[test]
fn invalid_text_options_fail_build() {
    let mut config = text_config(Some(quad_geometry()));
    if let Some(cp) = &mut config.centerpiece {
        if let CenterpieceGeometry::ExtrudedText { options, .. } = &mut cp.geometry {
            options.size = -1.0;
        }
    }
    assert!(matches!(
        build_showcase(config),
        Err(VitrineError::InvalidGeometry(_))
    ));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn rejects_degenerate_camera() {
    let mut config = ShowcaseConfig::default();
    config.camera.fov = 0.0;
    assert!(matches!(
        build_showcase(config),
        Err(VitrineError::InvalidConfig(_))
    ));

    let mut config = ShowcaseConfig::default();
    config.camera.near = 10.0;
    config.camera.far = 1.0;
    assert!(matches!(
        build_showcase(config),
        Err(VitrineError::InvalidConfig(_))
    ));
}

#[test]
fn rejects_bad_centerpiece_geometry() {
    let mut config = knot_config();
    if let Some(cp) = &mut config.centerpiece {
        cp.geometry = CenterpieceGeometry::TorusKnot(TorusKnotOptions {
            radius: 0.0,
            ..TorusKnotOptions::default()
        });
    }
    assert!(build_showcase(config).is_err());
}

// ============================================================================
// Frame advancement
// ============================================================================

#[test]
fn advance_spins_centerpiece() {
    let mut showcase = build_showcase(knot_config()).unwrap();
    let centerpiece = showcase.centerpiece.unwrap();

    showcase.advance(FrameTiming::new(1.0, 1.0));

    let rotation = showcase.scene.get_node(centerpiece).unwrap().transform.rotation;
    assert!(approx(rotation.x, 0.5));
    assert!(approx(rotation.y, 0.7));
}

#[test]
fn advance_updates_grid_uniforms() {
    let mut showcase = build_showcase(knot_config()).unwrap();
    showcase.set_viewport(1920.0, 1080.0);

    showcase.advance(FrameTiming::new(2.0, 0.016));

    let backdrop = showcase.backdrop.unwrap();
    let mesh_key = showcase.scene.get_node(backdrop).unwrap().mesh.unwrap();
    let material_key = showcase.scene.meshes[mesh_key].material;
    let grid = showcase.scene.materials[material_key].as_grid().unwrap();

    assert!(approx(grid.uniforms.read().time, 2.0));
    assert_eq!(
        grid.uniforms.read().resolution,
        Vec2::new(1920.0, 1080.0)
    );
}

#[test]
fn advance_refreshes_world_matrices() {
    let mut showcase = build_showcase(knot_config()).unwrap();
    let centerpiece = showcase.centerpiece.unwrap();

    showcase.advance(FrameTiming::new(FRAC_PI_2 / 0.5, FRAC_PI_2 / 0.5));

    // Spin rate 0.5 over pi seconds puts a quarter turn into the matrix
    let node = showcase.scene.get_node(centerpiece).unwrap();
    let x = node.world_matrix().transform_vector3(Vec3::Y);
    assert!(x.y.abs() < 1e-3, "world matrix stale: {x}");
}

#[test]
fn teardown_stops_motion() {
    let mut showcase = build_showcase(knot_config()).unwrap();
    let centerpiece = showcase.centerpiece.unwrap();

    showcase.teardown();
    assert!(showcase.playbook().is_empty());

    showcase.advance(FrameTiming::new(5.0, 5.0));
    let rotation = showcase.scene.get_node(centerpiece).unwrap().transform.rotation;
    assert!(approx(rotation.x, 0.0));
}

// ============================================================================
// Audio gate
// ============================================================================

#[test]
fn gate_starts_locked() {
    let gate = AudioGate::new();
    assert_eq!(gate.state(), GateState::Locked);
    assert!(!gate.is_ready());
}

#[test]
fn gate_unlocks_once() {
    let mut gate = AudioGate::new();

    assert!(gate.notify(GestureEvent::PointerClick));
    assert!(gate.is_ready());

    // Later gestures are absorbed without a second trigger
    assert!(!gate.notify(GestureEvent::PointerClick));
    assert!(!gate.notify(GestureEvent::TouchStart));
    assert!(gate.is_ready());
}

#[test]
fn gate_ignores_non_qualifying() {
    let mut gate = AudioGate::new();
    assert!(!gate.notify(GestureEvent::PointerMove));
    assert!(!gate.notify(GestureEvent::Other));
    assert!(!gate.is_ready());

    assert!(gate.notify(GestureEvent::TouchStart));
}

#[test]
fn showcase_forwards_gestures() {
    let mut showcase = build_showcase(ShowcaseConfig {
        audio: Some(AudioTrack::new("sounds/constellation.mp3")),
        ..ShowcaseConfig::default()
    })
    .unwrap();

    assert!(!showcase.audio_ready());
    assert!(showcase.notify_gesture(GestureEvent::PointerClick));
    assert!(showcase.audio_ready());
    assert!(!showcase.notify_gesture(GestureEvent::PointerClick));
}

#[test]
fn audio_track_defaults() {
    let track = AudioTrack::new("sounds/constellation.mp3");
    assert!(track.looped);
    assert!(track.autoplay);
    assert!(approx(track.falloff_distance, 10.0));

    let once = AudioTrack::new("x").once();
    assert!(!once.looped);
}
