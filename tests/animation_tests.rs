//! Animation Driver Tests
//!
//! Tests for:
//! - Spinner additive rotation and chunking independence
//! - Sway/Bobber elapsed-time-driven motion
//! - TimeUniformDriver direct assignment and idempotence
//! - ResolutionUniformDriver viewport tracking across resizes
//! - Playbook ordering, clearing and missing-target no-ops

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use vitrine::animation::{
    Animate, Bobber, FrameTiming, Playbook, ResolutionUniformDriver, Spinner, Sway,
    TimeUniformDriver,
};
use vitrine::scene::{MaterialKey, NodeHandle, Scene};
use vitrine::{Material, Mesh, PlaneOptions, create_plane};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn scene_with_node() -> (Scene, NodeHandle) {
    let mut scene = Scene::new();
    let node = scene.create_node();
    (scene, node)
}

fn scene_with_grid_material() -> (Scene, MaterialKey) {
    let mut scene = Scene::new();
    let geometry = scene.add_geometry(create_plane(&PlaneOptions::default()).unwrap());
    let material = scene.add_material(Material::new_grid());
    scene.add_mesh(Mesh::new(geometry, material));
    (scene, material)
}

// ============================================================================
// Spinner
// ============================================================================

#[test]
fn spinner_accumulates_rotation() {
    let (mut scene, node) = scene_with_node();
    let mut spinner = Spinner::new(node, Vec3::new(0.5, 0.7, 0.0));

    spinner.advance(&mut scene, FrameTiming::new(1.0, 1.0));

    let rotation = scene.get_node(node).unwrap().transform.rotation;
    assert!(approx(rotation.x, 0.5), "got {}", rotation.x);
    assert!(approx(rotation.y, 0.7), "got {}", rotation.y);
    assert!(approx(rotation.z, 0.0));
}

#[test]
fn spinner_chunking_independent() {
    // One 2s step and twenty 0.1s steps must land on the same angle
    let (mut scene_a, node_a) = scene_with_node();
    let mut spinner_a = Spinner::new(node_a, Vec3::new(0.5, 0.7, 0.0));
    spinner_a.advance(&mut scene_a, FrameTiming::new(2.0, 2.0));

    let (mut scene_b, node_b) = scene_with_node();
    let mut spinner_b = Spinner::new(node_b, Vec3::new(0.5, 0.7, 0.0));
    for i in 0..20 {
        spinner_b.advance(&mut scene_b, FrameTiming::new(i as f32 * 0.1, 0.1));
    }

    let ra = scene_a.get_node(node_a).unwrap().transform.rotation;
    let rb = scene_b.get_node(node_b).unwrap().transform.rotation;
    assert!(approx(ra.x, rb.x), "x: {} vs {}", ra.x, rb.x);
    assert!(approx(ra.y, rb.y), "y: {} vs {}", ra.y, rb.y);
}

#[test]
fn spinner_rotation_unbounded() {
    // Angles accumulate past a full turn without wrapping
    let (mut scene, node) = scene_with_node();
    let mut spinner = Spinner::new(node, Vec3::new(1.0, 0.0, 0.0));

    spinner.advance(&mut scene, FrameTiming::new(10.0, 10.0));

    let rotation = scene.get_node(node).unwrap().transform.rotation;
    assert!(rotation.x > TAU, "expected > {TAU}, got {}", rotation.x);
    assert!(approx(rotation.x, 10.0));
}

#[test]
fn spinner_removed_node_noop() {
    let (mut scene, node) = scene_with_node();
    let mut spinner = Spinner::new(node, Vec3::ONE);
    scene.remove_node(node);

    // Must neither panic nor touch anything
    spinner.advance(&mut scene, FrameTiming::new(1.0, 1.0));
    assert!(scene.get_node(node).is_none());
}

// ============================================================================
// Sway
// ============================================================================

#[test]
fn sway_overwrites_y_rotation() {
    let (mut scene, node) = scene_with_node();
    let mut sway = Sway::new(node, 0.5, 0.2);

    sway.advance(&mut scene, FrameTiming::new(3.0, 0.016));
    let expected = (3.0_f32 * 0.5).sin() * 0.2;
    let rotation = scene.get_node(node).unwrap().transform.rotation;
    assert!(approx(rotation.y, expected), "got {}", rotation.y);

    // Driven by elapsed time, not delta: same elapsed, same angle
    sway.advance(&mut scene, FrameTiming::new(3.0, 0.5));
    let rotation = scene.get_node(node).unwrap().transform.rotation;
    assert!(approx(rotation.y, expected));
}

#[test]
fn sway_amplitude_bounds() {
    let (mut scene, node) = scene_with_node();
    let mut sway = Sway::new(node, 2.0, 0.2);

    for i in 0..200 {
        sway.advance(&mut scene, FrameTiming::new(i as f32 * 0.05, 0.05));
        let y = scene.get_node(node).unwrap().transform.rotation.y;
        assert!(y.abs() <= 0.2 + EPSILON, "amplitude exceeded: {y}");
    }
}

// ============================================================================
// Bobber
// ============================================================================

#[test]
fn bobber_floats_around_base() {
    let (mut scene, node) = scene_with_node();
    let mut bobber = Bobber::new(node, 1.0, 1.0, 1.0).with_base_y(2.0);

    bobber.advance(&mut scene, FrameTiming::new(1.0, 0.016));

    let transform = &scene.get_node(node).unwrap().transform;
    let expected_y = 2.0 + 1.0_f32.sin() * 0.1;
    assert!(approx(transform.position.y, expected_y));
    assert!(approx(transform.rotation.x, 0.5_f32.cos() * 0.1));
    assert!(approx(transform.rotation.z, 0.7_f32.sin() * 0.05));
}

#[test]
fn bobber_zero_intensity_is_still() {
    let (mut scene, node) = scene_with_node();
    let mut bobber = Bobber::new(node, 1.0, 0.0, 0.0);

    bobber.advance(&mut scene, FrameTiming::new(5.0, 0.016));

    let transform = &scene.get_node(node).unwrap().transform;
    assert!(approx(transform.position.y, 0.0));
    assert!(approx(transform.rotation.x, 0.0));
    assert!(approx(transform.rotation.z, 0.0));
}

// ============================================================================
// TimeUniformDriver
// ============================================================================

#[test]
fn time_driver_assigns_elapsed() {
    let (mut scene, material) = scene_with_grid_material();
    let mut driver = TimeUniformDriver::new(material);

    driver.advance(&mut scene, FrameTiming::new(4.25, 0.016));

    let grid = scene.materials[material].as_grid().unwrap();
    assert!(approx(grid.uniforms.read().time, 4.25));
}

#[test]
fn time_driver_idempotent_per_timestamp() {
    // Assignment, not accumulation: repeating a timestamp changes nothing
    let (mut scene, material) = scene_with_grid_material();
    let mut driver = TimeUniformDriver::new(material);

    driver.advance(&mut scene, FrameTiming::new(1.5, 0.016));
    driver.advance(&mut scene, FrameTiming::new(1.5, 0.016));

    let grid = scene.materials[material].as_grid().unwrap();
    assert!(approx(grid.uniforms.read().time, 1.5));
}

#[test]
fn time_driver_skipped_frames_no_stale_state() {
    let (mut scene, material) = scene_with_grid_material();
    let mut driver = TimeUniformDriver::new(material);

    driver.advance(&mut scene, FrameTiming::new(1.0, 0.016));
    // Long gap, then one frame: the uniform lands on the new elapsed directly
    driver.advance(&mut scene, FrameTiming::new(60.0, 59.0));

    let grid = scene.materials[material].as_grid().unwrap();
    assert!(approx(grid.uniforms.read().time, 60.0));
}

#[test]
fn time_driver_removed_material_noop() {
    let (mut scene, material) = scene_with_grid_material();
    let mut driver = TimeUniformDriver::new(material);
    scene.materials.remove(material);

    driver.advance(&mut scene, FrameTiming::new(1.0, 0.016));
}

// ============================================================================
// ResolutionUniformDriver
// ============================================================================

#[test]
fn resolution_driver_tracks_viewport() {
    let (mut scene, material) = scene_with_grid_material();
    let mut driver = ResolutionUniformDriver::new(material);

    scene.set_viewport(800.0, 600.0);
    driver.advance(&mut scene, FrameTiming::new(0.0, 0.016));
    {
        let grid = scene.materials[material].as_grid().unwrap();
        assert_eq!(grid.uniforms.read().resolution, Vec2::new(800.0, 600.0));
    }

    // Resize between frames is picked up without an explicit event
    scene.set_viewport(1920.0, 1080.0);
    driver.advance(&mut scene, FrameTiming::new(0.016, 0.016));
    let grid = scene.materials[material].as_grid().unwrap();
    assert_eq!(grid.uniforms.read().resolution, Vec2::new(1920.0, 1080.0));
}

// ============================================================================
// Playbook
// ============================================================================

#[test]
fn playbook_runs_in_registration_order() {
    let (mut scene, node) = scene_with_node();
    let mut playbook = Playbook::new();

    // Second driver reads what the first wrote in the same frame
    playbook.add(Spinner::new(node, Vec3::new(1.0, 0.0, 0.0)));
    playbook.add_fn(move |scene: &mut Scene, _timing: FrameTiming| {
        if let Some(n) = scene.get_node_mut(node) {
            n.transform.rotation.z = n.transform.rotation.x * 2.0;
        }
    });

    playbook.advance(&mut scene, FrameTiming::new(1.0, 1.0));

    let rotation = scene.get_node(node).unwrap().transform.rotation;
    assert!(approx(rotation.x, 1.0));
    assert!(approx(rotation.z, 2.0), "later driver saw stale state");
}

#[test]
fn playbook_clear_stops_all_motion() {
    let (mut scene, node) = scene_with_node();
    let mut playbook = Playbook::new();
    playbook.add(Spinner::new(node, Vec3::ONE));
    assert_eq!(playbook.len(), 1);

    playbook.clear();
    assert!(playbook.is_empty());

    playbook.advance(&mut scene, FrameTiming::new(1.0, 1.0));
    let rotation = scene.get_node(node).unwrap().transform.rotation;
    assert!(approx(rotation.x, 0.0), "driver ran after clear");
}

#[test]
fn multiple_drivers_one_node() {
    // Spin on X plus sway on Y compose without clobbering each other
    let (mut scene, node) = scene_with_node();
    let mut playbook = Playbook::new();
    playbook.add(Spinner::new(node, Vec3::new(0.5, 0.0, 0.0)));
    playbook.add(Sway::new(node, 0.5, 0.2));

    playbook.advance(&mut scene, FrameTiming::new(2.0, 2.0));

    let rotation = scene.get_node(node).unwrap().transform.rotation;
    assert!(approx(rotation.x, 1.0));
    assert!(approx(rotation.y, 1.0_f32.sin() * 0.2));
}
