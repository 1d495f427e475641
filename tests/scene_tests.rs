//! Scene Graph Tests
//!
//! Tests for:
//! - Node creation, naming, attach/detach re-parenting
//! - Subtree removal and component release
//! - World matrix propagation through the hierarchy
//! - Viewport updates and camera aspect tracking
//! - Active camera resolution and light iteration

use glam::{Vec3, Vec4};

use vitrine::scene::{Light, LightKind, Scene};
use vitrine::{Camera, Material, Mesh, PlaneOptions, create_plane};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn new_node_is_root() {
    let mut scene = Scene::new();
    let node = scene.create_node();

    assert!(scene.root_nodes.contains(&node));
    assert!(scene.get_node(node).unwrap().parent().is_none());
}

#[test]
fn attach_reparents() {
    let mut scene = Scene::new();
    let parent = scene.create_node();
    let child = scene.create_node();

    scene.attach(child, parent);

    assert!(!scene.root_nodes.contains(&child));
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(parent));
    assert!(scene.get_node(parent).unwrap().children().contains(&child));
}

#[test]
fn attach_moves_between_parents() {
    let mut scene = Scene::new();
    let a = scene.create_node();
    let b = scene.create_node();
    let child = scene.create_node();

    scene.attach(child, a);
    scene.attach(child, b);

    assert!(!scene.get_node(a).unwrap().children().contains(&child));
    assert!(scene.get_node(b).unwrap().children().contains(&child));
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(b));
}

#[test]
fn attach_to_self_noop() {
    let mut scene = Scene::new();
    let node = scene.create_node();

    scene.attach(node, node);

    assert!(scene.root_nodes.contains(&node));
    assert!(scene.get_node(node).unwrap().parent().is_none());
}

#[test]
fn detach_returns_to_root() {
    let mut scene = Scene::new();
    let parent = scene.create_node();
    let child = scene.create_node();
    scene.attach(child, parent);

    scene.detach(child);

    assert!(scene.root_nodes.contains(&child));
    assert!(scene.get_node(child).unwrap().parent().is_none());
    assert!(scene.get_node(parent).unwrap().children().is_empty());
}

// ============================================================================
// Naming
// ============================================================================

#[test]
fn named_nodes() {
    let mut scene = Scene::new();
    let node = scene.create_node_with_name("centerpiece");

    assert_eq!(scene.get_name(node), Some("centerpiece"));

    scene.set_name(node, "hero");
    assert_eq!(scene.get_name(node), Some("hero"));
}

#[test]
fn removed_node_loses_name() {
    let mut scene = Scene::new();
    let node = scene.create_node_with_name("temp");

    scene.remove_node(node);
    assert_eq!(scene.get_name(node), None);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn remove_node_takes_subtree() {
    let mut scene = Scene::new();
    let root = scene.create_node();
    let child = scene.create_node();
    let grandchild = scene.create_node();
    scene.attach(child, root);
    scene.attach(grandchild, child);

    scene.remove_node(root);

    assert!(scene.get_node(root).is_none());
    assert!(scene.get_node(child).is_none());
    assert!(scene.get_node(grandchild).is_none());
    assert!(scene.root_nodes.is_empty());
}

#[test]
fn remove_node_releases_components() {
    let mut scene = Scene::new();
    let geometry = scene.add_geometry(create_plane(&PlaneOptions::default()).unwrap());
    let material = scene.add_material(Material::new_grid());
    let node = scene.add_mesh(Mesh::new(geometry, material));

    let mesh_key = scene.get_node(node).unwrap().mesh.unwrap();
    assert!(scene.meshes.contains_key(mesh_key));

    scene.remove_node(node);
    assert!(!scene.meshes.contains_key(mesh_key));
    // Shared resources stay; only the component goes
    assert!(scene.geometries.contains_key(geometry));
    assert!(scene.materials.contains_key(material));
}

#[test]
fn remove_active_camera_clears_selection() {
    let mut scene = Scene::new();
    let camera = scene.add_camera(Camera::new_perspective(50.0, 1.0, 0.1, 100.0));
    scene.active_camera = Some(camera);

    scene.remove_node(camera);
    assert!(scene.active_camera.is_none());
    assert!(scene.active_camera_component().is_none());
}

// ============================================================================
// World matrices
// ============================================================================

#[test]
fn world_matrix_composes_parent_child() {
    let mut scene = Scene::new();
    let parent = scene.create_node();
    let child = scene.create_node();
    scene.attach(child, parent);

    scene.get_node_mut(parent).unwrap().transform.position = Vec3::new(1.0, 0.0, 0.0);
    scene.get_node_mut(child).unwrap().transform.position = Vec3::new(0.0, 2.0, 0.0);

    scene.update_world_matrices();

    let world = scene.get_node(child).unwrap().transform.world_matrix();
    let origin = world.transform_point3(Vec3::ZERO);
    assert!(approx(origin.x, 1.0), "got {origin}");
    assert!(approx(origin.y, 2.0), "got {origin}");
}

#[test]
fn world_matrix_applies_parent_scale() {
    let mut scene = Scene::new();
    let parent = scene.create_node();
    let child = scene.create_node();
    scene.attach(child, parent);

    scene.get_node_mut(parent).unwrap().transform.scale = Vec3::splat(2.0);
    scene.get_node_mut(child).unwrap().transform.position = Vec3::new(1.0, 0.0, 0.0);

    scene.update_world_matrices();

    let world = scene.get_node(child).unwrap().transform.world_matrix();
    let origin = world.transform_point3(Vec3::ZERO);
    assert!(approx(origin.x, 2.0), "got {origin}");
}

#[test]
fn camera_view_follows_node() {
    let mut scene = Scene::new();
    let camera = scene.add_camera(Camera::new_perspective(50.0, 1.0, 0.1, 100.0));
    scene.active_camera = Some(camera);

    scene.get_node_mut(camera).unwrap().transform.position = Vec3::new(0.0, 0.0, 9.0);
    scene.update_world_matrices();

    let component = scene.active_camera_component().unwrap();
    // View matrix is the inverse of the camera's world placement
    let eye = component.view_matrix().transform_point3(Vec3::new(0.0, 0.0, 9.0));
    assert!(eye.length() < EPSILON, "camera position should map to origin");
}

// ============================================================================
// Viewport
// ============================================================================

#[test]
fn default_viewport() {
    let scene = Scene::new();
    assert!(approx(scene.viewport().aspect(), 1280.0 / 720.0));
}

#[test]
fn set_viewport_updates_camera_aspect() {
    let mut scene = Scene::new();
    let camera = scene.add_camera(Camera::new_perspective(50.0, 1.0, 0.1, 100.0));

    scene.set_viewport(1920.0, 1080.0);

    let key = scene.get_node(camera).unwrap().camera.unwrap();
    assert!(approx(scene.cameras[key].aspect, 1920.0 / 1080.0));
}

#[test]
fn zero_height_viewport_keeps_finite_aspect() {
    let mut scene = Scene::new();
    scene.set_viewport(800.0, 0.0);
    assert!(approx(scene.viewport().aspect(), 1.0));
}

// ============================================================================
// Lights
// ============================================================================

#[test]
fn iter_active_lights_skips_hidden() {
    let mut scene = Scene::new();
    let visible = scene.add_light(Light::new_ambient(Vec3::ONE, 0.5));
    let hidden = scene.add_light(Light::new_point(Vec3::ONE, 1.0, 10.0));
    scene.get_node_mut(hidden).unwrap().visible = false;
    let _ = visible;

    scene.update_world_matrices();

    let lights: Vec<_> = scene.iter_active_lights().collect();
    assert_eq!(lights.len(), 1);
    assert!(matches!(lights[0].0.kind, LightKind::Ambient));
}

#[test]
fn background_default_black() {
    let scene = Scene::new();
    assert_eq!(scene.background, Some(Vec4::new(0.0, 0.0, 0.0, 1.0)));
}
