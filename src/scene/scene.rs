use std::sync::atomic::{AtomicU32, Ordering};

use glam::{Affine3A, Vec2, Vec4};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::resources::{Geometry, Material, Mesh};
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::{CameraKey, GeometryKey, LightKey, MaterialKey, MeshKey, NodeHandle};

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Current drawing surface size in physical pixels.
///
/// Re-read by resolution-driven materials every frame, so a resize needs no
/// explicit event: the external windowing layer calls
/// [`Scene::set_viewport`] whenever the surface changes and the next frame
/// picks it up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Scene graph container.
///
/// Pure data layer: the node hierarchy plus pools for every component and
/// resource type. Animation drivers and the external renderer both operate
/// on this one structure; it is built once by composition and mutated in
/// place each frame.
pub struct Scene {
    pub id: u32,

    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,
    names: FxHashMap<NodeHandle, String>,

    // ==== Component / resource pools ====
    pub meshes: SlotMap<MeshKey, Mesh>,
    pub cameras: SlotMap<CameraKey, Camera>,
    pub lights: SlotMap<LightKey, Light>,
    pub geometries: SlotMap<GeometryKey, Geometry>,
    pub materials: SlotMap<MaterialKey, Material>,

    /// Clear color, RGBA
    pub background: Option<Vec4>,

    pub active_camera: Option<NodeHandle>,

    viewport: Viewport,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),

            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            names: FxHashMap::default(),

            meshes: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            geometries: SlotMap::with_key(),
            materials: SlotMap::with_key(),

            background: Some(Vec4::new(0.0, 0.0, 0.0, 1.0)),

            active_camera: None,

            viewport: Viewport::default(),
        }
    }

    // ========================================================================
    // Nodes & hierarchy
    // ========================================================================

    /// Creates an empty node at the root level.
    pub fn create_node(&mut self) -> NodeHandle {
        self.add_node(Node::new())
    }

    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        let handle = self.create_node();
        self.names.insert(handle, name.to_string());
        handle
    }

    /// Adds a node to the scene at the root level.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Re-parents `child` under `parent`, keeping both sides in sync.
    ///
    /// A no-op if the handles are equal or either node is gone.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent
            || !self.nodes.contains_key(child)
            || !self.nodes.contains_key(parent)
        {
            return;
        }

        self.unlink(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    /// Detaches `child` from its parent and returns it to the root level.
    pub fn detach(&mut self, child: NodeHandle) {
        if !self.nodes.contains_key(child) {
            return;
        }
        self.unlink(child);
        self.root_nodes.push(child);
    }

    /// Removes the node from its current parent's child list or from the
    /// root list, leaving it unowned.
    fn unlink(&mut self, child: NodeHandle) {
        let old_parent = self.nodes.get(child).and_then(Node::parent);
        if let Some(op) = old_parent {
            if let Some(p) = self.nodes.get_mut(op) {
                p.children.retain(|&c| c != child);
            }
        } else {
            self.root_nodes.retain(|&c| c != child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = None;
        }
    }

    /// Removes a node and its whole subtree, releasing owned components.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let Some(node) = self.nodes.get(handle) else {
            return;
        };
        let children = node.children.clone();

        for child in children {
            self.remove_node(child);
        }

        self.unlink(handle);

        if let Some(node) = self.nodes.remove(handle) {
            if let Some(key) = node.mesh {
                self.meshes.remove(key);
            }
            if let Some(key) = node.camera {
                self.cameras.remove(key);
            }
            if let Some(key) = node.light {
                self.lights.remove(key);
            }
        }
        self.names.remove(&handle);

        if self.active_camera == Some(handle) {
            self.active_camera = None;
        }
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    pub fn set_name(&mut self, handle: NodeHandle, name: &str) {
        if self.nodes.contains_key(handle) {
            self.names.insert(handle, name.to_string());
        }
    }

    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.names.get(&handle).map(String::as_str)
    }

    // ========================================================================
    // Components & resources
    // ========================================================================

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryKey {
        self.geometries.insert(geometry)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialKey {
        self.materials.insert(material)
    }

    /// Creates a node carrying the given mesh.
    pub fn add_mesh(&mut self, mesh: Mesh) -> NodeHandle {
        let key = self.meshes.insert(mesh);
        let node = Node {
            mesh: Some(key),
            ..Node::new()
        };
        self.add_node(node)
    }

    /// Creates a node carrying the given camera.
    pub fn add_camera(&mut self, camera: Camera) -> NodeHandle {
        let key = self.cameras.insert(camera);
        let node = Node {
            camera: Some(key),
            ..Node::new()
        };
        self.add_node(node)
    }

    /// Creates a node carrying the given light.
    pub fn add_light(&mut self, light: Light) -> NodeHandle {
        let key = self.lights.insert(light);
        let node = Node {
            light: Some(key),
            ..Node::new()
        };
        self.add_node(node)
    }

    /// Resolves the active camera component, if a camera node is set.
    #[must_use]
    pub fn active_camera_component(&self) -> Option<&Camera> {
        let key = self.get_node(self.active_camera?)?.camera?;
        self.cameras.get(key)
    }

    /// Iterates visible lights paired with their world matrices.
    pub fn iter_active_lights(&self) -> impl Iterator<Item = (&Light, &Affine3A)> {
        self.nodes.iter().filter_map(|(_, node)| {
            if !node.visible {
                return None;
            }
            let light = self.lights.get(node.light?)?;
            Some((light, &node.transform.world_matrix))
        })
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Records the new surface size and refreshes every camera's aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        let aspect = self.viewport.aspect();
        for (_, camera) in &mut self.cameras {
            camera.set_aspect(aspect);
        }
    }

    // ========================================================================
    // Matrix propagation
    // ========================================================================

    /// Propagates local transforms into world matrices, roots downward, then
    /// refreshes camera view matrices from their nodes.
    pub fn update_world_matrices(&mut self) {
        let mut stack: Vec<(NodeHandle, Affine3A)> = self
            .root_nodes
            .iter()
            .map(|&h| (h, Affine3A::IDENTITY))
            .collect();

        while let Some((handle, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(handle) else {
                continue;
            };
            node.transform.update_local_matrix();
            let world = parent_world * *node.transform.local_matrix();
            node.transform.set_world_matrix(world);

            for &child in &node.children {
                stack.push((child, world));
            }
        }

        let camera_nodes: Vec<(CameraKey, Affine3A)> = self
            .nodes
            .iter()
            .filter_map(|(_, node)| node.camera.map(|key| (key, node.transform.world_matrix)))
            .collect();
        for (key, world) in camera_nodes {
            if let Some(camera) = self.cameras.get_mut(key) {
                camera.update_view(&world);
            }
        }
    }
}
