use crate::scene::transform::Transform;
use crate::scene::{CameraKey, LightKey, MeshKey, NodeHandle};
use glam::Affine3A;

/// A scene node: hierarchy links, a transform, and optional component keys.
///
/// Nodes form a tree through parent/child handles. Component data (mesh,
/// camera, light) lives in the [`crate::scene::Scene`]'s pools; the node
/// only holds keys into them, keeping the per-frame traversal data small.
#[derive(Debug, Clone)]
pub struct Node {
    // === Hierarchy ===
    /// Parent node handle (None for root nodes)
    pub(crate) parent: Option<NodeHandle>,
    /// Child node handles
    pub(crate) children: Vec<NodeHandle>,

    // === Spatial data ===
    /// Transform component (hot data accessed every frame)
    pub transform: Transform,

    // === Components ===
    pub mesh: Option<MeshKey>,
    pub camera: Option<CameraKey>,
    pub light: Option<LightKey>,

    /// Visibility flag for culling
    pub visible: bool,
}

impl Node {
    /// Creates a new node with default transform and visibility.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            mesh: None,
            camera: None,
            light: None,
            visible: true,
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns a reference to the world transformation matrix.
    ///
    /// Updated by [`crate::scene::Scene::update_world_matrices`] each frame.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
