//! Scene graph module
//!
//! Manages the scene hierarchy and its components:
//! - [`Node`]: scene node (parent/child links and a transform)
//! - [`Transform`]: position, Euler rotation, scale with cached matrices
//! - [`Scene`]: scene container and resource pools
//! - [`Camera`]: perspective camera component
//! - [`Light`]: light component (ambient/directional/point/spot)

pub mod camera;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::Camera;
pub use light::{Light, LightKind, ShadowConfig};
pub use node::Node;
pub use scene::{Scene, Viewport};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MeshKey;
    pub struct CameraKey;
    pub struct LightKey;
    pub struct GeometryKey;
    pub struct MaterialKey;
}
