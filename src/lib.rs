#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod compose;
pub mod errors;
pub mod resources;
pub mod scene;
pub mod utils;

pub use animation::{Animate, FrameTiming, Playbook};
pub use compose::{AudioGate, AudioTrack, GestureEvent, Showcase, ShowcaseConfig, build_showcase};
pub use errors::VitrineError;
pub use resources::{Geometry, Material, MaterialTrait, Mesh, Side, UniformValue};
pub use resources::primitives::*;
pub use scene::{Camera, Light, Node, Scene, Transform, Viewport};
pub use utils::time::FrameTimer;
