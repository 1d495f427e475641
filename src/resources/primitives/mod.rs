//! Geometry primitives.
//!
//! CPU tessellators for the shapes this crate composes directly, plus the
//! typed configuration ([`ExtrudedTextOptions`]) handed to the external
//! font-extrusion collaborator.

mod extruded_text;
mod plane;
mod torus_knot;

pub use extruded_text::ExtrudedTextOptions;
pub use plane::{PlaneOptions, create_plane};
pub use torus_knot::{TorusKnotOptions, create_torus_knot};
