//! Resource Module
//!
//! CPU-side resource data read by the external renderer:
//! - [`Geometry`]: triangle mesh attribute data and primitives
//! - [`Material`]: parameterized WGSL materials with typed uniform blocks
//! - [`Mesh`]: geometry + material pairing with shadow flags
//! - [`uniforms`]: uniform block reflection (WGSL generation, by-name setters)
//! - [`buffer`]: version-counted uniform storage for renderer dirty checks

pub mod buffer;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod primitives;
pub mod uniforms;

pub use buffer::{UniformBuffer, UniformGuard};
pub use geometry::{BoundingBox, Geometry};
pub use material::{
    ColorShiftMaterial, ColorShiftUniforms, GlossyGradientMaterial, GlossyGradientUniforms,
    GridMaterial, GridUniforms, Material, MaterialData, MaterialSettings, MaterialTrait, Side,
    SurfaceSample,
};
pub use mesh::{Mesh, MeshFlags};
pub use uniforms::{UniformBlock, UniformValue};
