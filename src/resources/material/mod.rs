pub mod color_shift;
pub mod glossy;
pub mod grid;

pub use color_shift::{ColorShiftMaterial, ColorShiftUniforms, SurfaceSample};
pub use glossy::{GlossyGradientMaterial, GlossyGradientUniforms};
pub use grid::{GridMaterial, GridUniforms};

use std::any::Any;
use std::borrow::Cow;
use std::ops::Deref;

use glam::{Vec2, Vec3};
use uuid::Uuid;

use crate::errors::Result;
use crate::resources::uniforms::UniformValue;

// ============================================================================
// Settings
// ============================================================================

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Side {
    Front,
    Back,
    Double,
}

/// Material settings, corresponding to pipeline state on the renderer side.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MaterialSettings {
    pub transparent: bool,
    pub depth_write: bool,
    pub depth_test: bool,
    pub side: Side,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            transparent: false,
            depth_write: true,
            depth_test: true,
            side: Side::Double,
        }
    }
}

// ============================================================================
// MaterialTrait: core abstraction
// ============================================================================

/// Interface every material type implements.
///
/// Built-in materials are dispatched statically through [`MaterialData`];
/// the `Custom` variant is the dynamic escape hatch for user extensions.
pub trait MaterialTrait: Any + Send + Sync + std::fmt::Debug {
    /// Shader identifier, stable per material type.
    fn shader_name(&self) -> &'static str;

    /// Fixed WGSL vertex program.
    fn vertex_source(&self) -> &'static str;

    /// Fixed WGSL fragment program.
    fn fragment_source(&self) -> &'static str;

    fn settings(&self) -> &MaterialSettings;

    /// Uniform block bytes for GPU upload.
    fn uniform_bytes(&self) -> &[u8];

    /// Uniform data version (for renderer dirty checks).
    fn uniform_version(&self) -> u64;

    /// WGSL struct definition of the uniform block.
    fn wgsl_uniform_def(&self) -> String;

    /// Declared uniform names (the settable set).
    fn uniform_names(&self) -> Vec<&'static str>;

    /// By-name uniform write. Unknown names and mismatched types are
    /// configuration errors, surfaced synchronously.
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()>;

    /// Frame-path time update. Cannot fail by contract; materials without a
    /// time input ignore it.
    fn set_time(&mut self, time: f32) {
        let _ = self.set_uniform("time", UniformValue::Float(time));
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Mirror of `reflect()` in WGSL/GLSL: reflects `incident` about `normal`.
#[inline]
#[must_use]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

// ============================================================================
// Material data enum (static dispatch + dynamic escape hatch)
// ============================================================================

#[derive(Debug)]
pub enum MaterialData {
    ColorShift(ColorShiftMaterial),
    Grid(GridMaterial),
    GlossyGradient(GlossyGradientMaterial),
    Custom(Box<dyn MaterialTrait>),
}

macro_rules! delegate {
    ($self:ident, $m:ident => $body:expr) => {
        match $self {
            Self::ColorShift($m) => $body,
            Self::Grid($m) => $body,
            Self::GlossyGradient($m) => $body,
            Self::Custom($m) => $body,
        }
    };
}

impl MaterialData {
    #[must_use]
    pub fn shader_name(&self) -> &'static str {
        delegate!(self, m => m.shader_name())
    }

    #[must_use]
    pub fn vertex_source(&self) -> &'static str {
        delegate!(self, m => m.vertex_source())
    }

    #[must_use]
    pub fn fragment_source(&self) -> &'static str {
        delegate!(self, m => m.fragment_source())
    }

    #[must_use]
    pub fn settings(&self) -> &MaterialSettings {
        delegate!(self, m => m.settings())
    }

    #[must_use]
    pub fn uniform_bytes(&self) -> &[u8] {
        delegate!(self, m => m.uniform_bytes())
    }

    #[must_use]
    pub fn uniform_version(&self) -> u64 {
        delegate!(self, m => m.uniform_version())
    }

    #[must_use]
    pub fn wgsl_uniform_def(&self) -> String {
        delegate!(self, m => m.wgsl_uniform_def())
    }

    #[must_use]
    pub fn uniform_names(&self) -> Vec<&'static str> {
        delegate!(self, m => m.uniform_names())
    }

    pub fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        delegate!(self, m => m.set_uniform(name, value))
    }

    /// Frame-path time update; a no-op for materials without a time input.
    pub fn set_time(&mut self, time: f32) {
        match self {
            Self::ColorShift(m) => m.set_time(time),
            Self::Grid(m) => m.set_time(time),
            Self::GlossyGradient(m) => m.set_time(time),
            Self::Custom(m) => m.set_time(time),
        }
    }

    /// Frame-path resolution update; a no-op for materials without a
    /// resolution input.
    pub fn set_resolution(&mut self, resolution: Vec2) {
        match self {
            Self::Grid(m) => m.set_resolution(resolution),
            Self::Custom(m) => {
                let _ = m.set_uniform("resolution", UniformValue::Vec2(resolution));
            }
            Self::ColorShift(_) | Self::GlossyGradient(_) => {}
        }
    }

    /// Attempts a downcast of a `Custom` material to its concrete type.
    #[must_use]
    pub fn as_custom<T: MaterialTrait + 'static>(&self) -> Option<&T> {
        match self {
            Self::Custom(m) => m.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn as_custom_mut<T: MaterialTrait + 'static>(&mut self) -> Option<&mut T> {
        match self {
            Self::Custom(m) => m.as_any_mut().downcast_mut::<T>(),
            _ => None,
        }
    }
}

// ============================================================================
// Material wrapper
// ============================================================================

#[derive(Debug)]
pub struct Material {
    pub uuid: Uuid,
    pub name: Option<Cow<'static, str>>,
    pub data: MaterialData,
}

impl Material {
    #[must_use]
    pub fn new(data: MaterialData) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: None,
            data,
        }
    }

    #[must_use]
    pub fn new_custom<T: MaterialTrait + 'static>(custom_material: T) -> Self {
        Self::new(MaterialData::Custom(Box::new(custom_material)))
    }

    #[must_use]
    pub fn new_color_shift(color: Vec3) -> Self {
        Self::from(ColorShiftMaterial::new(color))
    }

    #[must_use]
    pub fn new_grid() -> Self {
        Self::from(GridMaterial::new())
    }

    #[must_use]
    pub fn new_glossy_gradient(color_a: Vec3, color_b: Vec3) -> Self {
        Self::from(GlossyGradientMaterial::new(color_a, color_b))
    }

    pub fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        self.data.set_uniform(name, value)
    }

    pub fn set_time(&mut self, time: f32) {
        self.data.set_time(time);
    }

    pub fn set_resolution(&mut self, resolution: Vec2) {
        self.data.set_resolution(resolution);
    }

    #[must_use]
    pub fn as_color_shift(&self) -> Option<&ColorShiftMaterial> {
        match &self.data {
            MaterialData::ColorShift(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_color_shift_mut(&mut self) -> Option<&mut ColorShiftMaterial> {
        match &mut self.data {
            MaterialData::ColorShift(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_grid(&self) -> Option<&GridMaterial> {
        match &self.data {
            MaterialData::Grid(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_grid_mut(&mut self) -> Option<&mut GridMaterial> {
        match &mut self.data {
            MaterialData::Grid(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_glossy_gradient(&self) -> Option<&GlossyGradientMaterial> {
        match &self.data {
            MaterialData::GlossyGradient(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_glossy_gradient_mut(&mut self) -> Option<&mut GlossyGradientMaterial> {
        match &mut self.data {
            MaterialData::GlossyGradient(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_custom<T: MaterialTrait + 'static>(&self) -> Option<&T> {
        self.data.as_custom::<T>()
    }

    pub fn as_custom_mut<T: MaterialTrait + 'static>(&mut self) -> Option<&mut T> {
        self.data.as_custom_mut::<T>()
    }

    #[must_use]
    pub fn transparent(&self) -> bool {
        self.data.settings().transparent
    }

    #[must_use]
    pub fn side(&self) -> &Side {
        &self.data.settings().side
    }
}

impl From<ColorShiftMaterial> for Material {
    fn from(data: ColorShiftMaterial) -> Self {
        Material::new(MaterialData::ColorShift(data))
    }
}

impl From<GridMaterial> for Material {
    fn from(data: GridMaterial) -> Self {
        Material::new(MaterialData::Grid(data))
    }
}

impl From<GlossyGradientMaterial> for Material {
    fn from(data: GlossyGradientMaterial) -> Self {
        Material::new(MaterialData::GlossyGradient(data))
    }
}

impl Deref for Material {
    type Target = MaterialData;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
