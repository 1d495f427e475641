use std::any::Any;

use glam::{Vec2, Vec3, Vec4};

use crate::errors::Result;
use crate::resources::buffer::UniformBuffer;
use crate::resources::material::{MaterialSettings, MaterialTrait};
use crate::resources::uniforms::{UniformBlock, UniformValue, define_uniform_block};

define_uniform_block!(
    /// Uniform inputs of the grid background material.
    struct GridUniforms {
        pub resolution: Vec2 = Vec2::ZERO,
        pub time: f32 = 0.0,
        __padding: f32,
    }
);

pub const SHADER_NAME: &str = "grid";

/// Coarse cell frequency over the plane's UV space.
pub const MAIN_FREQUENCY: f32 = 8.0;
/// Fine subdivision frequency.
pub const SUB_FREQUENCY: f32 = 80.0;
/// Blend weight of the coarse lines.
pub const MAIN_WEIGHT: f32 = 0.12;
/// Blend weight of the fine lines.
pub const SUB_WEIGHT: f32 = 0.06;
/// Line color blended over the white base.
pub const GRID_COLOR: Vec3 = Vec3::new(0.05, 0.2, 0.1);

/// Floor for the screen-space derivative divisor. `fwidth` can reach zero at
/// discontinuities; the CPU reference clamps instead of dividing by it.
pub const DERIVATIVE_EPSILON: f32 = 1e-6;

pub const VERTEX_SOURCE: &str = r"
struct FrameUniforms {
    view_projection: mat4x4<f32>,
    view_matrix: mat4x4<f32>,
    model_matrix: mat4x4<f32>,
    camera_position: vec3<f32>,
};

@group(0) @binding(0) var<uniform> frame: FrameUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.uv = in.uv;
    out.clip_position = frame.view_projection * frame.model_matrix * vec4<f32>(in.position, 1.0);
    return out;
}
";

pub const FRAGMENT_SOURCE: &str = r"
struct GridUniforms {
    resolution: vec2<f32>,
    time: f32,
};

@group(1) @binding(0) var<uniform> material: GridUniforms;

fn grid_line(st: vec2<f32>, frequency: f32) -> f32 {
    let cell = st * frequency;
    let dist = abs(fract(cell - 0.5) - 0.5) / fwidth(cell);
    let line = min(dist.x, dist.y);
    return 1.0 - min(line, 1.0);
}

@fragment
fn fs_main(@location(0) uv: vec2<f32>) -> @location(0) vec4<f32> {
    let main_grid = grid_line(uv, 8.0) * 0.12;
    let sub_grid = grid_line(uv, 80.0) * 0.06;

    let base = vec3<f32>(1.0);
    let grid_color = vec3<f32>(0.05, 0.2, 0.1);
    let color = mix(base, grid_color, main_grid + sub_grid);

    return vec4<f32>(color, 1.0);
}
";

/// Anti-aliased line intensity at one spatial frequency.
///
/// CPU reference of the fragment's `grid_line`. `derivative` stands in for
/// `fwidth(st * frequency)` (the caller supplies it, e.g. `frequency *
/// uv_per_pixel`), clamped away from zero so discontinuities cannot divide
/// by it. Yields ~1.0 on a cell boundary and ~0.0 at a cell center.
#[must_use]
pub fn line_intensity(st: Vec2, frequency: f32, derivative: Vec2) -> f32 {
    let cell = st * frequency - 0.5;
    let fract = cell - cell.floor();
    let width = derivative.max(Vec2::splat(DERIVATIVE_EPSILON));
    let dist = (fract - 0.5).abs() / width;
    let line = dist.x.min(dist.y);
    1.0 - line.min(1.0)
}

/// CPU reference of the full fragment program.
///
/// `uv_derivative` stands in for `fwidth(uv)` at the sampled fragment.
#[must_use]
pub fn shade(uv: Vec2, uv_derivative: Vec2) -> Vec4 {
    let main_grid = line_intensity(uv, MAIN_FREQUENCY, uv_derivative * MAIN_FREQUENCY) * MAIN_WEIGHT;
    let sub_grid = line_intensity(uv, SUB_FREQUENCY, uv_derivative * SUB_FREQUENCY) * SUB_WEIGHT;

    let color = Vec3::ONE.lerp(GRID_COLOR, main_grid + sub_grid);
    color.extend(1.0)
}

/// Grid background material.
///
/// Anti-aliased lines at two spatial frequencies over a white base. The
/// resolution uniform is refreshed from the viewport every frame by a
/// [`crate::animation::ResolutionUniformDriver`], which also covers window
/// resizes without an explicit resize event.
#[derive(Debug)]
pub struct GridMaterial {
    pub uniforms: UniformBuffer<GridUniforms>,
    settings: MaterialSettings,
}

impl GridMaterial {
    #[must_use]
    pub fn new() -> Self {
        Self {
            uniforms: UniformBuffer::new(GridUniforms::default(), "GridUniforms"),
            settings: MaterialSettings::default(),
        }
    }

    pub fn set_resolution(&mut self, resolution: Vec2) {
        self.uniforms.write().resolution = resolution;
    }

    pub fn set_time(&mut self, time: f32) {
        self.uniforms.write().time = time;
    }
}

impl Default for GridMaterial {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialTrait for GridMaterial {
    fn shader_name(&self) -> &'static str {
        SHADER_NAME
    }

    fn vertex_source(&self) -> &'static str {
        VERTEX_SOURCE
    }

    fn fragment_source(&self) -> &'static str {
        FRAGMENT_SOURCE
    }

    fn settings(&self) -> &MaterialSettings {
        &self.settings
    }

    fn uniform_bytes(&self) -> &[u8] {
        self.uniforms.as_bytes()
    }

    fn uniform_version(&self) -> u64 {
        self.uniforms.version()
    }

    fn wgsl_uniform_def(&self) -> String {
        GridUniforms::wgsl_struct_def("GridUniforms")
    }

    fn uniform_names(&self) -> Vec<&'static str> {
        GridUniforms::field_names()
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        self.uniforms.write().set_field(SHADER_NAME, name, value)
    }

    fn set_time(&mut self, time: f32) {
        GridMaterial::set_time(self, time);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
