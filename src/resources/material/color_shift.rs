use std::any::Any;

use glam::{Vec3, Vec4};

use crate::errors::Result;
use crate::resources::buffer::UniformBuffer;
use crate::resources::material::{MaterialSettings, MaterialTrait};
use crate::resources::uniforms::{UniformBlock, UniformValue, define_uniform_block};

define_uniform_block!(
    /// Uniform inputs of the reflective color-shift material.
    struct ColorShiftUniforms {
        pub color: Vec3 = Vec3::new(0.05, 0.2, 0.1),
        pub time: f32 = 0.0,
    }
);

pub const SHADER_NAME: &str = "color_shift";

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
    @location(1) normal: vec3<f32>,
    @location(2) view_position: vec3<f32>,
    @location(3) world_position: vec3<f32>,
    @location(4) reflect_dir: vec3<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world_position = frame.model_matrix * vec4<f32>(in.position, 1.0);
    let mv_position = frame.view_matrix * world_position;
    let world_normal = normalize((frame.model_matrix * vec4<f32>(in.normal, 0.0)).xyz);

    out.uv = in.uv;
    out.normal = world_normal;
    out.view_position = -mv_position.xyz;
    out.world_position = world_position.xyz;

    let camera_to_vertex = normalize(world_position.xyz - frame.camera_position);
    out.reflect_dir = reflect(camera_to_vertex, world_normal);

    out.clip_position = frame.view_projection * world_position;
    return out;
}
";

pub const FRAGMENT_SOURCE: &str = r"
struct ColorShiftUniforms {
    color: vec3<f32>,
    time: f32,
};

@group(1) @binding(0) var<uniform> material: ColorShiftUniforms;

@fragment
fn fs_main(
    @location(0) uv: vec2<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) view_position: vec3<f32>,
    @location(3) world_position: vec3<f32>,
    @location(4) reflect_dir: vec3<f32>,
) -> @location(0) vec4<f32> {
    let n = normalize(normal);
    let view_dir = normalize(view_position);

    let fresnel = pow(1.0 - max(dot(n, view_dir), 0.0), 4.0);

    let light_1 = normalize(vec3<f32>(1.0, 2.0, 1.0));
    let light_2 = normalize(vec3<f32>(-1.0, 1.0, -1.0));
    let light_3 = normalize(vec3<f32>(0.0, -1.0, 1.0));

    let highlight_1 = pow(max(dot(n, light_1), 0.0), 64.0) * 1.5;
    let highlight_2 = pow(max(dot(n, light_2), 0.0), 64.0) * 1.2;
    let highlight_3 = pow(max(dot(n, light_3), 0.0), 64.0) * 1.0;

    let env_reflection = max(dot(n, vec3<f32>(0.0, 1.0, 0.0)), 0.0) * 0.6;

    let reflection = normalize(reflect_dir);
    let reflection_intensity = pow(max(dot(reflection, n), 0.0), 3.0);

    var color = mix(material.color, vec3<f32>(1.0), fresnel * 0.9);
    color = mix(color, vec3<f32>(1.0), highlight_1 + highlight_2 + highlight_3);
    color += vec3<f32>(1.0) * env_reflection;
    color += vec3<f32>(0.9, 0.95, 1.0) * reflection_intensity * 0.6;

    let depth = view_position.z * 0.15;
    color *= 1.0 - depth;

    let time_variation = sin(material.time * 0.5 + world_position.x + reflection.y) * 0.15 + 0.85;
    color *= time_variation;

    return vec4<f32>(color, 0.9);
}
";

/// Per-fragment interpolated inputs, as produced by the vertex stage.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceSample {
    /// Interpolated surface normal (world space).
    pub normal: Vec3,
    /// Negated view-space position of the fragment.
    pub view_position: Vec3,
    pub world_position: Vec3,
    /// View reflection vector from the vertex stage.
    pub reflect_dir: Vec3,
}

/// Fresnel rim term: 0 when the view direction is parallel to the normal,
/// approaching 1 toward grazing angles, with a power-4 falloff.
#[must_use]
pub fn fresnel(normal: Vec3, view_dir: Vec3) -> f32 {
    (1.0 - normal.dot(view_dir).max(0.0)).powf(4.0)
}

const LIGHT_1: Vec3 = Vec3::new(1.0, 2.0, 1.0);
const LIGHT_2: Vec3 = Vec3::new(-1.0, 1.0, -1.0);
const LIGHT_3: Vec3 = Vec3::new(0.0, -1.0, 1.0);

/// CPU reference of the fragment program.
///
/// Mirrors `FRAGMENT_SOURCE` term for term so shading properties are
/// testable without a GPU.
#[must_use]
pub fn shade(sample: &SurfaceSample, uniforms: &ColorShiftUniforms) -> Vec4 {
    let n = sample.normal.normalize();
    let view_dir = sample.view_position.normalize();

    let fresnel = fresnel(n, view_dir);

    let highlight_1 = n.dot(LIGHT_1.normalize()).max(0.0).powf(64.0) * 1.5;
    let highlight_2 = n.dot(LIGHT_2.normalize()).max(0.0).powf(64.0) * 1.2;
    let highlight_3 = n.dot(LIGHT_3.normalize()).max(0.0).powf(64.0) * 1.0;

    let env_reflection = n.dot(Vec3::Y).max(0.0) * 0.6;

    let reflection = sample.reflect_dir.normalize();
    let reflection_intensity = reflection.dot(n).max(0.0).powf(3.0);

    let white = Vec3::ONE;
    let mut color = uniforms.color.lerp(white, fresnel * 0.9);
    color = color.lerp(white, highlight_1 + highlight_2 + highlight_3);
    color += white * env_reflection;
    color += Vec3::new(0.9, 0.95, 1.0) * reflection_intensity * 0.6;

    let depth = sample.view_position.z * 0.15;
    color *= 1.0 - depth;

    let time_variation =
        (uniforms.time * 0.5 + sample.world_position.x + reflection.y).sin() * 0.15 + 0.85;
    color *= time_variation;

    color.extend(0.9)
}

/// Reflective color-shift material.
///
/// Fresnel rim light, three power-64 directional highlights, an upward
/// environment-reflection approximation, a reflection-vector highlight,
/// depth-based darkening and a slow time-driven brightness oscillation.
/// Renders transparent with a fixed 0.9 alpha.
#[derive(Debug)]
pub struct ColorShiftMaterial {
    pub uniforms: UniformBuffer<ColorShiftUniforms>,
    settings: MaterialSettings,
}

impl ColorShiftMaterial {
    #[must_use]
    pub fn new(color: Vec3) -> Self {
        let uniform_data = ColorShiftUniforms {
            color,
            ..Default::default()
        };
        Self {
            uniforms: UniformBuffer::new(uniform_data, "ColorShiftUniforms"),
            settings: MaterialSettings {
                transparent: true,
                ..Default::default()
            },
        }
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.uniforms.write().color = color;
    }

    pub fn set_time(&mut self, time: f32) {
        self.uniforms.write().time = time;
    }
}

impl Default for ColorShiftMaterial {
    fn default() -> Self {
        Self::new(Vec3::new(0.05, 0.2, 0.1))
    }
}

impl MaterialTrait for ColorShiftMaterial {
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
        ColorShiftUniforms::wgsl_struct_def("ColorShiftUniforms")
    }

    fn uniform_names(&self) -> Vec<&'static str> {
        ColorShiftUniforms::field_names()
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        self.uniforms.write().set_field(SHADER_NAME, name, value)
    }

    fn set_time(&mut self, time: f32) {
        ColorShiftMaterial::set_time(self, time);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
