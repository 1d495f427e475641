use std::any::Any;

use glam::{Vec2, Vec3, Vec4};

use crate::errors::Result;
use crate::resources::buffer::UniformBuffer;
use crate::resources::material::{MaterialSettings, MaterialTrait, reflect};
use crate::resources::uniforms::{UniformBlock, UniformValue, define_uniform_block};

define_uniform_block!(
    /// Uniform inputs of the glossy gradient material.
    struct GlossyGradientUniforms {
        pub color_a: Vec3 = Vec3::new(0.0, 0.439_215_7, 0.952_941_2),
        pub time: f32 = 0.0,
        pub color_b: Vec3 = Vec3::new(0.0, 0.650_980_4, 0.929_411_8),
        __padding: f32,
    }
);

pub const SHADER_NAME: &str = "glossy_gradient";

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
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let mv_position = frame.view_matrix * frame.model_matrix * vec4<f32>(in.position, 1.0);
    out.uv = in.uv;
    out.normal = normalize((frame.model_matrix * vec4<f32>(in.normal, 0.0)).xyz);
    out.view_position = -mv_position.xyz;
    out.clip_position = frame.view_projection * frame.model_matrix * vec4<f32>(in.position, 1.0);
    return out;
}
";

pub const FRAGMENT_SOURCE: &str = r"
struct GlossyGradientUniforms {
    color_a: vec3<f32>,
    time: f32,
    color_b: vec3<f32>,
};

@group(1) @binding(0) var<uniform> material: GlossyGradientUniforms;

@fragment
fn fs_main(
    @location(0) uv: vec2<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) view_position: vec3<f32>,
) -> @location(0) vec4<f32> {
    var color = mix(material.color_a, material.color_b, uv.y);

    let movement = sin(uv.y * 10.0 + material.time) * 0.1;
    color = mix(color, material.color_b, movement);

    let n = normalize(normal);
    let view_dir = normalize(view_position);
    let diffuse = max(dot(n, vec3<f32>(1.0)), 0.1);

    let reflect_dir = reflect(-vec3<f32>(1.0), n);
    let specular = pow(max(dot(view_dir, reflect_dir), 0.0), 32.0);

    let fresnel = pow(1.0 - max(dot(n, view_dir), 0.0), 3.0);

    let final_color = color * (diffuse + 0.3)
        + vec3<f32>(1.0) * specular * 0.5
        + vec3<f32>(1.0) * fresnel * 0.3;

    return vec4<f32>(final_color, 1.0);
}
";

/// CPU reference of the fragment program.
#[must_use]
pub fn shade(
    uv: Vec2,
    normal: Vec3,
    view_position: Vec3,
    uniforms: &GlossyGradientUniforms,
) -> Vec4 {
    let mut color = uniforms.color_a.lerp(uniforms.color_b, uv.y);

    let movement = (uv.y * 10.0 + uniforms.time).sin() * 0.1;
    color = color.lerp(uniforms.color_b, movement);

    let n = normal.normalize();
    let view_dir = view_position.normalize();
    let diffuse = n.dot(Vec3::ONE).max(0.1);

    let reflect_dir = reflect(-Vec3::ONE, n);
    let specular = view_dir.dot(reflect_dir).max(0.0).powf(32.0);

    let fresnel = (1.0 - n.dot(view_dir).max(0.0)).powf(3.0);

    let final_color =
        color * (diffuse + 0.3) + Vec3::ONE * specular * 0.5 + Vec3::ONE * fresnel * 0.3;

    final_color.extend(1.0)
}

/// Two-color vertical gradient with specular and fresnel rim lighting.
#[derive(Debug)]
pub struct GlossyGradientMaterial {
    pub uniforms: UniformBuffer<GlossyGradientUniforms>,
    settings: MaterialSettings,
}

impl GlossyGradientMaterial {
    #[must_use]
    pub fn new(color_a: Vec3, color_b: Vec3) -> Self {
        let uniform_data = GlossyGradientUniforms {
            color_a,
            color_b,
            ..Default::default()
        };
        Self {
            uniforms: UniformBuffer::new(uniform_data, "GlossyGradientUniforms"),
            settings: MaterialSettings::default(),
        }
    }

    pub fn set_colors(&mut self, color_a: Vec3, color_b: Vec3) {
        let mut uniforms = self.uniforms.write();
        uniforms.color_a = color_a;
        uniforms.color_b = color_b;
    }

    pub fn set_time(&mut self, time: f32) {
        self.uniforms.write().time = time;
    }
}

impl Default for GlossyGradientMaterial {
    fn default() -> Self {
        let defaults = GlossyGradientUniforms::default();
        Self::new(defaults.color_a, defaults.color_b)
    }
}

impl MaterialTrait for GlossyGradientMaterial {
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
        GlossyGradientUniforms::wgsl_struct_def("GlossyGradientUniforms")
    }

    fn uniform_names(&self) -> Vec<&'static str> {
        GlossyGradientUniforms::field_names()
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        self.uniforms.write().set_field(SHADER_NAME, name, value)
    }

    fn set_time(&mut self, time: f32) {
        GlossyGradientMaterial::set_time(self, time);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
