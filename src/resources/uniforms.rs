use glam::{Vec2, Vec3, Vec4};
use bytemuck::{Pod, Zeroable};
use std::borrow::Cow;

use crate::errors::Result;

// ============================================================================
// 1. Type mapping trait (Rust type -> WGSL type string)
// ============================================================================
pub trait WgslType {
    fn wgsl_type_name() -> Cow<'static, str>;
}

impl WgslType for f32 { fn wgsl_type_name() -> Cow<'static, str> { "f32".into() } }
impl WgslType for i32 { fn wgsl_type_name() -> Cow<'static, str> { "i32".into() } }
impl WgslType for u32 { fn wgsl_type_name() -> Cow<'static, str> { "u32".into() } }
impl WgslType for Vec2 { fn wgsl_type_name() -> Cow<'static, str> { "vec2<f32>".into() } }
impl WgslType for Vec3 { fn wgsl_type_name() -> Cow<'static, str> { "vec3<f32>".into() } }
impl WgslType for Vec4 { fn wgsl_type_name() -> Cow<'static, str> { "vec4<f32>".into() } }

/// Array wrapper for uniform buffer padding and fixed-size fields.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformArray<T: Pod, const N: usize>(pub [T; N]);

unsafe impl<T: Pod, const N: usize> Zeroable for UniformArray<T, N> {}
unsafe impl<T: Pod, const N: usize> Pod for UniformArray<T, N> {}

impl<T: WgslType + Pod, const N: usize> WgslType for UniformArray<T, N> {
    fn wgsl_type_name() -> Cow<'static, str> {
        format!("array<{}, {}>", T::wgsl_type_name(), N).into()
    }
}

impl<T: Default + Pod + Copy, const N: usize> Default for UniformArray<T, N> {
    fn default() -> Self {
        Self([T::default(); N])
    }
}

impl<T: Pod, const N: usize> UniformArray<T, N> {
    pub fn new(arr: [T; N]) -> Self {
        Self(arr)
    }
}

// ============================================================================
// 2. Dynamic uniform values (by-name configuration path)
// ============================================================================

/// A dynamically typed uniform value.
///
/// Uniform values in this crate are always floating-point scalars or
/// float vectors; integer and boolean uniforms are not required by any
/// material here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
}

impl UniformValue {
    #[must_use]
    pub fn wgsl_type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "f32",
            Self::Vec2(_) => "vec2<f32>",
            Self::Vec3(_) => "vec3<f32>",
            Self::Vec4(_) => "vec4<f32>",
        }
    }
}

impl From<f32> for UniformValue { fn from(v: f32) -> Self { Self::Float(v) } }
impl From<Vec2> for UniformValue { fn from(v: Vec2) -> Self { Self::Vec2(v) } }
impl From<Vec3> for UniformValue { fn from(v: Vec3) -> Self { Self::Vec3(v) } }
impl From<Vec4> for UniformValue { fn from(v: Vec4) -> Self { Self::Vec4(v) } }

/// Conversion from a [`UniformValue`] into a concrete field type.
///
/// Returns `None` on a type mismatch; padding arrays are never settable.
pub trait UniformField: Sized {
    fn from_value(value: UniformValue) -> Option<Self>;
}

impl UniformField for f32 {
    fn from_value(value: UniformValue) -> Option<Self> {
        match value { UniformValue::Float(v) => Some(v), _ => None }
    }
}

impl UniformField for Vec2 {
    fn from_value(value: UniformValue) -> Option<Self> {
        match value { UniformValue::Vec2(v) => Some(v), _ => None }
    }
}

impl UniformField for Vec3 {
    fn from_value(value: UniformValue) -> Option<Self> {
        match value { UniformValue::Vec3(v) => Some(v), _ => None }
    }
}

impl UniformField for Vec4 {
    fn from_value(value: UniformValue) -> Option<Self> {
        match value { UniformValue::Vec4(v) => Some(v), _ => None }
    }
}

impl<T: Pod, const N: usize> UniformField for UniformArray<T, N> {
    fn from_value(_value: UniformValue) -> Option<Self> {
        None
    }
}

// ============================================================================
// 3. Uniform block trait
// ============================================================================

/// A `#[repr(C)]` Pod struct usable as a material uniform block.
///
/// Implemented by the [`define_uniform_block!`] macro, which generates from a
/// single field list: the Rust struct, its `Default` values, the WGSL struct
/// definition, the declared uniform name set, and the dynamic by-name setter.
/// Fields whose name starts with `__` are padding and excluded from the
/// declared set.
pub trait UniformBlock: Pod + Zeroable {
    /// WGSL struct definition under the given name.
    fn wgsl_struct_def(struct_name: &str) -> String;

    /// Declared (settable) uniform field names, padding excluded.
    fn field_names() -> Vec<&'static str>;

    /// Sets a field by name. Unknown names and mismatched value types are
    /// configuration errors surfaced synchronously.
    fn set_field(&mut self, shader: &'static str, name: &str, value: UniformValue) -> Result<()>;
}

// ============================================================================
// 4. Macro (single source of truth per material)
// ============================================================================

macro_rules! define_uniform_block {
    (
        $(#[$meta:meta])* struct $name:ident {
            $(
                $vis:vis $field_name:ident : $field_type:ty $(= $default_val:expr)?
            ),* $(,)?
        }
    ) => {
        #[repr(C)]
        #[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
        $(#[$meta])*
        pub struct $name {
            $( $vis $field_name : $field_type, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field_name: define_uniform_block!(@val_or_default $field_type $(, $default_val)?), )*
                }
            }
        }

        impl $crate::resources::uniforms::UniformBlock for $name {
            fn wgsl_struct_def(struct_name: &str) -> String {
                let mut code = format!("struct {struct_name} {{\n");
                $(
                    if !stringify!($field_name).starts_with("__") {
                        code.push_str(&format!(
                            "    {}: {},\n",
                            stringify!($field_name),
                            <$field_type as $crate::resources::uniforms::WgslType>::wgsl_type_name()
                        ));
                    }
                )*
                code.push_str("};\n");
                code
            }

            fn field_names() -> Vec<&'static str> {
                [ $( stringify!($field_name) ),* ]
                    .into_iter()
                    .filter(|n| !n.starts_with("__"))
                    .collect()
            }

            fn set_field(
                &mut self,
                shader: &'static str,
                name: &str,
                value: $crate::resources::uniforms::UniformValue,
            ) -> $crate::errors::Result<()> {
                $(
                    if !name.starts_with("__") && name == stringify!($field_name) {
                        self.$field_name =
                            <$field_type as $crate::resources::uniforms::UniformField>::from_value(value)
                                .ok_or_else(|| $crate::errors::VitrineError::UniformTypeMismatch {
                                    name: name.to_string(),
                                    expected: <$field_type as $crate::resources::uniforms::WgslType>::wgsl_type_name()
                                        .into_owned(),
                                    found: value.wgsl_type_name(),
                                })?;
                        return Ok(());
                    }
                )*
                Err($crate::errors::VitrineError::UnknownUniform {
                    material: shader,
                    name: name.to_string(),
                })
            }
        }
    };
    (@val_or_default $type:ty, $val:expr) => { $val };
    (@val_or_default $type:ty) => { <$type as Default>::default() };
}

pub(crate) use define_uniform_block;
