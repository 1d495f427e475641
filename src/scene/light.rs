use glam::Vec3;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    pub bias: f32,
    pub normal_bias: f32,
    pub map_size: u32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            bias: -0.001,
            normal_bias: 0.02,
            map_size: 1024,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PointLight {
    pub range: f32,
}

#[derive(Debug, Clone)]
pub struct SpotLight {
    pub range: f32,
    /// Half-angle of the cone in radians
    pub angle: f32,
    /// Softness of the cone edge, 0 (hard) to 1
    pub penumbra: f32,
}

/// High-level abstraction: light component in the scene.
#[derive(Debug, Clone)]
pub enum LightKind {
    Ambient,
    Directional,
    Point(PointLight),
    Spot(SpotLight),
}

#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,

    pub cast_shadows: bool,
    pub shadow: ShadowConfig,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Ambient,
            cast_shadows: false,
            shadow: ShadowConfig::default(),
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Directional,
            cast_shadows: false,
            shadow: ShadowConfig::default(),
        }
    }

    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Point(PointLight { range }),
            cast_shadows: false,
            shadow: ShadowConfig::default(),
        }
    }

    #[must_use]
    pub fn new_spot(color: Vec3, intensity: f32, range: f32, angle: f32, penumbra: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Spot(SpotLight {
                range,
                angle,
                penumbra,
            }),
            cast_shadows: false,
            shadow: ShadowConfig::default(),
        }
    }

    #[must_use]
    pub fn with_shadows(mut self, config: ShadowConfig) -> Self {
        self.cast_shadows = true;
        self.shadow = config;
        self
    }
}
