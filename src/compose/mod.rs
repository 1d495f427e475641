//! Scene composition module
//!
//! Declarative assembly of a complete showcase: one animated centerpiece
//! mesh, an optional grid backdrop, lights, a camera, and a gesture-gated
//! audio track. [`build_showcase`] validates a [`ShowcaseConfig`] and wires
//! everything into a [`Showcase`], whose [`Showcase::advance`] is the single
//! per-frame entry point the external render loop calls.

pub mod gate;

pub use gate::{AudioGate, AudioTrack, GateState, GestureEvent};

use std::f32::consts::FRAC_PI_2;

use glam::{Vec3, Vec4};

use crate::animation::{
    Bobber, FrameTiming, Playbook, ResolutionUniformDriver, Spinner, Sway, TimeUniformDriver,
};
use crate::errors::{Result, VitrineError};
use crate::resources::primitives::{
    ExtrudedTextOptions, PlaneOptions, TorusKnotOptions, create_plane, create_torus_knot,
};
use crate::resources::{Geometry, Material, Mesh, MeshFlags};
use crate::scene::{Camera, Light, NodeHandle, Scene, ShadowConfig};

// ============================================================================
// Configuration
// ============================================================================

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPlacement {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraPlacement {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 9.0),
            target: Vec3::ZERO,
            fov: 50.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Geometry source for the centerpiece mesh.
#[derive(Debug, Clone)]
pub enum CenterpieceGeometry {
    TorusKnot(TorusKnotOptions),
    /// Extruded text. Tessellation is done by the external font loader; the
    /// finished attribute streams arrive in `source`. Until they do, the
    /// centerpiece is skipped and the rest of the scene renders normally.
    ExtrudedText {
        text: String,
        options: ExtrudedTextOptions,
        source: Option<Geometry>,
    },
}

/// Which built-in material the centerpiece uses.
#[derive(Debug, Clone, PartialEq)]
pub enum CenterpieceMaterial {
    ColorShift { color: Vec3 },
    GlossyGradient { color_a: Vec3, color_b: Vec3 },
}

/// Per-frame motion applied to the centerpiece node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Additive rotation, radians per second per axis.
    Spin { rate: Vec3 },
    /// Elapsed-time-driven Y oscillation.
    Sway { speed: f32, amplitude: f32 },
    /// Vertical bob plus slow rotational drift.
    Bob {
        speed: f32,
        rotation_intensity: f32,
        float_intensity: f32,
    },
}

#[derive(Debug, Clone)]
pub struct CenterpieceConfig {
    pub geometry: CenterpieceGeometry,
    pub material: CenterpieceMaterial,
    pub motion: Vec<Motion>,
    pub position: Vec3,
    pub scale: Vec3,
}

impl CenterpieceConfig {
    #[must_use]
    pub fn new(geometry: CenterpieceGeometry, material: CenterpieceMaterial) -> Self {
        Self {
            geometry,
            material,
            motion: Vec::new(),
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    #[must_use]
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion.push(motion);
        self
    }
}

/// The grid-shaded ground plane under the centerpiece.
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropConfig {
    /// Side length of the square plane, world units
    pub size: f32,
    pub position: Vec3,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            size: 50.0,
            position: Vec3::new(0.0, -0.8, 0.0),
        }
    }
}

#[derive(Debug, Clone)]
pub enum LightConfig {
    Ambient {
        color: Vec3,
        intensity: f32,
    },
    /// Directional light aimed from `position` toward the origin.
    Directional {
        color: Vec3,
        intensity: f32,
        position: Vec3,
        shadows: Option<ShadowConfig>,
    },
    Point {
        color: Vec3,
        intensity: f32,
        position: Vec3,
        range: f32,
    },
    /// Spot light aimed from `position` toward the origin.
    Spot {
        color: Vec3,
        intensity: f32,
        position: Vec3,
        range: f32,
        /// Half-angle of the cone in radians
        angle: f32,
        penumbra: f32,
        shadows: Option<ShadowConfig>,
    },
}

/// Full declarative description of a showcase scene.
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    /// Clear color, RGBA. `None` leaves the surface transparent.
    pub background: Option<Vec4>,
    pub camera: CameraPlacement,
    /// Master switch for shadow flags on composed meshes.
    pub shadows: bool,
    pub centerpiece: Option<CenterpieceConfig>,
    pub backdrop: Option<BackdropConfig>,
    pub lights: Vec<LightConfig>,
    pub audio: Option<AudioTrack>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            background: Some(Vec4::new(0.0, 0.0, 0.0, 1.0)),
            camera: CameraPlacement::default(),
            shadows: true,
            centerpiece: None,
            backdrop: None,
            lights: vec![
                LightConfig::Ambient {
                    color: Vec3::ONE,
                    intensity: 0.5,
                },
                LightConfig::Directional {
                    color: Vec3::ONE,
                    intensity: 1.0,
                    position: Vec3::new(5.0, 5.0, 5.0),
                    shadows: Some(ShadowConfig {
                        map_size: 2048,
                        ..ShadowConfig::default()
                    }),
                },
            ],
            audio: None,
        }
    }
}

// ============================================================================
// Showcase
// ============================================================================

/// A composed scene plus the drivers and gates that run it.
pub struct Showcase {
    pub scene: Scene,
    playbook: Playbook,
    audio_gate: AudioGate,
    pub audio: Option<AudioTrack>,

    pub camera: NodeHandle,
    pub centerpiece: Option<NodeHandle>,
    pub backdrop: Option<NodeHandle>,
}

impl Showcase {
    /// Advances one frame: every animation driver in registration order,
    /// then one world-matrix pass. The renderer reads scene state only after
    /// this returns, so a frame never observes mixed timestamps.
    pub fn advance(&mut self, timing: FrameTiming) {
        self.playbook.advance(&mut self.scene, timing);
        self.scene.update_world_matrices();
    }

    /// Forwards a surface resize to the scene.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.scene.set_viewport(width, height);
    }

    /// Feeds a user gesture to the audio gate. Returns `true` exactly once,
    /// on the first qualifying gesture; that is the edge on which the
    /// external audio layer starts playback of [`Showcase::audio`].
    pub fn notify_gesture(&mut self, event: GestureEvent) -> bool {
        self.audio_gate.notify(event)
    }

    #[must_use]
    pub fn audio_ready(&self) -> bool {
        self.audio_gate.is_ready()
    }

    #[inline]
    #[must_use]
    pub fn audio_gate(&self) -> &AudioGate {
        &self.audio_gate
    }

    #[inline]
    #[must_use]
    pub fn playbook(&self) -> &Playbook {
        &self.playbook
    }

    #[inline]
    pub fn playbook_mut(&mut self) -> &mut Playbook {
        &mut self.playbook
    }

    /// Deregisters every driver. After this, frames still render but nothing
    /// moves; the scene itself stays intact for the renderer to tear down.
    pub fn teardown(&mut self) {
        self.playbook.clear();
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Assembles a [`Showcase`] from its declarative description.
///
/// Configuration errors (degenerate camera, invalid geometry parameters)
/// surface here, before the first frame. A missing extruded-text geometry
/// source is not an error: the centerpiece is skipped with a warning and the
/// caller rebuilds once the font loader delivers.
pub fn build_showcase(config: ShowcaseConfig) -> Result<Showcase> {
    validate_camera(&config.camera)?;

    let mut scene = Scene::new();
    scene.background = config.background;
    let mut playbook = Playbook::new();

    // ==== Camera ====
    let camera_component = Camera::new_perspective(
        config.camera.fov,
        scene.viewport().aspect(),
        config.camera.near,
        config.camera.far,
    );
    let camera = scene.add_camera(camera_component);
    if let Some(node) = scene.get_node_mut(camera) {
        node.transform.position = config.camera.position;
        node.transform.look_at(config.camera.target, Vec3::Y);
    }
    scene.active_camera = Some(camera);

    // ==== Lights ====
    for light in &config.lights {
        add_light(&mut scene, light);
    }

    // ==== Centerpiece ====
    let mut centerpiece = None;
    if let Some(cp) = config.centerpiece {
        centerpiece = add_centerpiece(&mut scene, &mut playbook, cp, config.shadows)?;
    }

    // ==== Backdrop ====
    let mut backdrop = None;
    if let Some(bd) = config.backdrop {
        backdrop = Some(add_backdrop(
            &mut scene,
            &mut playbook,
            &bd,
            config.shadows,
        )?);
    }

    scene.update_world_matrices();

    Ok(Showcase {
        scene,
        playbook,
        audio_gate: AudioGate::new(),
        audio: config.audio,
        camera,
        centerpiece,
        backdrop,
    })
}

fn validate_camera(placement: &CameraPlacement) -> Result<()> {
    if !(placement.fov > 0.0 && placement.fov < 180.0) {
        return Err(VitrineError::InvalidConfig(format!(
            "camera fov must be in (0, 180) degrees, got {}",
            placement.fov
        )));
    }
    if placement.near <= 0.0 || placement.far <= placement.near {
        return Err(VitrineError::InvalidConfig(format!(
            "camera planes must satisfy 0 < near < far, got near {} far {}",
            placement.near, placement.far
        )));
    }
    Ok(())
}

fn add_light(scene: &mut Scene, config: &LightConfig) {
    match config {
        LightConfig::Ambient { color, intensity } => {
            scene.add_light(Light::new_ambient(*color, *intensity));
        }
        LightConfig::Directional {
            color,
            intensity,
            position,
            shadows,
        } => {
            let mut light = Light::new_directional(*color, *intensity);
            if let Some(shadow) = shadows {
                light = light.with_shadows(shadow.clone());
            }
            let handle = scene.add_light(light);
            if let Some(node) = scene.get_node_mut(handle) {
                node.transform.position = *position;
                node.transform.look_at(Vec3::ZERO, Vec3::Y);
            }
        }
        LightConfig::Point {
            color,
            intensity,
            position,
            range,
        } => {
            let handle = scene.add_light(Light::new_point(*color, *intensity, *range));
            if let Some(node) = scene.get_node_mut(handle) {
                node.transform.position = *position;
            }
        }
        LightConfig::Spot {
            color,
            intensity,
            position,
            range,
            angle,
            penumbra,
            shadows,
        } => {
            let mut light = Light::new_spot(*color, *intensity, *range, *angle, *penumbra);
            if let Some(shadow) = shadows {
                light = light.with_shadows(shadow.clone());
            }
            let handle = scene.add_light(light);
            if let Some(node) = scene.get_node_mut(handle) {
                node.transform.position = *position;
                node.transform.look_at(Vec3::ZERO, Vec3::Y);
            }
        }
    }
}

fn add_centerpiece(
    scene: &mut Scene,
    playbook: &mut Playbook,
    config: CenterpieceConfig,
    shadows: bool,
) -> Result<Option<NodeHandle>> {
    let geometry = match config.geometry {
        CenterpieceGeometry::TorusKnot(options) => create_torus_knot(&options)?,
        CenterpieceGeometry::ExtrudedText {
            text,
            options,
            source,
        } => {
            options.validate()?;
            match source {
                Some(geometry) => geometry,
                None => {
                    // Degraded rendering: the rest of the scene still runs.
                    log::warn!("text geometry for {text:?} not available yet, skipping centerpiece");
                    return Ok(None);
                }
            }
        }
    };

    let material = match config.material {
        CenterpieceMaterial::ColorShift { color } => Material::new_color_shift(color),
        CenterpieceMaterial::GlossyGradient { color_a, color_b } => {
            Material::new_glossy_gradient(color_a, color_b)
        }
    };

    let geometry_key = scene.add_geometry(geometry);
    let material_key = scene.add_material(material);
    playbook.add(TimeUniformDriver::new(material_key));

    let mut flags = MeshFlags::empty();
    if shadows {
        flags = MeshFlags::CAST_SHADOW | MeshFlags::RECEIVE_SHADOW;
    }

    let handle = scene.add_mesh(Mesh::new(geometry_key, material_key).with_flags(flags));
    scene.set_name(handle, "centerpiece");
    if let Some(node) = scene.get_node_mut(handle) {
        node.transform.position = config.position;
        node.transform.scale = config.scale;
    }

    for motion in config.motion {
        match motion {
            Motion::Spin { rate } => playbook.add(Spinner::new(handle, rate)),
            Motion::Sway { speed, amplitude } => playbook.add(Sway::new(handle, speed, amplitude)),
            Motion::Bob {
                speed,
                rotation_intensity,
                float_intensity,
            } => playbook.add(
                Bobber::new(handle, speed, rotation_intensity, float_intensity)
                    .with_base_y(config.position.y),
            ),
        }
    }

    Ok(Some(handle))
}

fn add_backdrop(
    scene: &mut Scene,
    playbook: &mut Playbook,
    config: &BackdropConfig,
    shadows: bool,
) -> Result<NodeHandle> {
    let geometry = create_plane(&PlaneOptions {
        width: config.size,
        height: config.size,
        ..PlaneOptions::default()
    })?;

    let geometry_key = scene.add_geometry(geometry);
    let material_key = scene.add_material(Material::new_grid());
    playbook.add(TimeUniformDriver::new(material_key));
    playbook.add(ResolutionUniformDriver::new(material_key));

    let mut flags = MeshFlags::empty();
    if shadows {
        flags = MeshFlags::RECEIVE_SHADOW;
    }

    let handle = scene.add_mesh(Mesh::new(geometry_key, material_key).with_flags(flags));
    scene.set_name(handle, "backdrop");
    if let Some(node) = scene.get_node_mut(handle) {
        node.transform.position = config.position;
        // Lay the XY plane flat, facing up
        node.transform.rotation.x = -FRAC_PI_2;
    }

    Ok(handle)
}
