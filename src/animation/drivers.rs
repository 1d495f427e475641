use glam::Vec3;

use crate::animation::{Animate, FrameTiming};
use crate::scene::{MaterialKey, NodeHandle, Scene};

/// Accumulates per-axis angular velocity into a node's Euler rotation.
///
/// `rotation += delta * rate`, unbounded: the angles are consumed only as
/// angles, so no wraparound is applied. Accumulation is purely additive,
/// which makes the final angle independent of how time is chunked into
/// frames.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    pub node: NodeHandle,
    /// Angular velocity per axis, radians per second
    pub rate: Vec3,
}

impl Spinner {
    #[must_use]
    pub fn new(node: NodeHandle, rate: Vec3) -> Self {
        Self { node, rate }
    }
}

impl Animate for Spinner {
    fn advance(&mut self, scene: &mut Scene, timing: FrameTiming) {
        if let Some(node) = scene.get_node_mut(self.node) {
            node.transform.rotation += self.rate * timing.delta;
        }
    }
}

/// Oscillates a node's Y rotation: `rotation.y = sin(elapsed * speed) *
/// amplitude`.
///
/// Driven by absolute elapsed time, so it overwrites rather than
/// accumulates.
#[derive(Debug, Clone, Copy)]
pub struct Sway {
    pub node: NodeHandle,
    pub speed: f32,
    /// Peak deflection in radians
    pub amplitude: f32,
}

impl Sway {
    #[must_use]
    pub fn new(node: NodeHandle, speed: f32, amplitude: f32) -> Self {
        Self {
            node,
            speed,
            amplitude,
        }
    }
}

impl Animate for Sway {
    fn advance(&mut self, scene: &mut Scene, timing: FrameTiming) {
        if let Some(node) = scene.get_node_mut(self.node) {
            node.transform.rotation.y = (timing.elapsed * self.speed).sin() * self.amplitude;
        }
    }
}

/// Gentle floating motion: vertical bob plus a slow rotational drift.
#[derive(Debug, Clone, Copy)]
pub struct Bobber {
    pub node: NodeHandle,
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Rest height the bob oscillates around
    pub base_y: f32,
}

impl Bobber {
    #[must_use]
    pub fn new(node: NodeHandle, speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            node,
            speed,
            rotation_intensity,
            float_intensity,
            base_y: 0.0,
        }
    }

    #[must_use]
    pub fn with_base_y(mut self, base_y: f32) -> Self {
        self.base_y = base_y;
        self
    }
}

impl Animate for Bobber {
    fn advance(&mut self, scene: &mut Scene, timing: FrameTiming) {
        let Some(node) = scene.get_node_mut(self.node) else {
            return;
        };
        let t = timing.elapsed * self.speed;
        node.transform.position.y = self.base_y + t.sin() * 0.1 * self.float_intensity;
        node.transform.rotation.x = (t * 0.5).cos() * 0.1 * self.rotation_intensity;
        node.transform.rotation.z = (t * 0.7).sin() * 0.05 * self.rotation_intensity;
    }
}

/// Writes the absolute elapsed time into a material's time uniform.
///
/// Direct assignment, not accumulation: re-reading without an intervening
/// advance yields the same value, and a skipped frame can never leave stale
/// state more than one assignment behind.
#[derive(Debug, Clone, Copy)]
pub struct TimeUniformDriver {
    pub material: MaterialKey,
}

impl TimeUniformDriver {
    #[must_use]
    pub fn new(material: MaterialKey) -> Self {
        Self { material }
    }
}

impl Animate for TimeUniformDriver {
    fn advance(&mut self, scene: &mut Scene, timing: FrameTiming) {
        if let Some(material) = scene.materials.get_mut(self.material) {
            material.set_time(timing.elapsed);
        }
    }
}

/// Writes the current viewport pixel size into a material's resolution
/// uniform.
///
/// Re-reads the viewport every frame, so resizes are picked up without an
/// explicit resize event.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionUniformDriver {
    pub material: MaterialKey,
}

impl ResolutionUniformDriver {
    #[must_use]
    pub fn new(material: MaterialKey) -> Self {
        Self { material }
    }
}

impl Animate for ResolutionUniformDriver {
    fn advance(&mut self, scene: &mut Scene, _timing: FrameTiming) {
        let resolution = scene.viewport().as_vec2();
        if let Some(material) = scene.materials.get_mut(self.material) {
            material.set_resolution(resolution);
        }
    }
}
