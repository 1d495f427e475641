//! Frame animation module
//!
//! Advances time-dependent scene state once per rendered frame:
//! - [`Animate`]: the driver trait ([`FrameTiming`] in, in-place mutation out)
//! - [`Playbook`]: ordered driver list run by the frame callback
//! - [`drivers`]: the concrete drivers (spin, sway, bob, time/resolution
//!   uniforms)
//!
//! All drivers are synchronous, bounded-time and infallible: a driver whose
//! target node or material has been removed is a no-op for that frame. The
//! renderer reads scene state only after [`Playbook::advance`] returns, so
//! every frame observes one consistent timestamp.

pub mod drivers;

pub use drivers::{Bobber, ResolutionUniformDriver, Spinner, Sway, TimeUniformDriver};

use crate::scene::Scene;

/// Per-frame timing snapshot handed to every driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Seconds since the scene's timer started. Monotonic; resets to zero
    /// only when a scene is remounted with a fresh timer.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl FrameTiming {
    #[must_use]
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }
}

/// A per-frame animation driver.
///
/// Implementations mutate their target state in place and never fail;
/// missing targets are skipped for the frame.
pub trait Animate {
    fn advance(&mut self, scene: &mut Scene, timing: FrameTiming);
}

/// Adapter for closure drivers registered through [`Playbook::add_fn`].
struct FnDriver<F>(F);

impl<F> Animate for FnDriver<F>
where
    F: FnMut(&mut Scene, FrameTiming),
{
    fn advance(&mut self, scene: &mut Scene, timing: FrameTiming) {
        (self.0)(scene, timing);
    }
}

/// Ordered collection of animation drivers for one scene.
///
/// The external render loop calls [`Playbook::advance`] exactly once per
/// frame, before rendering. Dropping the playbook (or [`Playbook::clear`])
/// deregisters every driver, which is the whole teardown discipline: no
/// driver can touch the scene once it is gone from here.
#[derive(Default)]
pub struct Playbook {
    drivers: Vec<Box<dyn Animate>>,
}

impl Playbook {
    #[must_use]
    pub fn new() -> Self {
        Self {
            drivers: Vec::new(),
        }
    }

    pub fn add(&mut self, driver: impl Animate + 'static) {
        self.drivers.push(Box::new(driver));
    }

    /// Registers a closure as a driver.
    pub fn add_fn<F>(&mut self, f: F)
    where
        F: FnMut(&mut Scene, FrameTiming) + 'static,
    {
        self.drivers.push(Box::new(FnDriver(f)));
    }

    /// Runs every driver in registration order.
    pub fn advance(&mut self, scene: &mut Scene, timing: FrameTiming) {
        for driver in &mut self.drivers {
            driver.advance(scene, timing);
        }
    }

    /// Deregisters all drivers.
    pub fn clear(&mut self) {
        self.drivers.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
