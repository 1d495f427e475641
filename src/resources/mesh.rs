use bitflags::bitflags;

use crate::scene::{GeometryKey, MaterialKey};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct MeshFlags: u32 {
        const CAST_SHADOW    = 1 << 0;
        const RECEIVE_SHADOW = 1 << 1;
    }
}

/// A renderable pairing of geometry and material.
///
/// Both sides are keys into the owning [`crate::scene::Scene`]'s resource
/// pools; the mesh itself carries only render flags.
#[derive(Debug, Clone, Copy)]
pub struct Mesh {
    pub geometry: GeometryKey,
    pub material: MaterialKey,
    pub flags: MeshFlags,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: GeometryKey, material: MaterialKey) -> Self {
        Self {
            geometry,
            material,
            flags: MeshFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: MeshFlags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    #[must_use]
    pub fn casts_shadow(&self) -> bool {
        self.flags.contains(MeshFlags::CAST_SHADOW)
    }

    #[inline]
    #[must_use]
    pub fn receives_shadow(&self) -> bool {
        self.flags.contains(MeshFlags::RECEIVE_SHADOW)
    }
}
