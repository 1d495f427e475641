use glam::{Vec2, Vec3};
use uuid::Uuid;

use crate::errors::{Result, VitrineError};

/// Axis-aligned bounding box of a geometry's positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// CPU-side triangle mesh data.
///
/// Geometry holds the attribute streams the external renderer uploads:
/// positions, normals, UVs and a triangle index list. Instances are produced
/// by the primitive constructors in [`crate::resources::primitives`], or
/// ingested from an external tessellator (extruded text) via
/// [`Geometry::from_raw`].
#[derive(Debug, Clone)]
pub struct Geometry {
    pub uuid: Uuid,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    bounding_box: BoundingBox,
}

impl Geometry {
    /// Builds a geometry from attribute streams produced by an external
    /// tessellator.
    ///
    /// Validates that all attribute streams agree in length, the index list
    /// describes whole triangles, and every index is in range.
    pub fn from_raw(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        uvs: Vec<Vec2>,
        indices: Vec<u32>,
    ) -> Result<Self> {
        if positions.is_empty() {
            return Err(VitrineError::MalformedGeometry(
                "geometry has no vertices".into(),
            ));
        }
        if normals.len() != positions.len() || uvs.len() != positions.len() {
            return Err(VitrineError::MalformedGeometry(format!(
                "attribute length mismatch: {} positions, {} normals, {} uvs",
                positions.len(),
                normals.len(),
                uvs.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(VitrineError::MalformedGeometry(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        let vertex_count = positions.len() as u32;
        if let Some(&bad) = indices.iter().find(|&&i| i >= vertex_count) {
            return Err(VitrineError::MalformedGeometry(format!(
                "index {bad} out of range for {vertex_count} vertices"
            )));
        }

        Ok(Self::new_unchecked(positions, normals, uvs, indices))
    }

    /// Internal constructor for primitive generators whose output is
    /// consistent by construction.
    pub(crate) fn new_unchecked(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        uvs: Vec<Vec2>,
        indices: Vec<u32>,
    ) -> Self {
        let bounding_box = Self::compute_bounding_box(&positions);
        Self {
            uuid: Uuid::new_v4(),
            positions,
            normals,
            uvs,
            indices,
            bounding_box,
        }
    }

    fn compute_bounding_box(positions: &[Vec3]) -> BoundingBox {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in positions {
            min = min.min(*p);
            max = max.max(*p);
        }
        BoundingBox { min, max }
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    #[must_use]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }
}
