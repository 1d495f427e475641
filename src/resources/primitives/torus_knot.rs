use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::errors::{Result, VitrineError};
use crate::resources::geometry::Geometry;

#[derive(Debug, Clone, PartialEq)]
pub struct TorusKnotOptions {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    /// Times the knot winds around its axis of rotational symmetry.
    pub p: u32,
    /// Times the knot winds around the interior of the torus.
    pub q: u32,
}

impl Default for TorusKnotOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            tube: 0.4,
            tubular_segments: 256,
            radial_segments: 64,
            p: 2,
            q: 3,
        }
    }
}

/// A (p, q) torus knot swept with a circular tube cross-section.
pub fn create_torus_knot(options: &TorusKnotOptions) -> Result<Geometry> {
    if options.radius <= 0.0 || options.tube <= 0.0 {
        return Err(VitrineError::InvalidGeometry(format!(
            "torus knot radii must be positive: radius {}, tube {}",
            options.radius, options.tube
        )));
    }
    if options.tubular_segments < 3 || options.radial_segments < 3 {
        return Err(VitrineError::InvalidGeometry(
            "torus knot segment counts must be at least 3".into(),
        ));
    }
    if options.p == 0 || options.q == 0 {
        return Err(VitrineError::InvalidGeometry(
            "torus knot winding numbers must be non-zero".into(),
        ));
    }

    let tubular = options.tubular_segments;
    let radial = options.radial_segments;
    let p = options.p as f32;
    let q = options.q as f32;

    let vertex_count = ((tubular + 1) * (radial + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity((tubular * radial * 6) as usize);

    // Point on the knot's center curve for parameter u.
    let curve_point = |u: f32| -> Vec3 {
        let qu_over_p = q / p * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            options.radius * (2.0 + cs) * 0.5 * u.cos(),
            options.radius * (2.0 + cs) * 0.5 * u.sin(),
            options.radius * qu_over_p.sin() * 0.5,
        )
    };

    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p * TAU;

        // Frenet-like frame from two nearby curve samples
        let p1 = curve_point(u);
        let p2 = curve_point(u + 0.01);

        let tangent = p2 - p1;
        let mut normal = p1 + p2;
        let binormal = tangent.cross(normal).normalize();
        normal = binormal.cross(tangent).normalize();

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -options.tube * v.cos();
            let cy = options.tube * v.sin();

            let position = p1 + cx * normal + cy * binormal;
            positions.push(position);
            normals.push((position - p1).normalize());
            uvs.push(Vec2::new(
                i as f32 / tubular as f32,
                j as f32 / radial as f32,
            ));
        }
    }

    for j in 1..=tubular {
        for i in 1..=radial {
            let a = (radial + 1) * (j - 1) + (i - 1);
            let b = (radial + 1) * j + (i - 1);
            let c = (radial + 1) * j + i;
            let d = (radial + 1) * (j - 1) + i;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    Ok(Geometry::new_unchecked(positions, normals, uvs, indices))
}
