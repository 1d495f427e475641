use glam::{Affine3A, EulerRot, Mat3, Mat4, Quat, Vec3};

/// Transform component.
///
/// Position, rotation and scale for a scene node, with matrix caching and
/// shadow-state dirty checking.
///
/// Rotation is stored as XYZ Euler angles in radians rather than a
/// quaternion: animation drivers accumulate per-axis angular velocity
/// (`rotation.x += delta * rate`) without bound, and the angles are only
/// ever consumed as angles. No wraparound is applied.
#[derive(Debug, Clone)]
pub struct Transform {
    // === Public properties ===
    pub position: Vec3,
    /// Euler rotation (XYZ order, radians, unbounded accumulation)
    pub rotation: Vec3,
    pub scale: Vec3,

    // === Matrix cache (internal) ===
    pub(crate) local_matrix: Affine3A,
    pub(crate) world_matrix: Affine3A,

    // === Shadow state for dirty checking (private) ===
    last_position: Vec3,
    last_rotation: Vec3,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,
            world_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Vec3::ZERO,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Checks and updates the local matrix.
    ///
    /// Returns whether anything changed since the last call.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.local_matrix = Affine3A::from_scale_rotation_translation(
                self.scale,
                self.rotation_quat(),
                self.position,
            );

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    /// Current rotation as a quaternion (XYZ Euler order).
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// World matrix, for CPU-side logic.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    /// World matrix as `Mat4`, for GPU upload.
    #[inline]
    #[must_use]
    pub fn world_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.world_matrix)
    }

    /// Written by the scene after hierarchy propagation.
    pub(crate) fn set_world_matrix(&mut self, mat: Affine3A) {
        self.world_matrix = mat;
    }

    /// Orients the transform to face `target`.
    ///
    /// `target` and `up` are in the parent's coordinate space. Degenerate
    /// configurations (forward parallel to `up`) leave the rotation as is.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = (target - self.position).normalize();

        if forward.cross(up).length_squared() < 1e-4 {
            return;
        }

        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward).normalize();

        let rot_mat = Mat3::from_cols(right, new_up, -forward);
        let (x, y, z) = Quat::from_mat3(&rot_mat).to_euler(EulerRot::XYZ);
        self.rotation = Vec3::new(x, y, z);
    }

    /// Forces a matrix rebuild on the next update.
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
