use std::ops::{Deref, DerefMut};

use crate::resources::uniforms::UniformBlock;

/// CPU-side uniform storage with a version counter.
///
/// The external renderer compares [`UniformBuffer::version`] against the
/// last uploaded version to decide whether a re-upload is needed. Any write
/// access through [`UniformBuffer::write`] bumps the version when the guard
/// drops, so a frame's mutations publish as one consistent step.
#[derive(Debug)]
pub struct UniformBuffer<T: UniformBlock> {
    data: T,
    version: u64,
    label: &'static str,
}

impl<T: UniformBlock> UniformBuffer<T> {
    pub fn new(data: T, label: &'static str) -> Self {
        Self {
            data,
            version: 0,
            label,
        }
    }

    #[inline]
    #[must_use]
    pub fn read(&self) -> &T {
        &self.data
    }

    /// Write access; bumps the version counter on drop.
    pub fn write(&mut self) -> UniformGuard<'_, T> {
        UniformGuard {
            data: &mut self.data,
            version: &mut self.version,
        }
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Raw bytes for GPU upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.data)
    }
}

pub struct UniformGuard<'a, T: UniformBlock> {
    data: &'a mut T,
    version: &'a mut u64,
}

impl<T: UniformBlock> Deref for UniformGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        self.data
    }
}

impl<T: UniformBlock> DerefMut for UniformGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.data
    }
}

impl<T: UniformBlock> Drop for UniformGuard<'_, T> {
    fn drop(&mut self) {
        *self.version = self.version.wrapping_add(1);
    }
}
