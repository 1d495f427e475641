use crate::errors::{Result, VitrineError};

/// Parameters for font-to-mesh extrusion.
///
/// Glyph tessellation itself is performed by an external collaborator (the
/// font loader); this struct is the typed configuration handed to it. The
/// resulting attribute streams come back through
/// [`crate::resources::Geometry::from_raw`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtrudedTextOptions {
    /// Glyph size in world units.
    pub size: f32,
    /// Extrusion depth along the local Z axis.
    pub depth: f32,
    /// Subdivision count for glyph outline curves.
    pub curve_segments: u32,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub bevel_segments: u32,
    /// Extra horizontal advance between glyphs, in world units.
    pub letter_spacing: f32,
}

impl Default for ExtrudedTextOptions {
    fn default() -> Self {
        Self {
            size: 1.5,
            depth: 0.4,
            curve_segments: 64,
            bevel_enabled: true,
            bevel_thickness: 0.06,
            bevel_size: 0.04,
            bevel_offset: 0.0,
            bevel_segments: 160,
            letter_spacing: 0.0,
        }
    }
}

impl ExtrudedTextOptions {
    pub fn validate(&self) -> Result<()> {
        if self.size <= 0.0 {
            return Err(VitrineError::InvalidGeometry(format!(
                "text size must be positive, got {}",
                self.size
            )));
        }
        if self.depth < 0.0 {
            return Err(VitrineError::InvalidGeometry(format!(
                "extrusion depth must be non-negative, got {}",
                self.depth
            )));
        }
        if self.curve_segments == 0 {
            return Err(VitrineError::InvalidGeometry(
                "curve segment count must be at least 1".into(),
            ));
        }
        if self.bevel_enabled && (self.bevel_thickness < 0.0 || self.bevel_size < 0.0) {
            return Err(VitrineError::InvalidGeometry(
                "bevel thickness and size must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
