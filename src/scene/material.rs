use crate::core::color::Color;
use crate::error::LightingError;

/// Per-surface reflectance constants for the three light categories.
///
/// Each triple is per channel and typically in [0, 1]; no upper bound is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectanceConstants {
    /// ka
    pub ambient: Color,
    /// kd
    pub diffuse: Color,
    /// ks
    pub specular: Color,
}

impl ReflectanceConstants {
    pub fn new(ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// Rejects negative (or NaN) channels in any of the three triples.
    pub fn validate(&self) -> Result<(), LightingError> {
        self.ambient.validate_non_negative("ambient reflectance (ka)")?;
        self.diffuse.validate_non_negative("diffuse reflectance (kd)")?;
        self.specular.validate_non_negative("specular reflectance (ks)")?;
        Ok(())
    }
}

impl Default for ReflectanceConstants {
    fn default() -> Self {
        Self {
            ambient: Color::gray(0.1),
            diffuse: Color::gray(0.5),
            specular: Color::gray(0.5),
        }
    }
}
