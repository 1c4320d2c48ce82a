use crate::core::color::Color;
use crate::core::math::vector::normalize;
use crate::error::LightingError;
use nalgebra::Vector3;

/// A point light source.
///
/// `location` is the vector from the surface towards the light. It does not
/// need to be unit length; the lighting terms normalize a copy of it.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub location: Vector3<f32>,
    pub color: Color,
}

impl PointLight {
    pub fn new(location: Vector3<f32>, color: Color) -> Self {
        Self { location, color }
    }

    /// Unit vector pointing towards the light.
    pub fn direction(&self) -> Result<Vector3<f32>, LightingError> {
        normalize(&self.location)
    }

    /// Checks that the light color is non-negative and its location can be normalized.
    pub fn validate(&self) -> Result<(), LightingError> {
        self.color.validate_non_negative("light color")?;
        self.direction()?;
        Ok(())
    }
}
