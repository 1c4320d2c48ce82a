use crate::core::color::Color;
use crate::core::math::vector::{dot, normalize, reflect};
use crate::error::LightingError;
use crate::scene::light::PointLight;
use crate::scene::material::ReflectanceConstants;
use nalgebra::Vector3;

/// Specular exponent used when none is configured.
pub const DEFAULT_SHININESS: f32 = 4.0;

/// Rejects a negative or non-finite specular exponent.
pub fn validate_shininess(shininess: f32) -> Result<f32, LightingError> {
    if shininess.is_finite() && shininess >= 0.0 {
        Ok(shininess)
    } else {
        Err(LightingError::InvalidShininess { value: shininess })
    }
}

/// Ambient contribution: `ambient_light[c] * ka[c]`.
pub fn ambient_term(ambient_light: &Color, ka: &Color) -> Color {
    ambient_light.component_mul(ka)
}

/// Diffuse (Lambert) contribution of a single light.
///
/// `normal` must be unit length. The light location is normalized here, and
/// the same `cos(theta) = max(0, N·L)` scales all three channels.
pub fn diffuse_term(
    light: &PointLight,
    kd: &Color,
    normal: &Vector3<f32>,
) -> Result<Color, LightingError> {
    let light_dir = light.direction()?;
    let cos_theta = dot(normal, &light_dir).max(0.0);
    Ok(light.color.component_mul(kd) * cos_theta)
}

/// Specular (Phong) contribution of a single light.
///
/// `normal` must be unit length; `view` is normalized here. The highlight
/// peaks when the view lines up with the mirrored light direction and falls
/// off as `cos(alpha)^shininess`, so larger exponents give tighter highlights.
pub fn specular_term(
    light: &PointLight,
    ks: &Color,
    view: &Vector3<f32>,
    normal: &Vector3<f32>,
    shininess: f32,
) -> Result<Color, LightingError> {
    validate_shininess(shininess)?;
    let light_dir = light.direction()?;
    let view_dir = normalize(view)?;

    let reflect_dir = reflect(normal, &light_dir);
    let cos_alpha = dot(&reflect_dir, &view_dir).max(0.0);
    let spec = cos_alpha.powf(shininess);

    Ok(ks.component_mul(&light.color) * spec)
}

/// Full three-term lighting for one surface sample.
///
/// Validates every color input and the exponent, normalizes copies of `normal` and `view`,
/// adds the ambient term once plus diffuse and specular for every light, and
/// caps the sum at 255 per channel.
pub fn evaluate(
    normal: &Vector3<f32>,
    view: &Vector3<f32>,
    ambient_light: &Color,
    lights: &[PointLight],
    material: &ReflectanceConstants,
    shininess: f32,
) -> Result<Color, LightingError> {
    ambient_light.validate_non_negative("ambient light")?;
    material.validate()?;
    validate_shininess(shininess)?;

    let normal = normalize(normal)?;
    let view = normalize(view)?;

    // Ambient
    let mut result = ambient_term(ambient_light, &material.ambient);

    for light in lights {
        light.color.validate_non_negative("light color")?;

        // Diffuse
        result += diffuse_term(light, &material.diffuse, &normal)?;

        // Specular
        result += specular_term(light, &material.specular, &view, &normal, shininess)?;
    }

    Ok(result.clamped())
}

/// Phong lighting state for one surface: lights, reflectance and shininess.
///
/// Inputs are validated once in [`PhongShader::new`]; the shader itself holds
/// no per-evaluation state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct PhongShader {
    pub ambient_light: Color,
    pub lights: Vec<PointLight>,
    pub material: ReflectanceConstants,
    pub shininess: f32,
}

impl PhongShader {
    pub fn new(
        ambient_light: Color,
        lights: Vec<PointLight>,
        material: ReflectanceConstants,
        shininess: f32,
    ) -> Result<Self, LightingError> {
        ambient_light.validate_non_negative("ambient light")?;
        material.validate()?;
        validate_shininess(shininess)?;
        for light in &lights {
            light.validate()?;
        }

        Ok(Self {
            ambient_light,
            lights,
            material,
            shininess,
        })
    }

    /// Lights one sample with the given surface normal and view vector.
    pub fn shade(
        &self,
        normal: &Vector3<f32>,
        view: &Vector3<f32>,
    ) -> Result<Color, LightingError> {
        evaluate(
            normal,
            view,
            &self.ambient_light,
            &self.lights,
            &self.material,
            self.shininess,
        )
    }
}

impl Default for PhongShader {
    fn default() -> Self {
        Self {
            ambient_light: Color::gray(50.0),
            lights: vec![PointLight::new(
                Vector3::new(0.5, 0.75, 1.0),
                Color::new(0.0, 255.0, 255.0),
            )],
            material: ReflectanceConstants::default(),
            shininess: DEFAULT_SHININESS,
        }
    }
}
