use crate::core::color::Color;
use crate::error::{LightingError, SceneError};
use crate::pipeline::shaders::phong::{DEFAULT_SHININESS, PhongShader};
use crate::scene::light::PointLight;
use crate::scene::material::ReflectanceConstants;
use nalgebra::Vector3;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lighting: LightingConfig,
    #[serde(default = "default_lights")]
    pub lights: Vec<LightConfig>,
    #[serde(default)]
    pub material: MaterialConfig,
    #[serde(default)]
    pub mesh: MeshConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lighting: LightingConfig::default(),
            lights: default_lights(),
            material: MaterialConfig::default(),
            mesh: MeshConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightingConfig {
    #[serde(default = "default_ambient")]
    pub ambient: Color,
    #[serde(default = "default_view")]
    pub view: [f32; 3],
    #[serde(default = "default_shininess")]
    pub shininess: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: default_ambient(),
            view: default_view(),
            shininess: default_shininess(),
        }
    }
}

fn default_ambient() -> Color {
    Color::gray(50.0)
}
fn default_view() -> [f32; 3] {
    [0.0, 0.0, 1.0]
}
fn default_shininess() -> f32 {
    DEFAULT_SHININESS
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightConfig {
    /// Vector from the surface towards the light.
    pub location: [f32; 3],
    pub color: Color,
}

fn default_lights() -> Vec<LightConfig> {
    vec![LightConfig {
        location: [0.5, 0.75, 1.0],
        color: Color::new(0.0, 255.0, 255.0),
    }]
}

/// Reflectance constants ka, kd, ks.
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialConfig {
    #[serde(default = "default_ka")]
    pub ambient: Color,
    #[serde(default = "default_kd")]
    pub diffuse: Color,
    #[serde(default = "default_ks")]
    pub specular: Color,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            ambient: default_ka(),
            diffuse: default_kd(),
            specular: default_ks(),
        }
    }
}

fn default_ka() -> Color {
    Color::gray(0.1)
}
fn default_kd() -> Color {
    Color::gray(0.5)
}
fn default_ks() -> Color {
    Color::gray(0.5)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeshConfig {
    /// OBJ file to shade. The built-in test triangle is used when absent.
    pub path: Option<String>,
    /// Skip degenerate faces instead of failing the whole mesh.
    #[serde(default)]
    pub skip_degenerate: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// PNG swatch sheet with one square per face; nothing is written when absent.
    pub path: Option<String>,
    #[serde(default = "default_swatch_size")]
    pub swatch_size: u32,
    #[serde(default = "default_columns")]
    pub columns: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            swatch_size: default_swatch_size(),
            columns: default_columns(),
        }
    }
}

fn default_swatch_size() -> u32 {
    16
}
fn default_columns() -> u32 {
    32
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    pub fn view_vector(&self) -> Vector3<f32> {
        Vector3::from(self.lighting.view)
    }

    pub fn reflectance(&self) -> ReflectanceConstants {
        ReflectanceConstants::new(
            self.material.ambient,
            self.material.diffuse,
            self.material.specular,
        )
    }

    pub fn point_lights(&self) -> Vec<PointLight> {
        self.lights
            .iter()
            .map(|l| PointLight::new(Vector3::from(l.location), l.color))
            .collect()
    }

    /// Builds a validated shader from the lighting, lights and material sections.
    pub fn build_shader(&self) -> Result<PhongShader, LightingError> {
        PhongShader::new(
            self.lighting.ambient,
            self.point_lights(),
            self.reflectance(),
            self.lighting.shininess,
        )
    }
}
