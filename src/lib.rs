pub mod app;
pub mod core;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod scene;

pub use crate::core::color::Color;
pub use crate::error::{LightingError, SceneError};
pub use crate::pipeline::shaders::phong::{PhongShader, evaluate};
pub use crate::scene::light::PointLight;
pub use crate::scene::material::ReflectanceConstants;
pub use crate::scene::mesh::Mesh;
