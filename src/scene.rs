pub mod light;
pub mod material;
pub mod mesh;
