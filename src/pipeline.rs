pub mod flat;
pub mod shaders;
