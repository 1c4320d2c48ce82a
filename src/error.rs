/// Errors raised while evaluating lighting for a face or vertex.
///
/// Every variant means the scene data handed to the lighting core is
/// malformed. None of them are transient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LightingError {
    /// A vector that must be normalized has (near) zero length or a non-finite component.
    #[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
    DegenerateVector { x: f32, y: f32, z: f32 },

    /// The three vertices starting at `start` are collinear or repeated.
    #[error("face starting at vertex {start} has zero area")]
    DegenerateFace { start: usize },

    /// Fewer than three vertices remain in the mesh at `start`.
    #[error("face starting at vertex {start} exceeds mesh of {len} vertices")]
    IndexOutOfRange { start: usize, len: usize },

    /// A light color or reflectance constant channel is negative or not finite.
    #[error("invalid {label}: {channel} channel is {value}")]
    InvalidReflectance {
        label: &'static str,
        channel: &'static str,
        value: f32,
    },

    /// The specular exponent is negative or not finite.
    #[error("invalid shininess exponent {value}")]
    InvalidShininess { value: f32 },
}

/// Errors raised while loading scene inputs or writing results.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// I/O error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene configuration is not valid TOML for this schema.
    #[error("Failed to parse TOML: {0}")]
    Config(#[from] toml::de::Error),

    /// OBJ mesh could not be loaded.
    #[error("Failed to load OBJ '{path}': {message}")]
    Obj { path: String, message: String },

    /// Swatch image could not be encoded or saved.
    #[error("Failed to save image '{path}': {message}")]
    Image { path: String, message: String },

    #[error(transparent)]
    Lighting(#[from] LightingError),
}
