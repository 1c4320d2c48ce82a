use crate::core::math::vector::surface_normal;
use crate::error::LightingError;
use nalgebra::{Point3, Vector3};

/// Triangle soup: every three consecutive vertices form one face.
///
/// Vertices are expected to already be in the space lighting is evaluated in,
/// with counter-clockwise winding for front faces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<f32>>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point3<f32>>) -> Self {
        Self { vertices }
    }

    /// Builds a mesh from indexed geometry by unrolling the index list.
    ///
    /// Returns `IndexOutOfRange` if an index points past `positions`.
    pub fn from_indexed(positions: &[Point3<f32>], indices: &[u32]) -> Result<Self, LightingError> {
        let vertices = indices
            .iter()
            .enumerate()
            .map(|(i, &idx)| {
                positions
                    .get(idx as usize)
                    .copied()
                    .ok_or(LightingError::IndexOutOfRange {
                        start: i,
                        len: positions.len(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(vertices))
    }

    /// Number of complete faces. Trailing vertices that do not fill a face are ignored.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// The three vertices of `face`, if it exists.
    pub fn face(&self, face: usize) -> Option<[Point3<f32>; 3]> {
        let start = face.checked_mul(3)?;
        let tri = self.vertices.get(start..start.checked_add(3)?)?;
        Some([tri[0], tri[1], tri[2]])
    }

    /// Flat-shading normal of `face`, used for every sample on that face.
    ///
    /// Not normalized; the lighting engine normalizes its own copy. Errors
    /// report the face's first vertex index, saturated at `usize::MAX`.
    pub fn face_normal(&self, face: usize) -> Result<Vector3<f32>, LightingError> {
        surface_normal(&self.vertices, face.saturating_mul(3))
    }

    /// Creates a single counter-clockwise triangle facing +Z.
    pub fn create_test_triangle() -> Self {
        Self::new(vec![
            Point3::new(0.0, 0.5, 0.0),   // Top
            Point3::new(-0.5, -0.5, 0.0), // Bottom Left
            Point3::new(0.5, -0.5, 0.0),  // Bottom Right
        ])
    }
}
