use crate::error::LightingError;
use nalgebra::{Point3, Vector3};

/// Vectors shorter than this are treated as zero-length and refuse to normalize.
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Returns the Euclidean length of `v`.
pub fn magnitude(v: &Vector3<f32>) -> f32 {
    v.norm()
}

/// Returns a unit-length copy of `v`.
///
/// The input is never modified. Fails with [`LightingError::DegenerateVector`]
/// instead of producing NaN components when `v` is (near) zero or not finite.
pub fn normalize(v: &Vector3<f32>) -> Result<Vector3<f32>, LightingError> {
    let degenerate = || LightingError::DegenerateVector {
        x: v.x,
        y: v.y,
        z: v.z,
    };

    if !v.iter().all(|c| c.is_finite()) {
        return Err(degenerate());
    }

    v.try_normalize(NORMALIZE_EPSILON).ok_or_else(degenerate)
}

/// Inner product of `a` and `b`.
pub fn dot(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    a.dot(b)
}

/// Mirrors the light direction about the normal: `R = 2N max(0, N·L) - L`.
///
/// Both inputs are expected to be unit length. For a light behind the surface
/// (`N·L < 0`) the cosine clamps to zero and `R = -L`. That vector points in
/// front of the surface, so a view along `-L` still sees a full highlight.
pub fn reflect(normal: &Vector3<f32>, light_dir: &Vector3<f32>) -> Vector3<f32> {
    let n_dot_l = dot(normal, light_dir).max(0.0);
    normal * (2.0 * n_dot_l) - light_dir
}

/// Computes the (unnormalized) normal of the triangle whose first vertex is
/// at `start`: `(v[start+1] - v[start]) × (v[start+2] - v[start])`.
///
/// Counter-clockwise winding yields a normal pointing towards the viewer.
pub fn surface_normal(
    vertices: &[Point3<f32>],
    start: usize,
) -> Result<Vector3<f32>, LightingError> {
    let out_of_range = LightingError::IndexOutOfRange {
        start,
        len: vertices.len(),
    };
    let last = start.checked_add(2).ok_or(out_of_range.clone())?;
    if last >= vertices.len() {
        return Err(out_of_range);
    }

    let a = vertices[start + 1] - vertices[start];
    let b = vertices[start + 2] - vertices[start];
    let normal = a.cross(&b);

    // Parallel edges: compare against the edge lengths so tiny but valid
    // triangles are not rejected.
    let area_x2 = normal.norm();
    if !area_x2.is_finite() || area_x2 <= f32::EPSILON * a.norm() * b.norm() {
        return Err(LightingError::DegenerateFace { start });
    }

    Ok(normal)
}
