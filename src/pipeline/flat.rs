use crate::core::color::Color;
use crate::core::math::vector::normalize;
use crate::error::LightingError;
use crate::pipeline::shaders::phong::PhongShader;
use crate::scene::mesh::Mesh;
use log::{debug, warn};
use nalgebra::Vector3;
use rayon::prelude::*;

/// Lighting result for one triangular face under flat shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedFace {
    pub face: usize,
    /// Unit face normal.
    pub normal: Vector3<f32>,
    pub color: Color,
}

fn shade_face(
    mesh: &Mesh,
    shader: &PhongShader,
    view: &Vector3<f32>,
    face: usize,
) -> Result<ShadedFace, LightingError> {
    let normal = normalize(&mesh.face_normal(face)?)?;
    let color = shader.shade(&normal, view)?;
    Ok(ShadedFace {
        face,
        normal,
        color,
    })
}

/// Lights every face of `mesh` with one normal per face.
///
/// Faces are independent, so they are evaluated in parallel. Results keep
/// face order. The first invalid face (degenerate geometry or view) fails the
/// whole batch.
pub fn shade_faces(
    mesh: &Mesh,
    shader: &PhongShader,
    view: &Vector3<f32>,
) -> Result<Vec<ShadedFace>, LightingError> {
    let faces = (0..mesh.face_count())
        .into_par_iter()
        .map(|face| shade_face(mesh, shader, view, face))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Shaded {} faces", faces.len());
    Ok(faces)
}

/// Like [`shade_faces`], but skips faces that cannot be lit and logs them.
///
/// Returns the faces that were shaded, still in face order.
pub fn shade_faces_lenient(
    mesh: &Mesh,
    shader: &PhongShader,
    view: &Vector3<f32>,
) -> Vec<ShadedFace> {
    let results: Vec<_> = (0..mesh.face_count())
        .into_par_iter()
        .map(|face| shade_face(mesh, shader, view, face))
        .collect();

    let total = results.len();
    let faces: Vec<ShadedFace> = results
        .into_iter()
        .filter_map(|result| match result {
            Ok(shaded) => Some(shaded),
            Err(e) => {
                warn!("Skipping face: {}", e);
                None
            }
        })
        .collect();

    debug!("Shaded {} of {} faces", faces.len(), total);
    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn two_face_mesh() -> Mesh {
        let mut mesh = Mesh::create_test_triangle();
        // Second face points along +X
        mesh.vertices.extend([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]);
        mesh
    }

    #[test]
    fn test_faces_are_shaded_in_order() {
        let mesh = two_face_mesh();
        let shader = PhongShader::default();
        let faces = shade_faces(&mesh, &shader, &Vector3::z()).unwrap();

        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].face, 0);
        assert_eq!(faces[1].face, 1);
        assert_eq!(faces[1].normal, Vector3::x());

        let direct = shader.shade(&Vector3::z(), &Vector3::z()).unwrap();
        assert_eq!(faces[0].color, direct);
    }

    #[test]
    fn test_degenerate_face_fails_batch() {
        let mut mesh = two_face_mesh();
        mesh.vertices.extend([Point3::origin(); 3]);
        let err = shade_faces(&mesh, &PhongShader::default(), &Vector3::z()).unwrap_err();
        assert_eq!(err, LightingError::DegenerateFace { start: 6 });
    }

    #[test]
    fn test_lenient_skips_degenerate_face() {
        let mut mesh = Mesh::new(vec![Point3::origin(); 3]);
        mesh.vertices.extend(Mesh::create_test_triangle().vertices);

        let faces = shade_faces_lenient(&mesh, &PhongShader::default(), &Vector3::z());
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].face, 1);
    }

    #[test]
    fn test_zero_view_fails() {
        let mesh = Mesh::create_test_triangle();
        let err = shade_faces(&mesh, &PhongShader::default(), &Vector3::zeros()).unwrap_err();
        assert!(matches!(err, LightingError::DegenerateVector { .. }));
    }

    #[test]
    fn test_empty_mesh() {
        let faces = shade_faces(&Mesh::default(), &PhongShader::default(), &Vector3::z()).unwrap();
        assert!(faces.is_empty());
    }
}
