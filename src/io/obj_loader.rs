use crate::error::SceneError;
use crate::scene::mesh::Mesh;
use log::{info, warn};
use nalgebra::Point3;
use std::path::Path;

/// Loads an OBJ file as a triangle soup.
///
/// Polygons are triangulated and all sub-models are merged into one mesh.
/// Only positions are read; face normals are derived from the winding.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, SceneError> {
    let path = path.as_ref();
    let obj_error = |message: String| SceneError::Obj {
        path: path.display().to_string(),
        message,
    };

    if !path.exists() {
        return Err(obj_error("file not found".to_string()));
    }

    info!("Loading OBJ file: {}", path.display());

    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };

    let (models, _materials) =
        tobj::load_obj(path, &load_options).map_err(|e| obj_error(e.to_string()))?;

    let mut vertices = Vec::new();
    for model in models {
        let mesh = &model.mesh;
        if mesh.indices.len() % 3 != 0 {
            warn!(
                "Model '{}' has {} indices, not a multiple of 3; trailing indices ignored.",
                model.name,
                mesh.indices.len()
            );
        }

        let positions: Vec<Point3<f32>> = mesh
            .positions
            .chunks_exact(3)
            .map(|p| Point3::new(p[0], p[1], p[2]))
            .collect();

        let whole_faces = mesh.indices.len() - mesh.indices.len() % 3;
        let unrolled = Mesh::from_indexed(&positions, &mesh.indices[..whole_faces])
            .map_err(|e| obj_error(format!("model '{}': {}", model.name, e)))?;
        vertices.extend(unrolled.vertices);
    }

    let mesh = Mesh::new(vertices);
    info!("OBJ loaded successfully. Total faces: {}", mesh.face_count());

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_quad_is_triangulated() {
        let mut file = tempfile::Builder::new().suffix(".obj").tempfile().unwrap();
        writeln!(
            file,
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n"
        )
        .unwrap();

        let mesh = load_obj(file.path()).unwrap();
        assert_eq!(mesh.face_count(), 2);
        for face in 0..mesh.face_count() {
            let n = mesh.face_normal(face).unwrap();
            assert!(n.z > 0.0, "face {} should face +Z", face);
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_obj("no/such/mesh.obj").unwrap_err();
        assert!(matches!(err, SceneError::Obj { .. }));
    }
}
