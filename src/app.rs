use crate::core::color::Color;
use crate::error::SceneError;
use crate::io::config::Config;
use crate::io::image::save_swatches;
use crate::io::obj_loader::load_obj;
use crate::pipeline::flat::{ShadedFace, shade_faces, shade_faces_lenient};
use crate::scene::mesh::Mesh;
use log::{debug, info};
use std::time::Instant;

/// Loads the configured mesh, or the built-in test triangle when none is set.
pub fn load_mesh(config: &Config) -> Result<Mesh, SceneError> {
    match &config.mesh.path {
        Some(path) => load_obj(path),
        None => {
            info!("No mesh configured, using test triangle.");
            Ok(Mesh::create_test_triangle())
        }
    }
}

/// Shades every face of the configured mesh and optionally writes a swatch sheet.
pub fn run(config: &Config) -> Result<Vec<ShadedFace>, SceneError> {
    let shader = config.build_shader()?;
    let view = config.view_vector();
    let mesh = load_mesh(config)?;

    info!(
        "Shading {} faces with {} light(s), shininess {}",
        mesh.face_count(),
        shader.lights.len(),
        shader.shininess
    );

    let start_time = Instant::now();
    let faces = if config.mesh.skip_degenerate {
        shade_faces_lenient(&mesh, &shader, &view)
    } else {
        shade_faces(&mesh, &shader, &view)?
    };
    info!("Shading completed in {:.2?}", start_time.elapsed());

    for face in &faces {
        let [r, g, b] = face.color.to_rgb8();
        debug!(
            "face {:>5}: normal ({:.3}, {:.3}, {:.3}) -> rgb({}, {}, {})",
            face.face, face.normal.x, face.normal.y, face.normal.z, r, g, b
        );
    }

    if let Some(output) = &config.output.path {
        info!("Saving face swatches to '{}'...", output);
        let colors: Vec<Color> = faces.iter().map(|f| f.color).collect();
        save_swatches(
            &colors,
            config.output.swatch_size,
            config.output.columns,
            output,
        )?;
    }

    Ok(faces)
}
