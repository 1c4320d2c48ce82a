use nalgebra::Vector3;
use phong_shade::app;
use phong_shade::io::config::Config;
use phong_shade::io::obj_loader::load_obj;
use phong_shade::pipeline::flat::shade_faces;
use phong_shade::{Color, PhongShader};

const TETRAHEDRON: &str = "assets/tetrahedron.obj";

#[test]
fn tetrahedron_normals_point_outward() {
    let mesh = load_obj(TETRAHEDRON).unwrap();
    assert_eq!(mesh.face_count(), 4);

    for face in 0..mesh.face_count() {
        let [a, b, c] = mesh.face(face).unwrap();
        let centroid = (a.coords + b.coords + c.coords) / 3.0;
        let normal = mesh.face_normal(face).unwrap();
        assert!(normal.dot(&centroid) > 0.0, "face {} is wound inward", face);
    }
}

#[test]
fn faces_facing_away_get_ambient_only() {
    let mesh = load_obj(TETRAHEDRON).unwrap();
    let shader = PhongShader::default();
    let faces = shade_faces(&mesh, &shader, &Vector3::z()).unwrap();
    assert_eq!(faces.len(), 4);

    let ambient_only = Color::gray(5.0);
    for shaded in &faces {
        let light_dir = shader.lights[0].direction().unwrap();
        if shaded.normal.dot(&light_dir) <= 0.0 {
            assert_eq!(shaded.color.to_rgb8(), ambient_only.to_rgb8());
        } else {
            assert!(shaded.color.green > 5.0);
            assert_eq!(shaded.color.to_rgb8()[0], 5);
        }
    }
}

#[test]
fn shared_shader_gives_identical_results_across_runs() {
    let mesh = load_obj(TETRAHEDRON).unwrap();
    let shader = PhongShader::default();
    let view = Vector3::new(0.3, 0.2, 1.0);

    let first = shade_faces(&mesh, &shader, &view).unwrap();
    let second = shade_faces(&mesh, &shader, &view).unwrap();
    assert_eq!(first, second);
    assert_eq!(view, Vector3::new(0.3, 0.2, 1.0));
}

#[test]
fn sample_scene_config_runs() {
    let mut config = Config::load("scene.toml").unwrap();
    assert_eq!(config.lights.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("faces.png");
    config.output.path = Some(output.to_str().unwrap().to_string());

    let faces = app::run(&config).unwrap();
    assert_eq!(faces.len(), 4);

    let img = image::open(&output).unwrap();
    assert_eq!((img.width(), img.height()), (128, 32));
}
