// Host-side tests for hero model loading, bounds and recentering.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod model {
    include!("../src/core/model.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::Camera;
use glam::Vec3;
use model::*;

// One triangle (0,0,0) (2,0,0) (0,4,0) in an embedded buffer, no normals,
// on a node translated by +10 on X.
const TRIANGLE_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "mesh": 0, "translation": [10.0, 0.0, 0.0] }],
  "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
  "buffers": [{
    "byteLength": 36,
    "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAAAAQAAAAAAAAAAAAAAAAAAAgEAAAAAA"
  }],
  "bufferViews": [{ "buffer": 0, "byteLength": 36 }],
  "accessors": [{
    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
    "min": [0.0, 0.0, 0.0], "max": [2.0, 4.0, 0.0]
  }]
}"#;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn loads_embedded_triangle_with_node_transform() {
    let model = HeroModel::from_glb(TRIANGLE_GLTF.as_bytes()).expect("parses");
    assert_eq!(model.vertices.len(), 3);
    assert_eq!(model.indices, vec![0, 1, 2]);
    let b = model.bounds().unwrap();
    assert!(approx_vec(b.min, Vec3::new(10.0, 0.0, 0.0)));
    assert!(approx_vec(b.max, Vec3::new(12.0, 4.0, 0.0)));
    // default material is opaque white
    assert_eq!(model.vertices[0].color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn missing_normals_are_generated_from_faces() {
    let model = HeroModel::from_glb(TRIANGLE_GLTF.as_bytes()).unwrap();
    for v in &model.vertices {
        assert!(approx_vec(Vec3::from_array(v.normal), Vec3::Z));
    }
}

#[test]
fn recenter_moves_bounds_center_to_origin() {
    let mut model = HeroModel::from_glb(TRIANGLE_GLTF.as_bytes()).unwrap();
    let shift = model.recenter();
    assert!(approx_vec(shift, Vec3::new(11.0, 2.0, 0.0)));
    let b = model.bounds().unwrap();
    assert!(approx_vec(b.center(), Vec3::ZERO));
    assert!(approx_vec(b.size(), Vec3::new(2.0, 4.0, 0.0)));
}

#[test]
fn garbage_bytes_are_rejected() {
    assert!(HeroModel::from_glb(b"definitely not a model").is_err());
}

#[test]
fn bounds_of_nothing_is_none() {
    assert!(Bounds::from_points(std::iter::empty::<Vec3>()).is_none());
    let b = Bounds::from_points([Vec3::new(-1.0, 2.0, 3.0)]).unwrap();
    assert_eq!(b.min, b.max);
}

#[test]
fn compute_normals_skips_out_of_range_indices() {
    let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let normals = compute_normals(&positions, &[0, 1, 2, 0, 1, 9]);
    assert_eq!(normals.len(), 3);
    assert!(normals.iter().all(|n| approx_vec(*n, Vec3::Z)));
}

#[test]
fn isolated_vertices_get_an_up_normal() {
    let normals = compute_normals(&[Vec3::ZERO], &[]);
    assert_eq!(normals, vec![Vec3::Y]);
}

#[test]
fn camera_tracks_viewport_aspect() {
    let mut cam = Camera::looking_down_z(30.0, 50.0, 0.1, 1000.0);
    cam.set_viewport(1600, 800);
    assert!((cam.aspect - 2.0).abs() < 1e-6);
    cam.set_viewport(0, 800);
    assert!((cam.aspect - 2.0).abs() < 1e-6, "degenerate sizes are ignored");
}

#[test]
fn camera_projects_origin_to_screen_center() {
    let mut cam = Camera::looking_down_z(30.0, 50.0, 0.1, 1000.0);
    cam.set_viewport(1280, 720);
    let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
