// Host-side tests for cube face layout, shading parameters and the spin axis.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod device {
    include!("../src/core/device.rs");
}
mod cube {
    include!("../src/core/cube.rs");
}

use cube::*;
use device::{DESKTOP, MOBILE};
use glam::{Quat, Vec3};
use std::f32::consts::PI;

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn texture_rotation_lookup_is_fixed() {
    assert_eq!(texture_rotation(0), Some(PI));
    assert_eq!(texture_rotation(1), Some(0.0));
    assert_eq!(texture_rotation(6), None);
    // asking twice, or out of order, never changes the answer
    let first: Vec<_> = (0..6).map(texture_rotation).collect();
    let again: Vec<_> = (0..6).rev().map(texture_rotation).collect();
    assert_eq!(first, again.into_iter().rev().collect::<Vec<_>>());
    for face in CubeFace::ALL {
        assert_eq!(Some(face.texture_rotation()), texture_rotation(face.index()));
    }
}

#[test]
fn face_indices_round_trip_in_image_order() {
    let names: Vec<_> = CubeFace::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["right", "left", "top", "bottom", "front", "back"]);
    for (i, face) in CubeFace::ALL.into_iter().enumerate() {
        assert_eq!(face.index(), i);
        assert_eq!(CubeFace::from_index(i), Some(face));
    }
}

#[test]
fn desktop_panels_sit_at_offset_and_face_outward() {
    let layouts = layout_faces(&DESKTOP);
    for layout in layouts {
        let n = layout.face.normal();
        assert!(approx_vec(layout.position, n * 670.0), "{:?}", layout.face);
        // the quad faces +Z before rotation
        assert!(approx_vec(layout.rotation * Vec3::Z, n), "{:?}", layout.face);
        assert_eq!(layout.size, 1300.0);
    }
}

#[test]
fn mobile_panels_use_mobile_geometry() {
    for layout in layout_faces(&MOBILE) {
        assert!((layout.position.length() - 415.0).abs() < 1e-3);
        assert_eq!(layout.size, 800.0);
    }
}

#[test]
fn model_matrix_maps_quad_corner_onto_panel() {
    let front = layout_faces(&DESKTOP)[CubeFace::Front.index()];
    let corner = front.model_matrix().transform_point3(Vec3::new(0.5, 0.5, 0.0));
    assert!(approx_vec(corner, Vec3::new(650.0, 650.0, 670.0)));
}

#[test]
fn shading_radius_scales_with_panel_size() {
    let desktop = FaceShading::new(CubeFace::Top, 1300.0);
    let mobile = FaceShading::new(CubeFace::Top, 800.0);
    assert!((desktop.radius - 30.0 / 1300.0).abs() < 1e-7);
    assert!((mobile.radius - 30.0 / 800.0).abs() < 1e-7);
    assert_eq!(desktop.opacity, 0.0);
    assert_eq!(desktop.texture_rotation, -PI / 2.0);
    assert_eq!(desktop.max_opacity, 0.9);
}

#[test]
fn tilted_axis_is_horizontal_unit() {
    let axis = RotationAxis::tilted().direction();
    assert!((axis.length() - 1.0).abs() < 1e-6);
    assert_eq!(axis.y, 0.0);
    // (1,0,1) yawed by 10 degrees
    let base_angle = 45f32.to_radians();
    let angle = axis.z.atan2(axis.x);
    assert!((angle - (base_angle + 10f32.to_radians())).abs() < 1e-5);
}

#[test]
fn spin_leaves_axis_fixed() {
    let axis = RotationAxis::tilted();
    let mut q = Quat::IDENTITY;
    for _ in 0..500 {
        q = axis.spin(q, -PI / 180.0);
    }
    assert!(approx_vec(q * axis.direction(), axis.direction()));
    assert!((q.length() - 1.0).abs() < 1e-5);
}

#[test]
fn spin_is_applied_in_local_frame() {
    let axis = RotationAxis::tilted();
    let tilt = Quat::from_rotation_x(0.3);
    let q = axis.spin(tilt, 0.5);
    // the axis expressed in the group's frame stays put
    assert!(approx_vec(q * axis.direction(), tilt * axis.direction()));
}

#[test]
fn gizmo_aligns_with_axis() {
    let axis = RotationAxis::tilted();
    let gizmo = axis.gizmo();
    assert!(approx_vec(gizmo.rotation * Vec3::Y, axis.direction()));
    assert!(approx_vec(gizmo.ends[0], axis.direction() * 800.0));
    assert!(approx_vec(gizmo.ends[1], -axis.direction() * 800.0));
}
