//! # Extrusion Tests
//!
//! Layout, winding and normal checks for `extrude`.

use super::*;
use crate::{GeometryError, Mesh, Polygon2D, RigidTransform};
use approx::assert_abs_diff_eq;
use glam::{Quat, Vec2, Vec3};

fn square(half: f32) -> Polygon2D {
    Polygon2D::new(vec![
        Vec2::new(half, half),
        Vec2::new(half, -half),
        Vec2::new(-half, -half),
        Vec2::new(-half, half),
    ])
}

/// Clockwise regular polygon, like the cylinder footprint.
fn regular(n: usize, radius: f32) -> Polygon2D {
    (0..n)
        .map(|i| {
            let angle = -(i as f32) / n as f32 * std::f32::consts::TAU;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn top_cap(mesh: &Mesh, n: usize) -> &[Vec3] {
    &mesh.vertices()[..3 * (n - 2)]
}

fn bottom_cap(mesh: &Mesh, n: usize) -> &[Vec3] {
    &mesh.vertices()[mesh.vertex_count() - 3 * (n - 2)..]
}

#[test]
fn test_vertex_count_matches_formula() {
    for n in 3..=16 {
        let mesh = extrude(&regular(n, 2.0), 1.0, &RigidTransform::IDENTITY).unwrap();
        assert_eq!(mesh.vertex_count(), 12 * n - 12, "footprint of {n} points");
        assert_eq!(mesh.normals().len(), mesh.vertex_count());
        assert_eq!(mesh.vertex_count(), prism_vertex_count(n));
    }
}

#[test]
fn test_caps_sit_at_half_height() {
    let n = 7;
    let mesh = extrude(&regular(n, 3.0), 5.0, &RigidTransform::IDENTITY).unwrap();
    assert!(top_cap(&mesh, n).iter().all(|v| v.z == 2.5));
    assert!(bottom_cap(&mesh, n).iter().all(|v| v.z == -2.5));
}

#[test]
fn test_bottom_normal_negates_top_normal() {
    let pose = RigidTransform::new(
        Vec3::new(4.0, -1.0, 2.0),
        Quat::from_euler(glam::EulerRot::ZYX, 0.7, 0.2, -0.4),
    );
    let n = 5;
    let mesh = extrude(&regular(n, 1.0), 0.5, &pose).unwrap();
    let normals = mesh.normals();
    let top = normals[0];
    assert!(normals[..3 * (n - 2)].iter().all(|v| *v == top));
    assert!(normals[normals.len() - 3 * (n - 2)..].iter().all(|v| *v == -top));
}

#[test]
fn test_square_prism_exact_layout() {
    let mesh = extrude(&square(1.0), 4.0, &RigidTransform::IDENTITY).unwrap();

    // Top fan: (v0, v1, v2) then (v0, v2, v3)
    assert_eq!(
        mesh.triangle(0),
        Some([Vec3::new(1.0, 1.0, 2.0), Vec3::new(1.0, -1.0, 2.0), Vec3::new(-1.0, -1.0, 2.0)])
    );
    assert_eq!(
        mesh.triangle(1),
        Some([Vec3::new(1.0, 1.0, 2.0), Vec3::new(-1.0, -1.0, 2.0), Vec3::new(-1.0, 1.0, 2.0)])
    );
    assert_eq!(mesh.triangle_normal(0), Some(Vec3::new(0.0, 0.0, 4.0)));

    // First wall spans edge v0 -> v1 on the +X side
    assert_eq!(
        mesh.triangle(2),
        Some([Vec3::new(1.0, 1.0, 2.0), Vec3::new(1.0, 1.0, -2.0), Vec3::new(1.0, -1.0, -2.0)])
    );
    assert_eq!(
        mesh.triangle(3),
        Some([Vec3::new(1.0, 1.0, 2.0), Vec3::new(1.0, -1.0, -2.0), Vec3::new(1.0, -1.0, 2.0)])
    );
    assert_eq!(mesh.triangle_normal(2), Some(Vec3::new(8.0, 0.0, 0.0)));
    assert_eq!(mesh.triangle_normal(3), Some(Vec3::new(8.0, 0.0, 0.0)));

    // Bottom fan reverses the last two corners
    assert_eq!(
        mesh.triangle(10),
        Some([Vec3::new(1.0, 1.0, -2.0), Vec3::new(-1.0, -1.0, -2.0), Vec3::new(1.0, -1.0, -2.0)])
    );
    assert_eq!(mesh.triangle_normal(11), Some(Vec3::new(0.0, 0.0, -4.0)));
}

#[test]
fn test_wall_normals_point_outward() {
    let mesh = extrude(&square(1.0), 2.0, &RigidTransform::IDENTITY).unwrap();
    let expected = [Vec3::X, -Vec3::Y, -Vec3::X, Vec3::Y];
    for (edge, dir) in expected.iter().enumerate() {
        let normal = mesh.triangle_normal(2 + 2 * edge).unwrap();
        assert!(normal.normalize().abs_diff_eq(*dir, 1e-6), "edge {edge}: {normal}");
    }
}

#[test]
fn test_normals_are_not_normalized() {
    let small = extrude(&square(1.0), 2.0, &RigidTransform::IDENTITY).unwrap();
    let large = extrude(&square(2.0), 2.0, &RigidTransform::IDENTITY).unwrap();
    assert_eq!(small.normals()[0].length(), 4.0);
    assert_eq!(large.normals()[0].length(), 16.0);
}

#[test]
fn test_transform_moves_and_rotates_mesh() {
    let pose = RigidTransform::new(
        Vec3::new(10.0, 20.0, 30.0),
        Quat::from_rotation_x(std::f32::consts::PI),
    );
    let mesh = extrude(&square(1.0), 2.0, &pose).unwrap();

    // Flipped upside down: the "top" cap lands below the translation
    for v in top_cap(&mesh, 4) {
        assert_abs_diff_eq!(v.z, 29.0, epsilon = 1e-5);
    }
    let top_normal = mesh.normals()[0].normalize();
    assert!(top_normal.abs_diff_eq(-Vec3::Z, 1e-5));

    let (min, max) = mesh.bounding_box();
    assert!(min.abs_diff_eq(Vec3::new(9.0, 19.0, 29.0), 1e-5));
    assert!(max.abs_diff_eq(Vec3::new(11.0, 21.0, 31.0), 1e-5));
}

#[test]
fn test_zero_and_negative_height_are_accepted() {
    let flat = extrude(&square(1.0), 0.0, &RigidTransform::IDENTITY).unwrap();
    assert_eq!(flat.vertex_count(), 36);
    assert!(flat.vertices().iter().all(|v| v.z == 0.0));

    let inverted = extrude(&square(1.0), -2.0, &RigidTransform::IDENTITY).unwrap();
    assert!(top_cap(&inverted, 4).iter().all(|v| v.z == -1.0));
    assert!(bottom_cap(&inverted, 4).iter().all(|v| v.z == 1.0));
}

#[test]
fn test_too_few_vertices() {
    let identity = RigidTransform::IDENTITY;
    let two = Polygon2D::new(vec![Vec2::ZERO, Vec2::X]);
    assert_eq!(
        extrude(&two, 1.0, &identity),
        Err(GeometryError::TooFewVertices { count: 2, min: 3 })
    );
    assert_eq!(
        extrude(&Polygon2D::default(), 1.0, &identity),
        Err(GeometryError::TooFewVertices { count: 0, min: 3 })
    );
}

#[test]
fn test_counter_clockwise_is_rejected() {
    let ccw = Polygon2D::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]);
    assert_eq!(
        extrude(&ccw, 1.0, &RigidTransform::IDENTITY),
        Err(GeometryError::NotClockwise)
    );
    assert!(extrude(&ccw.reversed(), 1.0, &RigidTransform::IDENTITY).is_ok());
}

#[test]
fn test_extrude_is_idempotent() {
    let pose = RigidTransform::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_z(0.3));
    let footprint = regular(9, 1.5);
    let first = extrude(&footprint, 2.0, &pose).unwrap();
    let second = extrude(&footprint, 2.0, &pose).unwrap();
    assert_eq!(first, second);
}
