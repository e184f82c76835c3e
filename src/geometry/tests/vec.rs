use crate::geometry::{Vec2, Vec3};
use crate::utility::vec2_identical;
use assert_approx_eq::assert_approx_eq;

#[test]
fn vec2_zero_constructor() {
    let v = Vec2::zero();
    assert_eq!(v.x, 0.0);
    assert_eq!(v.y, 0.0);
}

#[test]
fn vec2_components_constructor() {
    let v = Vec2::new(1.0, 0.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 0.0);
}

#[test]
fn vec2_copy() {
    let v = Vec2::new(-83.27705, 79.29129);
    let v2 = v;
    assert_eq!(v.x, v2.x);
    assert_eq!(v.y, v2.y);
}

#[test]
fn vec2_add_vec2() {
    let v1 = Vec2::new(1.0, 2.0);
    let v2 = Vec2::new(4.0, 5.5);
    let res = v1 + v2;
    assert_approx_eq!(res.x, 5.0);
    assert_approx_eq!(res.y, 7.5);
}

#[test]
fn vec2_add_float() {
    let v1 = Vec2::new(1.0, 2.65);
    let f = -0.75;
    let res = v1 + f;
    assert_approx_eq!(res.x, 0.25);
    assert_approx_eq!(res.y, 1.9);
}

#[test]
fn vec2_add_assign_vec2() {
    let mut v1 = Vec2::new(1.0, 2.0);
    let v2 = Vec2::new(4.0, 5.5);
    v1 += v2;
    assert_approx_eq!(v1.x, 5.0);
    assert_approx_eq!(v1.y, 7.5);
}

#[test]
fn vec2_sub_vec2() {
    let v1 = Vec2::new(1.0, 2.0);
    let v2 = Vec2::new(4.0, 5.5);
    let res = v1 - v2;
    assert_approx_eq!(res.x, -3.0);
    assert_approx_eq!(res.y, -3.5);
}

#[test]
fn vec2_sub_assign_vec2() {
    let mut v1 = Vec2::new(1.0, 2.0);
    v1 -= &Vec2::new(4.0, 5.5);
    assert_approx_eq!(v1.x, -3.0);
    assert_approx_eq!(v1.y, -3.5);
}

#[test]
fn vec2_sub_float() {
    let res = Vec2::new(1.0, 2.65) - 0.5;
    assert_approx_eq!(res.x, 0.5);
    assert_approx_eq!(res.y, 2.15);
}

#[test]
fn vec2_mul_float() {
    let mut v = Vec2::new(1.0, -2.5) * 2.0;
    assert_eq!(v.x, 2.0);
    assert_eq!(v.y, -5.0);
    v *= -0.5;
    assert_eq!(v.x, -1.0);
    assert_eq!(v.y, 2.5);
}

#[test]
fn vec2_neg() {
    let v = -Vec2::new(1.0, -2.5);
    assert_eq!(v.x, -1.0);
    assert_eq!(v.y, 2.5);
}

#[test]
fn vec2_display() {
    let v = Vec2::new(0.1, -1.5);
    assert_eq!(format!("{}", v), "Vec2[0.1, -1.5]");
}

#[test]
fn vec3_zero_constructor() {
    let v = Vec3::zero();
    assert_eq!(v.x, 0.0);
    assert_eq!(v.y, 0.0);
    assert_eq!(v.z, 0.0);
}

#[test]
fn vec3_components_constructor() {
    let v = Vec3::new(1.0, -2.0, 0.5);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, -2.0);
    assert_eq!(v.z, 0.5);
}

#[test]
fn vec3_vec2_drops_z() {
    let v = Vec3::new(4.0, -6.0, 2.0);
    let projected = v.vec2();
    assert_eq!(projected.x, 4.0);
    assert_eq!(projected.y, -6.0);
}

#[test]
fn vec3_vec2_no_perspective_division() {
    let zero_w = Vec3::new(3.0, 5.0, 0.0).vec2();
    assert!(vec2_identical(&zero_w, &Vec2::new(3.0, 5.0)));
    let nan_w = Vec3::new(3.0, 5.0, f64::NAN).vec2();
    assert!(vec2_identical(&nan_w, &Vec2::new(3.0, 5.0)));
    let non_finite = Vec3::new(f64::INFINITY, f64::NAN, 1.0).vec2();
    assert!(vec2_identical(&non_finite, &Vec2::new(f64::INFINITY, f64::NAN)));
}

#[test]
fn vec3_add_sub() {
    let v1 = Vec3::new(1.0, 2.0, 3.0);
    let v2 = Vec3::new(0.5, -1.0, 2.0);
    let sum = v1 + v2;
    assert_approx_eq!(sum.x, 1.5);
    assert_approx_eq!(sum.y, 1.0);
    assert_approx_eq!(sum.z, 5.0);
    let diff = &v1 - &v2;
    assert_approx_eq!(diff.x, 0.5);
    assert_approx_eq!(diff.y, 3.0);
    assert_approx_eq!(diff.z, 1.0);
}

#[test]
fn vec3_mul_neg() {
    let v = -(Vec3::new(1.0, -2.0, 3.0) * 2.0);
    assert_eq!(v.x, -2.0);
    assert_eq!(v.y, 4.0);
    assert_eq!(v.z, -6.0);
}

#[test]
fn vec3_display() {
    let v = Vec3::new(1.0, -2.0, 0.5);
    assert_eq!(format!("{}", v), "Vec3[1, -2, 0.5]");
}
