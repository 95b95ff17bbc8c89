/// Axis-angle rotations built on Rodrigues' formula
use crate::geometry::unit;
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Relative sine below which two directions are treated as parallel; the
/// cross product no longer yields a usable rotation axis.
const DEGENERATE_SIN: f64 = 1e-9;

/// A rotation by `angle` radians about `axis`, right-hand rule.
///
/// `axis` must be unit length for the rotation to be an isometry. The
/// constructors on this type always produce a unit axis (or the zero axis
/// for the identity, which rotates nothing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub angle: f64,
    pub axis: Vector3<f64>,
}

impl Rotation {
    pub fn new(angle: f64, axis: Vector3<f64>) -> Self {
        Self { angle, axis }
    }

    /// The rotation that leaves every vector where it is.
    pub fn identity() -> Self {
        Self {
            angle: 0.0,
            axis: Vector3::zeros(),
        }
    }

    /// The rotation carrying the direction of `from` onto the direction of
    /// `to`, with the angle in `[0, π]`.
    ///
    /// When the directions are parallel the cross product vanishes and no
    /// axis can be read off it: the same direction short-circuits to the
    /// identity, and the opposite direction becomes a half-turn about an
    /// arbitrary axis perpendicular to `from`. Zero-length inputs are the
    /// caller's problem; the result is NaN throughout.
    pub fn between(from: &Vector3<f64>, to: &Vector3<f64>) -> Self {
        let norms = from.norm() * to.norm();
        let cos_q = from.dot(to) / norms;
        let cross = from.cross(to);

        if cross.norm() / norms < DEGENERATE_SIN {
            if cos_q > 0.0 {
                return Self::identity();
            }
            return Self {
                angle: PI,
                axis: perpendicular_to(from),
            };
        }

        Self {
            // Clamp against float drift pushing the cosine past ±1
            angle: cos_q.clamp(-1.0, 1.0).acos(),
            axis: unit(&cross),
        }
    }

    /// Rodrigues' rotation formula:
    /// `v·cosθ + (axis × v)·sinθ + axis·(axis·v)·(1 − cosθ)`
    pub fn rotate_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        let (sin_q, cos_q) = self.angle.sin_cos();

        v * cos_q + self.axis.cross(v) * sin_q + self.axis * (self.axis.dot(v) * (1.0 - cos_q))
    }

    /// Rotate a position about the origin.
    pub fn rotate_point(&self, p: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.rotate_vector(&p.coords))
    }
}

/// Any unit vector perpendicular to `v`: cross with the x axis, or with the
/// y axis when `v` itself lies along x.
fn perpendicular_to(v: &Vector3<f64>) -> Vector3<f64> {
    let p = v.cross(&Vector3::x());
    if p.norm() > DEGENERATE_SIN * v.norm() {
        return unit(&p);
    }
    unit(&v.cross(&Vector3::y()))
}
