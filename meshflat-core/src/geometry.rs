/// Geometry primitives for mesh flattening
use crate::transform::Rotation;
use nalgebra::{Point3, Vector3};

/// Scale a vector to unit length.
///
/// The zero vector has no direction and is returned unchanged rather than
/// divided by zero; every other input comes back with norm 1.
pub fn unit(v: &Vector3<f64>) -> Vector3<f64> {
    let len = v.norm();
    if len == 0.0 {
        return *v;
    }
    v / len
}

/// A flat-shaded triangle: one outward normal and three vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub normal: Vector3<f64>,
    pub vertices: [Point3<f64>; 3],
}

impl Face {
    pub fn new(normal: Vector3<f64>, vertices: [Point3<f64>; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Apply the same rotation to the normal and every vertex, returning a
    /// new face. The receiver is untouched.
    pub fn rotated(&self, rotation: &Rotation) -> Self {
        Self {
            normal: rotation.rotate_vector(&self.normal),
            vertices: [
                rotation.rotate_point(&self.vertices[0]),
                rotation.rotate_point(&self.vertices[1]),
                rotation.rotate_point(&self.vertices[2]),
            ],
        }
    }
}

/// A triangle soup in file order
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self { faces: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            faces: Vec::with_capacity(capacity),
        }
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Create a simple cube mesh for testing
    pub fn cube(size: f64) -> Self {
        let h = size / 2.0;
        let p = Point3::new;
        let mut mesh = Self::with_capacity(12);
        let mut quad = |normal: Vector3<f64>,
                        a: Point3<f64>,
                        b: Point3<f64>,
                        c: Point3<f64>,
                        d: Point3<f64>| {
            mesh.add_face(Face::new(normal, [a, b, c]));
            mesh.add_face(Face::new(normal, [a, c, d]));
        };

        // Front
        quad(Vector3::z(), p(-h, -h, h), p(h, -h, h), p(h, h, h), p(-h, h, h));
        // Back
        quad(-Vector3::z(), p(-h, -h, -h), p(-h, h, -h), p(h, h, -h), p(h, -h, -h));
        // Top
        quad(Vector3::y(), p(-h, h, -h), p(-h, h, h), p(h, h, h), p(h, h, -h));
        // Bottom
        quad(-Vector3::y(), p(-h, -h, -h), p(h, -h, -h), p(h, -h, h), p(-h, -h, h));
        // Right
        quad(Vector3::x(), p(h, -h, -h), p(h, h, -h), p(h, h, h), p(h, -h, h));
        // Left
        quad(-Vector3::x(), p(-h, -h, -h), p(-h, -h, h), p(-h, h, h), p(-h, h, -h));

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
