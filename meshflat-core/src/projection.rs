/// Mesh normalization and the per-face flattening projection
use crate::geometry::{Face, Mesh};
use crate::transform::Rotation;
use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

/// Axis-aligned bounding box over the vertices of a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    fn update(&mut self, p: &Point3<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Bounding box of every vertex of every face. Normals are directions,
    /// not positions, and do not contribute.
    pub fn of(mesh: &Mesh) -> Self {
        let mut bounds = Self::empty();
        for face in &mesh.faces {
            for vertex in &face.vertices {
                bounds.update(vertex);
            }
        }
        bounds
    }

    /// Componentwise size of the box
    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Length of the longest side of the box
    pub fn max_extent(&self) -> f64 {
        let e = self.extent();
        e.x.max(e.y).max(e.z)
    }
}

/// Translate the mesh so its bounding box rests at the origin and scale it
/// uniformly so the longest side spans `target_extent`. Normals are copied
/// unchanged; output faces keep the input order and count.
///
/// A mesh whose bounding box has zero size carries no scale of its own, so
/// it is only translated, never scaled by a non-finite factor.
pub fn normalize(mesh: &Mesh, target_extent: f64) -> Mesh {
    if mesh.faces.is_empty() {
        return Mesh::new();
    }

    let bounds = Bounds::of(mesh);
    let max_extent = bounds.max_extent();
    let scale = if max_extent == 0.0 {
        1.0
    } else {
        target_extent / max_extent
    };

    let faces = mesh
        .faces
        .iter()
        .map(|face| Face {
            normal: face.normal,
            vertices: face
                .vertices
                .map(|vertex| Point3::from((vertex - bounds.min) * scale)),
        })
        .collect();

    Mesh { faces }
}

/// Normalize the mesh, then rotate every face so its own normal points
/// along `up`, flattening each triangle onto the viewing plane.
///
/// Faces are mutually independent, so the per-face loop runs in parallel;
/// collecting keeps output index i aligned with input index i.
pub fn flatten(mesh: &Mesh, up: &Vector3<f64>, target_extent: f64) -> Mesh {
    let normalized = normalize(mesh, target_extent);

    let faces = normalized
        .faces
        .par_iter()
        .map(|face| {
            let rotation = Rotation::between(&face.normal, up);
            face.rotated(&rotation)
        })
        .collect();

    Mesh { faces }
}
