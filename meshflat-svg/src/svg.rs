/// SVG polygon emitter for flattened meshes
use meshflat_core::{Face, Mesh};
use std::io::{self, Write};

/// Renders a mesh as one filled polygon per face, orthographically
/// projected onto the XY plane. Z and normals are discarded.
pub struct SvgRenderer {
    extent: f64,
}

impl SvgRenderer {
    pub fn new(extent: f64) -> Self {
        Self { extent }
    }

    /// Write the complete SVG document for `mesh`.
    pub fn render<W: Write>(&self, writer: &mut W, mesh: &Mesh) -> io::Result<()> {
        writeln!(
            writer,
            "<svg viewBox=\"0 0 {} {}\" style=\"background:black\">",
            self.extent as i64, self.extent as i64
        )?;

        for face in &mesh.faces {
            self.render_face(writer, face)?;
        }

        writeln!(writer, "</svg>")
    }

    /// SVG pixel Y grows downward while mesh Y grows upward, so every Y is
    /// flipped as `extent - y`.
    fn render_face<W: Write>(&self, writer: &mut W, face: &Face) -> io::Result<()> {
        let s = self.extent;
        let [v0, v1, v2] = &face.vertices;

        writeln!(
            writer,
            "<polygon class=\"face\" points=\"{:.5},{:.5} {:.5},{:.5} {:.5},{:.5}\" />",
            v0.x,
            s - v0.y,
            v1.x,
            s - v1.y,
            v2.x,
            s - v2.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshflat_core::Face;
    use nalgebra::{Point3, Vector3};

    fn render_to_string(extent: f64, mesh: &Mesh) -> String {
        let mut out = Vec::new();
        SvgRenderer::new(extent).render(&mut out, mesh).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_wraps_polygons_in_viewbox() {
        let svg = render_to_string(200.0, &Mesh::cube(2.0));

        assert!(svg.starts_with("<svg viewBox=\"0 0 200 200\" style=\"background:black\">"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), 12);
    }

    #[test]
    fn test_flips_y_axis() {
        let mut mesh = Mesh::new();
        mesh.add_face(Face::new(
            Vector3::z(),
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(0.0, 10.0, 0.0),
            ],
        ));

        let svg = render_to_string(10.0, &mesh);

        assert!(svg.contains(
            "points=\"0.00000,10.00000 10.00000,10.00000 0.00000,0.00000\""
        ));
    }

    #[test]
    fn test_empty_mesh_renders_empty_document() {
        let svg = render_to_string(50.0, &Mesh::new());

        assert_eq!(
            svg,
            "<svg viewBox=\"0 0 50 50\" style=\"background:black\">\n</svg>\n"
        );
    }
}
