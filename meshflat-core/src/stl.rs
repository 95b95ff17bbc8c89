/// ASCII STL parser
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, multispace1, not_line_ending},
    multi::many0,
    number::complete::double,
    sequence::preceded,
    IResult,
};

use crate::geometry::{Face, Mesh};
use nalgebra::{Point3, Vector3};

/// Parse an ASCII STL solid into a mesh, preserving facet order.
///
/// Any structural defect inside a facet (missing keyword, wrong vertex
/// count, non-numeric coordinate) fails the whole parse; a partially-formed
/// face never escapes.
pub fn parse_ascii_stl(input: &str) -> Result<Mesh, String> {
    match parse_solid(input) {
        Ok((_, mesh)) => Ok(mesh),
        Err(e) => Err(format!("Failed to parse ASCII STL: {:?}", e)),
    }
}

fn parse_solid(input: &str) -> IResult<&str, Mesh> {
    let (input, _) = preceded(multispace0, tag("solid"))(input)?;
    let (input, _) = not_line_ending(input)?; // optional solid name
    let (input, faces) = many0(parse_facet)(input)?;
    let (input, _) = preceded(multispace0, tag("endsolid"))(input)?;

    let mut mesh = Mesh::with_capacity(faces.len());
    for face in faces {
        mesh.add_face(face);
    }

    Ok((input, mesh))
}

fn parse_facet(input: &str) -> IResult<&str, Face> {
    let (input, _) = preceded(multispace0, tag("facet"))(input)?;
    let (input, _) = preceded(multispace1, tag("normal"))(input)?;
    let (input, normal) = parse_triple(input)?;
    let (input, _) = preceded(multispace0, tag("outer"))(input)?;
    let (input, _) = preceded(multispace1, tag("loop"))(input)?;
    let (input, v0) = parse_vertex(input)?;
    let (input, v1) = parse_vertex(input)?;
    let (input, v2) = parse_vertex(input)?;
    let (input, _) = preceded(multispace0, tag("endloop"))(input)?;
    let (input, _) = preceded(multispace0, tag("endfacet"))(input)?;

    let face = Face::new(
        Vector3::new(normal.0, normal.1, normal.2),
        [
            Point3::new(v0.0, v0.1, v0.2),
            Point3::new(v1.0, v1.1, v1.2),
            Point3::new(v2.0, v2.1, v2.2),
        ],
    );

    Ok((input, face))
}

fn parse_vertex(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (input, _) = preceded(multispace0, tag("vertex"))(input)?;
    parse_triple(input)
}

fn parse_triple(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (input, _) = multispace0(input)?;
    let (input, x) = double(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = double(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = double(input)?;
    Ok((input, (x, y, z)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
solid triangle
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid triangle
";

    #[test]
    fn test_parse_single_facet() {
        let mesh = parse_ascii_stl(TRIANGLE).unwrap();
        assert_eq!(mesh.len(), 1);

        let face = &mesh.faces[0];
        assert_eq!(face.normal, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(face.vertices[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(face.vertices[1], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(face.vertices[2], Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_parse_unnamed_solid() {
        let input = TRIANGLE.replace("solid triangle", "solid").replace("endsolid triangle", "endsolid");
        assert_eq!(parse_ascii_stl(&input).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_empty_solid() {
        let mesh = parse_ascii_stl("solid empty\nendsolid empty\n").unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_parse_scientific_notation() {
        let input = "\
solid exported
  facet normal 0.000000e+00 -1.000000e+00 0.000000e+00
    outer loop
      vertex 1.500000e+01 0.000000e+00 -2.500000e-01
      vertex 0.000000e+00 0.000000e+00 0.000000e+00
      vertex 1.000000e+00 0.000000e+00 1.000000e+00
    endloop
  endfacet
endsolid exported
";
        let mesh = parse_ascii_stl(input).unwrap();
        assert_eq!(mesh.faces[0].normal, Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(mesh.faces[0].vertices[0], Point3::new(15.0, 0.0, -0.25));
    }

    #[test]
    fn test_preserves_facet_order() {
        let input = "\
solid two
  facet normal 0 0 1
    outer loop
      vertex 1 0 0
      vertex 2 0 0
      vertex 1 1 0
    endloop
  endfacet
  facet normal 0 0 1
    outer loop
      vertex 5 0 0
      vertex 6 0 0
      vertex 5 1 0
    endloop
  endfacet
endsolid two
";
        let mesh = parse_ascii_stl(input).unwrap();
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.faces[0].vertices[0].x, 1.0);
        assert_eq!(mesh.faces[1].vertices[0].x, 5.0);
    }

    #[test]
    fn test_reject_missing_endfacet() {
        let input = TRIANGLE.replace("  endfacet\n", "");
        assert!(parse_ascii_stl(&input).is_err());
    }

    #[test]
    fn test_reject_short_vertex_loop() {
        let input = TRIANGLE.replace("      vertex 0 1 0\n", "");
        assert!(parse_ascii_stl(&input).is_err());
    }

    #[test]
    fn test_reject_non_numeric_coordinate() {
        let input = TRIANGLE.replace("vertex 1 0 0", "vertex one 0 0");
        assert!(parse_ascii_stl(&input).is_err());
    }
}
