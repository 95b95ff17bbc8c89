/// Example: Flatten the built-in cube and print the SVG document
///
/// Usage: cargo run --example flatten_cube

use meshflat_core::{projection, Mesh};
use meshflat_svg::SvgRenderer;
use nalgebra::Vector3;
use std::io;

fn main() -> io::Result<()> {
    let extent = 200.0;
    let flat = projection::flatten(&Mesh::cube(2.0), &Vector3::z(), extent);

    let stdout = io::stdout();
    SvgRenderer::new(extent).render(&mut stdout.lock(), &flat)
}
