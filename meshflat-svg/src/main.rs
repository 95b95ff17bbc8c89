/// Convert an ASCII STL solid into flat SVG line art
///
/// Usage: meshflat-svg <stl-file> [extent]
///
/// Each facet is rotated individually until its normal faces the viewer,
/// then drawn as a filled polygon. The SVG document goes to stdout.

use meshflat_core::{projection, stl};
use meshflat_svg::SvgRenderer;
use nalgebra::Vector3;
use std::io;
use std::{env, fs, process};

const DEFAULT_EXTENT: f64 = 200.0;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <stl-file> [extent]", args[0]);
        process::exit(1);
    }

    let extent = match args.get(2) {
        Some(raw) => match raw.parse::<f64>() {
            Ok(extent) if extent > 0.0 => extent,
            _ => {
                eprintln!("Invalid extent: {}", raw);
                process::exit(1);
            }
        },
        None => DEFAULT_EXTENT,
    };

    let input = fs::read_to_string(&args[1]).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read STL file: {}", e),
        )
    })?;

    let mesh = stl::parse_ascii_stl(&input)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let flat = projection::flatten(&mesh, &Vector3::z(), extent);

    let stdout = io::stdout();
    SvgRenderer::new(extent).render(&mut stdout.lock(), &flat)
}
