/// SVG line-art frontend for the meshflat geometry kernel
pub mod svg;

pub use svg::SvgRenderer;
