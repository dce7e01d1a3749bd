mod bar;
mod config;
mod line;

use std::fmt::Display;
use std::path::PathBuf;

pub use bar::render_bar_chart;
pub use config::{ChartGeometry, RenderConfig};
pub use line::render_throughput_chart;

use crate::error::PlotError;

/// Output formats written for every chart. PNG is the 300 DPI raster
/// artifact; SVG is the vector artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub const ALL: [Self; 2] = [Self::Png, Self::Svg];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// Builds `{prefix}_{kind}.{ext}`, relative to the working directory.
#[must_use]
pub fn artifact_path(prefix: &str, kind: &str, format: ChartFormat) -> PathBuf {
    PathBuf::from(format!("{prefix}_{kind}.{}", format.extension()))
}

/// Plotters backend errors are generic over the backend; stringify them at
/// the crate boundary.
pub(crate) fn render_err<E: Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
