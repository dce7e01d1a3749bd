use super::ChartFormat;

const POINTS_PER_INCH: f64 = 72.0;

/// Fixed publication style shared by both renderers.
///
/// This is an explicit value handed to each render call, so rendering output
/// depends only on the config passed in, never on call order. Font sizes are
/// in points; pixel geometry is derived per output format from the DPI.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub font_family: String,
    pub base_font_pt: f64,
    pub title_pt: f64,
    pub axis_label_pt: f64,
    pub tick_label_pt: f64,
    pub legend_pt: f64,
    pub figure_width_in: f64,
    pub figure_height_in: f64,
    /// Resolution of vector output.
    pub display_dpi: u32,
    /// Resolution of saved raster artifacts.
    pub save_dpi: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "serif".to_string(),
            base_font_pt: 12.0,
            title_pt: 14.0,
            axis_label_pt: 14.0,
            tick_label_pt: 11.0,
            legend_pt: 11.0,
            figure_width_in: 8.0,
            figure_height_in: 5.0,
            display_dpi: 150,
            save_dpi: 300,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub const fn with_figure_size(mut self, width_in: f64, height_in: f64) -> Self {
        self.figure_width_in = width_in;
        self.figure_height_in = height_in;
        self
    }

    #[must_use]
    pub const fn dpi_for(&self, format: ChartFormat) -> u32 {
        match format {
            ChartFormat::Png => self.save_dpi,
            ChartFormat::Svg => self.display_dpi,
        }
    }

    #[must_use]
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let scale = f64::from(dpi);
        (
            (self.figure_width_in * scale).round() as u32,
            (self.figure_height_in * scale).round() as u32,
        )
    }

    /// Resolves the pixel geometry for one output format.
    #[must_use]
    pub fn geometry(&self, format: ChartFormat) -> ChartGeometry {
        let dpi = self.dpi_for(format);
        let px = |pt: f64| pt * f64::from(dpi) / POINTS_PER_INCH;
        ChartGeometry {
            size: self.pixel_size(dpi),
            title_px: px(self.title_pt),
            axis_label_px: px(self.axis_label_pt),
            tick_px: px(self.tick_label_pt),
            legend_px: px(self.legend_pt),
            // 6pt marker diameter, 1.5pt line width.
            marker: px(3.0).round() as i32,
            stroke: (px(1.5).round() as u32).max(1),
            margin: px(10.0).round() as i32,
            x_label_area: ((px(self.axis_label_pt) + px(self.tick_label_pt)) * 2.0).ceil() as i32,
            y_label_area: (px(self.tick_label_pt) * 6.0).ceil() as i32,
        }
    }
}

/// Pixel-space layout for one chart at one DPI.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub size: (u32, u32),
    pub title_px: f64,
    pub axis_label_px: f64,
    pub tick_px: f64,
    pub legend_px: f64,
    pub marker: i32,
    pub stroke: u32,
    pub margin: i32,
    pub x_label_area: i32,
    pub y_label_area: i32,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
