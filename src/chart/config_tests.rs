use super::*;

#[test]
fn defaults_match_publication_style() {
    let config = RenderConfig::default();

    assert_eq!(config.font_family, "serif");
    assert!((config.base_font_pt - 12.0).abs() < f64::EPSILON);
    assert!((config.title_pt - 14.0).abs() < f64::EPSILON);
    assert!((config.axis_label_pt - 14.0).abs() < f64::EPSILON);
    assert!((config.tick_label_pt - 11.0).abs() < f64::EPSILON);
    assert!((config.legend_pt - 11.0).abs() < f64::EPSILON);
    assert!((config.figure_width_in - 8.0).abs() < f64::EPSILON);
    assert!((config.figure_height_in - 5.0).abs() < f64::EPSILON);
    assert_eq!(config.display_dpi, 150);
    assert_eq!(config.save_dpi, 300);
}

#[test]
fn raster_artifacts_use_save_dpi() {
    let config = RenderConfig::default();

    assert_eq!(config.dpi_for(ChartFormat::Png), 300);
    assert_eq!(config.pixel_size(300), (2400, 1500));
}

#[test]
fn vector_artifacts_use_display_dpi() {
    let config = RenderConfig::default();

    assert_eq!(config.dpi_for(ChartFormat::Svg), 150);
    assert_eq!(config.pixel_size(150), (1200, 750));
}

#[test]
fn geometry_scales_points_to_pixels() {
    let geometry = RenderConfig::default().geometry(ChartFormat::Png);

    assert_eq!(geometry.size, (2400, 1500));
    // 14pt at 300 DPI.
    assert!((geometry.title_px - 14.0 * 300.0 / 72.0).abs() < 1e-9);
    assert!((geometry.tick_px - 11.0 * 300.0 / 72.0).abs() < 1e-9);
    // 3pt marker radius rounds to 13px, 1.5pt stroke to 6px.
    assert_eq!(geometry.marker, 13);
    assert_eq!(geometry.stroke, 6);
}

#[test]
fn stroke_never_rounds_to_zero() {
    let config = RenderConfig {
        display_dpi: 20,
        ..RenderConfig::default()
    };

    assert!(config.geometry(ChartFormat::Svg).stroke >= 1);
}

#[test]
fn with_figure_size_overrides_dimensions() {
    let config = RenderConfig::default().with_figure_size(10.0, 5.0);

    assert_eq!(config.pixel_size(300), (3000, 1500));
    // The rest of the style is untouched.
    assert_eq!(config.font_family, "serif");
}

#[test]
fn equal_configs_resolve_identical_geometry() {
    // Style is a value, not ambient state: building the config twice cannot
    // change what a renderer receives.
    let first = RenderConfig::default();
    let second = RenderConfig::default();

    assert_eq!(first, second);
    assert_eq!(
        first.geometry(ChartFormat::Png),
        second.geometry(ChartFormat::Png)
    );
}
