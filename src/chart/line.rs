use std::ops::Range;
use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ChartFormat, ChartGeometry, RenderConfig, artifact_path, render_err};
use crate::error::{PlotError, Result};
use crate::series::ProtocolResultSet;

const CHART_KIND: &str = "throughput";
const TITLE: &str = "Transactional Throughput vs. Contention";
const X_LABEL: &str = "Contention Index";
const Y_LABEL: &str = "Throughput (txns/sec)";

/// Draws the three protocol sweeps as a log-x line chart and writes
/// `{prefix}_throughput.png` and `{prefix}_throughput.svg`.
///
/// Returns the artifact paths in write order.
pub fn render_throughput_chart(
    results: &ProtocolResultSet,
    config: &RenderConfig,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    let (x_range, y_range) = data_extent(results)?;

    let mut written = Vec::with_capacity(ChartFormat::ALL.len());
    for format in ChartFormat::ALL {
        let path = artifact_path(prefix, CHART_KIND, format);
        let geometry = config.geometry(format);
        match format {
            ChartFormat::Png => {
                let root = BitMapBackend::new(&path, geometry.size).into_drawing_area();
                draw(&root, &geometry, config, results, x_range.clone(), y_range.clone())?;
                root.present().map_err(render_err)?;
            }
            ChartFormat::Svg => {
                let root = SVGBackend::new(&path, geometry.size).into_drawing_area();
                draw(&root, &geometry, config, results, x_range.clone(), y_range.clone())?;
                root.present().map_err(render_err)?;
            }
        }
        written.push(path);
    }
    Ok(written)
}

/// X extent over the positive contention values of all three series, with
/// multiplicative padding (a log axis cannot place values <= 0), plus the
/// y range. The y lower bound is always exactly 0, whatever the data minimum.
fn data_extent(results: &ProtocolResultSet) -> Result<(Range<f64>, Range<f64>)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = 0.0_f64;

    for series in [
        &results.baseline,
        &results.variant,
        &results.variant_optimized,
    ] {
        for &x in series.contention() {
            if x > 0.0 {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
            }
        }
        for &y in series.throughput() {
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() || !x_max.is_finite() {
        return Err(PlotError::EmptyData {
            chart: "throughput",
            reason: "no positive contention_index values in any series".to_string(),
        });
    }

    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };
    Ok((x_min * 0.9..x_max * 1.1, 0.0..y_max))
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    geom: &ChartGeometry,
    config: &RenderConfig,
    results: &ProtocolResultSet,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(render_err)?;

    let family = config.font_family.as_str();
    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (family, geom.title_px).into_font())
        .margin(geom.margin)
        .x_label_area_size(geom.x_label_area)
        .y_label_area_size(geom.y_label_area)
        .build_cartesian_2d(x_range.log_scale(), y_range)
        .map_err(render_err)?;

    // Mesh first, so the grid sits behind the data.
    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style((family, geom.axis_label_px))
        .label_style((family, geom.tick_px))
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.1))
        .draw()
        .map_err(render_err)?;

    let marker = geom.marker;
    let stroke = geom.stroke;
    let on_axis = |&(x, _): &(f64, f64)| x > 0.0;

    chart
        .draw_series(LineSeries::new(
            results.baseline.points().filter(on_axis),
            BLUE.stroke_width(stroke),
        ))
        .map_err(render_err)?
        .label("2PL")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    chart
        .draw_series(results.baseline.points().filter(on_axis).map(|coord| {
            EmptyElement::at(coord)
                + Rectangle::new([(-marker, -marker), (marker, marker)], BLUE.filled())
        }))
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            results.variant.points().filter(on_axis),
            RED.stroke_width(stroke),
        ))
        .map_err(render_err)?
        .label("VLL")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    chart
        .draw_series(
            results
                .variant
                .points()
                .filter(on_axis)
                .map(|coord| TriangleMarker::new(coord, marker, RED.filled())),
        )
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            results.variant_optimized.points().filter(on_axis),
            GREEN.stroke_width(stroke),
        ))
        .map_err(render_err)?
        .label("VLL with SCA")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));
    chart
        .draw_series(
            results
                .variant_optimized
                .points()
                .filter(on_axis)
                .map(|coord| Circle::new(coord, marker, GREEN.filled())),
        )
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((family, geom.legend_px))
        .draw()
        .map_err(render_err)?;

    Ok(())
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
