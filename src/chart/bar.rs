use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ChartFormat, ChartGeometry, RenderConfig, artifact_path, render_err};
use crate::error::{PlotError, Result};
use crate::series::{DataSeries, ProtocolResultSet};

const CHART_KIND: &str = "bar_chart";
const TITLE: &str = "Throughput Comparison at Key Contention Levels";
const X_LABEL: &str = "Contention Index";
const Y_LABEL: &str = "Throughput (txns/sec)";

/// Bar width as a fraction of one category unit; the three protocol bars sit
/// at category offsets -WIDTH, 0, +WIDTH.
const BAR_WIDTH: f64 = 0.25;

const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
const INDIAN_RED: RGBColor = RGBColor(205, 92, 92);
const FOREST_GREEN: RGBColor = RGBColor(34, 139, 34);

/// Compares the three protocols at up to five representative contention
/// levels, writing `{prefix}_bar_chart.png` and `{prefix}_bar_chart.svg`.
///
/// All three series must be positionally aligned with the baseline; bar
/// values for every protocol are read at baseline-derived positions.
pub fn render_bar_chart(
    results: &ProtocolResultSet,
    config: &RenderConfig,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    results.ensure_aligned()?;

    let n = results.baseline.len();
    if n == 0 {
        return Err(PlotError::EmptyData {
            chart: "bar",
            reason: "baseline series has no rows".to_string(),
        });
    }

    let indices = representative_indices(n);
    let labels = category_labels(results.baseline.contention(), &indices);

    // The comparison chart is wider than the sweep chart.
    let config = config.clone().with_figure_size(10.0, 5.0);

    let mut written = Vec::with_capacity(ChartFormat::ALL.len());
    for format in ChartFormat::ALL {
        let path = artifact_path(prefix, CHART_KIND, format);
        let geometry = config.geometry(format);
        match format {
            ChartFormat::Png => {
                let root = BitMapBackend::new(&path, geometry.size).into_drawing_area();
                draw(&root, &geometry, &config, results, &indices, &labels)?;
                root.present().map_err(render_err)?;
            }
            ChartFormat::Svg => {
                let root = SVGBackend::new(&path, geometry.size).into_drawing_area();
                draw(&root, &geometry, &config, results, &indices, &labels)?;
                root.present().map_err(render_err)?;
            }
        }
        written.push(path);
    }
    Ok(written)
}

/// Picks the first point, the three approximate quartile points, and the
/// last point of an `n`-row series: distinct, ascending, between 1 and 5
/// positions depending on `n`.
fn representative_indices(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let mut picks = vec![0, n / 4, n / 2, 3 * n / 4, n - 1];
    picks.retain(|&i| i < n);
    picks.sort_unstable();
    picks.dedup();
    picks
}

/// Category labels are the baseline contention values at the selected
/// positions, formatted to four decimal places.
fn category_labels(contention: &[f64], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| format!("{:.4}", contention[i])).collect()
}

fn selected_max(series: &DataSeries, indices: &[usize]) -> f64 {
    indices
        .iter()
        .map(|&i| series.throughput()[i])
        .fold(0.0, f64::max)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    geom: &ChartGeometry,
    config: &RenderConfig,
    results: &ProtocolResultSet,
    indices: &[usize],
    labels: &[String],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(render_err)?;

    let k = indices.len();
    let y_max = [
        &results.baseline,
        &results.variant,
        &results.variant_optimized,
    ]
    .iter()
    .map(|series| selected_max(series, indices))
    .fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let family = config.font_family.as_str();
    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (family, geom.title_px).into_font())
        .margin(geom.margin)
        .x_label_area_size(geom.x_label_area)
        .y_label_area_size(geom.y_label_area)
        .build_cartesian_2d(-0.5..(k as f64 - 0.5), 0.0..y_max)
        .map_err(render_err)?;

    // Categories sit at integer offsets; map tick positions back to the
    // contention labels and keep only horizontal gridlines.
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(k)
        .x_label_formatter(&|x| {
            let nearest = x.round();
            if (x - nearest).abs() > 0.25 || nearest < 0.0 {
                return String::new();
            }
            labels.get(nearest as usize).cloned().unwrap_or_default()
        })
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style((family, geom.axis_label_px))
        .label_style((family, geom.tick_px))
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.1))
        .draw()
        .map_err(render_err)?;

    let groups: [(&str, &DataSeries, RGBColor, f64); 3] = [
        ("2PL", &results.baseline, STEEL_BLUE, -BAR_WIDTH),
        ("VLL", &results.variant, INDIAN_RED, 0.0),
        ("VLL+SCA", &results.variant_optimized, FOREST_GREEN, BAR_WIDTH),
    ];

    for (label, series, color, offset) in groups {
        let throughput = series.throughput();
        chart
            .draw_series(indices.iter().enumerate().map(|(slot, &i)| {
                let center = slot as f64 + offset;
                Rectangle::new(
                    [
                        (center - BAR_WIDTH / 2.0, 0.0),
                        (center + BAR_WIDTH / 2.0, throughput[i]),
                    ],
                    color.filled(),
                )
            }))
            .map_err(render_err)?
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

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
#[path = "bar_tests.rs"]
mod tests;
