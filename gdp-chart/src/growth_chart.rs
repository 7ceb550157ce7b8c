use crate::{draw_err, finite_range, year_bounds, ChartSize, RenderError, GROWTH_GREEN};
use gdp_data::display::{
    annotation_indices, growth_annotation, GROWTH_AXIS_LABEL, GROWTH_CHART_TITLE, GROWTH_LEGEND,
};
use gdp_data::{NormalizedSeries, SeriesPoint};
use plotters::prelude::*;

/// Half the width of a bar, in years.
const BAR_HALF_WIDTH: f64 = 0.35;

fn plottable(p: SeriesPoint) -> Option<(i32, f64)> {
    match p.year {
        Some(year) if p.growth_rate.is_finite() => Some((year, p.growth_rate)),
        _ => None,
    }
}

/// Render year-over-year growth as bars around a zero baseline.
///
/// Entries without a valid year or with a non-finite rate are skipped.
pub fn render_growth_chart(
    series: &NormalizedSeries,
    size: ChartSize,
) -> Result<String, RenderError> {
    let points: Vec<(i32, f64)> = series.points().filter_map(plottable).collect();
    if points.is_empty() {
        return Err(RenderError::NothingToPlot);
    }

    let (x_min, x_max) = year_bounds(&points);
    let (lo, hi) = points
        .iter()
        .fold((0.0f64, 0.0f64), |(lo, hi), (_, rate)| (lo.min(*rate), hi.max(*rate)));
    let pad = (hi * 0.1 - lo * 0.1).max(1.0);
    let y_range = finite_range(lo - pad, hi + pad)?;
    let x_range = (x_min as f64 - 1.0)..(x_max as f64 + 1.0);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.into()).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(GROWTH_CHART_TITLE, ("sans-serif", 20))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range.clone(), y_range)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc(GROWTH_AXIS_LABEL)
            .x_labels(12)
            .x_label_formatter(&|year| format!("{:.0}", year))
            .y_label_formatter(&|rate| format!("{:.0}%", rate))
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(points.iter().map(|(year, rate)| {
                let x = *year as f64;
                Rectangle::new(
                    [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, *rate)],
                    GROWTH_GREEN.mix(0.8).filled(),
                )
            }))
            .map_err(draw_err)?
            .label(GROWTH_LEGEND)
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], GROWTH_GREEN.filled()));

        chart
            .draw_series(LineSeries::new(
                vec![(x_range.start, 0.0), (x_range.end, 0.0)],
                BLACK.stroke_width(1),
            ))
            .map_err(draw_err)?;

        chart
            .draw_series(
                annotation_indices(series.len())
                    .filter_map(|i| series.get(i).and_then(plottable))
                    .map(|(year, rate)| {
                        Text::new(growth_annotation(rate), (year as f64, rate), ("sans-serif", 11))
                    }),
            )
            .map_err(draw_err)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}
