use crate::{draw_err, finite_range, year_bounds, ChartSize, RenderError, GDP_BLUE};
use gdp_data::display::{
    annotation_indices, gdp_chart_title, value_annotation, GDP_AXIS_LABEL, GDP_LEGEND,
};
use gdp_data::{NormalizedSeries, SeriesPoint};
use gdp_econ::Country;
use log::debug;
use plotters::prelude::*;

fn plottable(p: SeriesPoint) -> Option<(i32, f64)> {
    match p.year {
        Some(year) if p.value.is_finite() && p.value > 0.0 => Some((year, p.value)),
        _ => None,
    }
}

/// Render GDP by year as a line on a logarithmic y axis.
///
/// Entries without a valid year, or whose value is not a positive finite
/// number, cannot sit on a log axis and are left out of the drawing.
pub fn render_gdp_chart(
    country: Country,
    series: &NormalizedSeries,
    size: ChartSize,
) -> Result<String, RenderError> {
    let points: Vec<(i32, f64)> = series.points().filter_map(plottable).collect();
    if points.is_empty() {
        return Err(RenderError::NothingToPlot);
    }
    debug!(
        "Plotting {} of {} GDP points for {}",
        points.len(),
        series.len(),
        country.slug()
    );

    let (x_min, x_max) = year_bounds(&points);
    let (y_min, y_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
            (lo.min(*v), hi.max(*v))
        });
    let y_range = finite_range(y_min * 0.8, y_max * 1.25)?;
    let title = gdp_chart_title(country, series);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.into()).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 20))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max + 1, y_range.log_scale())
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc(GDP_AXIS_LABEL)
            .x_labels(12)
            .x_label_formatter(&|year| year.to_string())
            .y_label_formatter(&|value| format!("{:.0}B", value))
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), GDP_BLUE.stroke_width(2)))
            .map_err(draw_err)?
            .label(GDP_LEGEND)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GDP_BLUE));

        chart
            .draw_series(
                points
                    .iter()
                    .map(|(year, value)| Circle::new((*year, *value), 3, GDP_BLUE.filled())),
            )
            .map_err(draw_err)?;

        chart
            .draw_series(
                annotation_indices(series.len())
                    .filter_map(|i| series.get(i).and_then(plottable))
                    .map(|(year, value)| {
                        Text::new(value_annotation(value), (year, value), ("sans-serif", 11))
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

#[cfg(test)]
mod tests {
    use super::*;
    use gdp_data::normalize;
    use gdp_econ::RawObservation;
    use gdp_utils::dates::ZonePolicy;

    #[test]
    fn test_render_gdp_chart_produces_svg() {
        let records = vec![
            RawObservation::new(Some("Sweden"), "1960-12-31T00:00:00", 15.82),
            RawObservation::new(Some("Sweden"), "1961-12-31T00:00:00", 17.41),
            RawObservation::new(Some("Sweden"), "1962-12-31T00:00:00", 18.9),
        ];
        let series = normalize(&records, ZonePolicy::Utc);
        let svg = render_gdp_chart(Country::Sweden, &series, ChartSize::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Sweden GDP Growth (1960-1962) - Logarithmic Scale"));
        assert!(svg.contains("15.8B"));
    }

    #[test]
    fn test_empty_series_is_nothing_to_plot() {
        let result = render_gdp_chart(
            Country::Mexico,
            &NormalizedSeries::default(),
            ChartSize::default(),
        );
        assert!(matches!(result, Err(RenderError::NothingToPlot)));
    }

    #[test]
    fn test_values_near_f64_max_are_out_of_range() {
        let records = vec![
            RawObservation::new(Some("Sweden"), "1960-12-31", 1.5e308),
            RawObservation::new(Some("Sweden"), "1961-12-31", 1.6e308),
        ];
        let series = normalize(&records, ZonePolicy::Utc);
        let result = render_gdp_chart(Country::Sweden, &series, ChartSize::default());
        assert!(matches!(result, Err(RenderError::OutOfRange)));
    }

    #[test]
    fn test_annotations_follow_series_positions() {
        // Index 0 is not positive and is not drawn; labels stay on 0 and 5
        let values = [0.0, 11.0, 22.0, 33.0, 44.0, 55.0];
        let records: Vec<RawObservation> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                RawObservation::new(Some("Mexico"), &format!("{}-12-31", 1990 + i), *v)
            })
            .collect();
        let series = normalize(&records, ZonePolicy::Utc);
        let svg = render_gdp_chart(Country::Mexico, &series, ChartSize::default()).unwrap();
        assert!(svg.contains("55.0B"));
        // Counting only drawn points would label index 1 instead
        assert!(!svg.contains("11.0B"));
    }

    #[test]
    fn test_non_positive_values_are_not_plotted() {
        let records = vec![
            RawObservation::new(Some("Mexico"), "1960-12-31T00:00:00", 0.0),
            RawObservation::new(Some("Mexico"), "1961-12-31T00:00:00", f64::NAN),
        ];
        let series = normalize(&records, ZonePolicy::Utc);
        let result = render_gdp_chart(Country::Mexico, &series, ChartSize::default());
        assert!(matches!(result, Err(RenderError::NothingToPlot)));
    }
}
