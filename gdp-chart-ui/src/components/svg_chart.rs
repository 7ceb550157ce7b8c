//! Container for a pre-rendered SVG chart.

use dioxus::prelude::*;

/// Props for SvgChart
#[derive(Props, Clone, PartialEq)]
pub struct SvgChartProps {
    /// The DOM id for the chart container
    pub id: String,
    /// SVG markup produced by `gdp-chart`
    pub svg: String,
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A container div that inlines an SVG chart.
#[component]
pub fn SvgChart(props: SvgChartProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; overflow-x: auto;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
            dangerous_inner_html: "{props.svg}",
        }
    }
}
