//! GDP data table component.

use dioxus::prelude::*;
use gdp_data::display::TableRow;

const HEADER_STYLE: &str = "padding: 12px 24px; text-align: left; font-size: 12px; font-weight: 500; color: #6b7280; text-transform: uppercase; letter-spacing: 0.05em;";
const CELL_STYLE: &str = "padding: 16px 24px; white-space: nowrap; font-size: 14px;";

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub rows: Vec<TableRow>,
}

/// Year / GDP / growth table with alternating row shading.
/// Growth cells are green for non-negative rates and red otherwise.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let rows: Vec<(String, String, &TableRow)> = props
        .rows
        .iter()
        .map(|row| {
            let background = if row.shaded { "#f9fafb" } else { "white" };
            let growth_color = if row.growth_positive { "#16a34a" } else { "#dc2626" };
            (
                format!("background: {};", background),
                format!("{} color: {};", CELL_STYLE, growth_color),
                row,
            )
        })
        .collect();
    let value_style = format!("{} color: #111827;", CELL_STYLE);

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                style: "min-width: 100%; border-collapse: collapse;",
                thead {
                    style: "background: #f9fafb;",
                    tr {
                        th { style: HEADER_STYLE, "Year" }
                        th { style: HEADER_STYLE, "GDP (USD)" }
                        th { style: HEADER_STYLE, "Growth Rate (%)" }
                    }
                }
                tbody {
                    for (index, (row_style, growth_style, row)) in rows.iter().enumerate() {
                        tr {
                            key: "{index}",
                            style: "{row_style}",
                            td { style: "{value_style}", "{row.year}" }
                            td { style: "{value_style}", "{row.value}" }
                            td { style: "{growth_style}", "{row.growth}" }
                        }
                    }
                }
            }
        }
    }
}
