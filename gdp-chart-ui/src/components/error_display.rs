//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 4px 12px; font-size: 14px; background: #FEF2F2; color: #DC2626; border-radius: 4px;",
            "Error: {props.message}"
        }
    }
}
