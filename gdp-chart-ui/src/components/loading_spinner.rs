//! Loading indicator component.

use dioxus::prelude::*;

/// Inline loading indicator shown next to the country selector.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; font-size: 14px; color: #4b5563;",
            span {
                style: "display: inline-block; width: 16px; height: 16px; border-radius: 50%; border: 2px solid #e5e7eb; border-bottom-color: #3b82f6;",
            }
            "Loading data..."
        }
    }
}
