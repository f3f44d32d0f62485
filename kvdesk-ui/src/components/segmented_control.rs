//! Segmented control component - a group of toggle buttons where one is selected

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// A single segment in a segmented control
#[derive(Clone, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub value: &'static str,
}

impl Segment {
    pub fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// A row of toggle buttons where exactly one is selected
#[component]
pub fn SegmentedControl(
    segments: Vec<Segment>,
    selected: &'static str,
    on_select: EventHandler<&'static str>,
) -> Element {
    rsx! {
        div { class: "inline-flex gap-1 bg-gray-800/50 rounded-lg p-1", role: "tablist",
            for segment in segments {
                Button {
                    key: "{segment.value}",
                    variant: if segment.value == selected { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    size: ButtonSize::Small,
                    onclick: move |_| on_select.call(segment.value),
                    "{segment.label}"
                }
            }
        }
    }
}
