//! Tab bar switching between the console panels

use crate::components::segmented_control::{Segment, SegmentedControl};
use dioxus::prelude::*;
use kvdesk_common::Tab;

#[component]
pub fn TabBar(active: Tab, on_select: EventHandler<Tab>) -> Element {
    let segments = Tab::ALL
        .iter()
        .map(|tab| Segment::new(tab.label(), tab.key()))
        .collect::<Vec<_>>();

    rsx! {
        nav { aria_label: "Console sections",
            SegmentedControl {
                segments,
                selected: active.key(),
                on_select: move |key: &'static str| {
                    if let Some(tab) = Tab::from_key(key) {
                        on_select.call(tab);
                    }
                },
            }
        }
    }
}
