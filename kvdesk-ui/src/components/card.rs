//! Layout and card components for the panels

use dioxus::prelude::*;

/// Layout wrapper for one tab's content pane.
///
/// Constrains width and provides consistent vertical spacing.
#[component]
pub fn PanelSection(children: Element) -> Element {
    rsx! {
        div { class: "max-w-3xl space-y-6", {children} }
    }
}

/// Bordered card with an optional heading.
#[component]
pub fn Card(
    #[props(default)] title: Option<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "border border-gray-700 rounded-lg p-6 space-y-4",
            if let Some(title) = title {
                h2 { class: "text-lg font-semibold text-white", "{title}" }
            }
            {children}
        }
    }
}

/// Muted line shown where a snapshot has nothing to render yet
#[component]
pub fn EmptyState(message: &'static str) -> Element {
    rsx! {
        p { class: "text-sm text-gray-500 italic", "{message}" }
    }
}
