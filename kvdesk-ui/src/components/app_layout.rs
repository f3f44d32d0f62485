//! Console layout view component
//!
//! Provides the overall structure with slots for the header, the tab bar,
//! the identifier field, the active panel, and the notification toast.

use dioxus::prelude::*;

/// Console layout view (pure, props-based)
#[component]
pub fn ConsoleLayoutView(
    /// Active tab panel
    children: Element,
    /// Tab bar below the header
    #[props(default)]
    tab_bar: Option<Element>,
    /// Identifier field shown next to the tab bar
    #[props(default)]
    identity: Option<Element>,
    /// Floating elements (toast)
    #[props(default)]
    extra: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-950 text-gray-200",
            header { class: "border-b border-gray-800 px-6 py-4 space-y-4",
                h1 { class: "text-xl font-bold text-white", "Key-Value Console" }
                div { class: "flex flex-wrap items-end justify-between gap-4",
                    if let Some(tb) = tab_bar {
                        {tb}
                    }
                    if let Some(id) = identity {
                        {id}
                    }
                }
            }
            main { class: "flex-1 overflow-y-auto px-6 py-6", {children} }
            if let Some(ex) = extra {
                {ex}
            }
        }
    }
}
