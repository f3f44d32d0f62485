//! Notification toast for the single console message

use crate::components::button::ChromelessButton;
use crate::components::icons::XIcon;
use dioxus::prelude::*;

/// A dismissible toast showing the current notification.
///
/// Renders nothing when there is no message. Expiry is driven by the
/// caller; the toast only reports manual dismissal.
#[component]
pub fn NotificationToast(
    /// The message to display, if any
    message: Option<String>,
    /// Called when the user dismisses the toast
    on_dismiss: EventHandler<()>,
) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "fixed bottom-6 right-4 bg-gray-900 border border-gray-700 text-white px-6 py-4 rounded-lg shadow-lg z-50 max-w-md",
            role: "status",
            aria_live: "polite",
            div { class: "flex items-center justify-between gap-4",
                div { class: "flex-1",
                    span { "{message}" }
                }
                ChromelessButton {
                    class: Some("text-gray-400 hover:text-white".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
