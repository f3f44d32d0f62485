//! Field editing the active identifier shared by the Users and Wallet panels

use crate::components::text_input::TextInput;
use dioxus::prelude::*;

#[component]
pub fn IdentityField(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "w-72",
            TextInput {
                label: "Active user ID",
                value,
                on_input: move |id| on_change.call(id),
                placeholder: Some("user:1234"),
                monospace: true,
            }
        }
    }
}
