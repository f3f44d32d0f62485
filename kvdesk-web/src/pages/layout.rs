use crate::pages::{GenresPanel, UsersPanel, WalletPanel};
use crate::ConsoleDispatcher;
use dioxus::prelude::*;
use kvdesk_common::Tab;
use kvdesk_ui::{ConsoleLayoutView, IdentityField, NotificationToast, TabBar};

#[component]
pub fn ConsoleLayout() -> Element {
    let dispatcher: ConsoleDispatcher = use_context();
    let mut state = dispatcher.host().state();

    let (active, active_id, message) = {
        let s = state.read();
        (
            s.tabs.active(),
            s.active_id.get().to_string(),
            s.notification.message().map(str::to_string),
        )
    };

    rsx! {
        ConsoleLayoutView {
            tab_bar: rsx! {
                TabBar {
                    active,
                    on_select: move |tab: Tab| state.write().tabs.select(tab),
                }
            },
            identity: rsx! {
                IdentityField {
                    value: active_id,
                    on_change: move |id: String| state.write().active_id.set(id),
                }
            },
            extra: rsx! {
                NotificationToast {
                    message,
                    on_dismiss: move |_| dispatcher.dismiss_notification(),
                }
            },
            match active {
                Tab::Genres => rsx! {
                    GenresPanel {}
                },
                Tab::Users => rsx! {
                    UsersPanel {}
                },
                Tab::Wallet => rsx! {
                    WalletPanel {}
                },
            }
        }
    }
}
