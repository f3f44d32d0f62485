use crate::pages::spawn_action;
use crate::ConsoleDispatcher;
use dioxus::prelude::*;
use kvdesk_common::WalletForm;
use kvdesk_ui::WalletView;

#[component]
pub fn WalletPanel() -> Element {
    let dispatcher: ConsoleDispatcher = use_context();
    let mut state = dispatcher.host().state();

    let (active_id, wallet, form) = {
        let s = state.read();
        (
            s.active_id.get().to_string(),
            s.wallet.wallet().copied(),
            s.wallet.form.clone(),
        )
    };

    let load = dispatcher.clone();
    let transfer = dispatcher.clone();

    rsx! {
        WalletView {
            active_id,
            wallet,
            form,
            on_form_change: move |form: WalletForm| state.write().wallet.form = form,
            on_load: move |_| {
                let dispatcher = load.clone();
                spawn_action(async move { dispatcher.load_wallet().await });
            },
            on_transfer: move |_| {
                let dispatcher = transfer.clone();
                spawn_action(async move { dispatcher.transfer().await });
            },
        }
    }
}
