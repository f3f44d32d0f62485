//! Wallet panel: balances and the coin to credit transfer

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, EmptyState, PanelSection};
use crate::components::icons::{ArrowRightLeftIcon, RefreshIcon};
use crate::components::text_input::{InputKind, TextInput};
use crate::components::utils::format_count;
use dioxus::prelude::*;
use kvdesk_common::{Wallet, WalletForm};

/// Wallet view (pure, props-based)
#[component]
pub fn WalletView(
    active_id: String,
    wallet: Option<Wallet>,
    form: WalletForm,
    on_form_change: EventHandler<WalletForm>,
    on_load: EventHandler<()>,
    on_transfer: EventHandler<()>,
) -> Element {
    let can_submit = form.is_complete();

    rsx! {
        PanelSection {
            Card { title: Some("Wallet"),
                div { class: "flex items-center justify-between",
                    span { class: "font-mono text-sm text-gray-400", "{active_id}" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_load.call(()),
                        RefreshIcon { class: "w-4 h-4" }
                        "Load wallet"
                    }
                }
                match wallet {
                    Some(wallet) => rsx! {
                        div { class: "grid grid-cols-2 gap-4",
                            Balance { label: "Coins", amount: wallet.coin_balance }
                            Balance { label: "Credits", amount: wallet.credit_balance }
                        }
                    },
                    None => rsx! {
                        EmptyState { message: "No wallet loaded" }
                    },
                }
            }
            Card { title: Some("Transfer coins to credits"),
                div { class: "flex items-end gap-4",
                    div { class: "flex-1",
                        TextInput {
                            label: "Amount",
                            value: form.amount.clone(),
                            kind: InputKind::Numeric,
                            required: true,
                            placeholder: Some("20"),
                            on_input: move |amount| on_form_change.call(WalletForm { amount }),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        disabled: !can_submit,
                        onclick: move |_| on_transfer.call(()),
                        ArrowRightLeftIcon { class: "w-4 h-4" }
                        "Transfer"
                    }
                }
            }
        }
    }
}

#[component]
fn Balance(label: &'static str, amount: i64) -> Element {
    rsx! {
        div { class: "rounded-lg bg-gray-800/50 px-4 py-3",
            div { class: "text-xs uppercase tracking-wide text-gray-400", "{label}" }
            div { class: "text-2xl font-semibold text-white tabular-nums", {format_count(amount)} }
        }
    }
}
