//! Genres panel: catalogue table and create form

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, EmptyState, PanelSection};
use crate::components::icons::{PlusIcon, RefreshIcon};
use crate::components::text_input::{InputKind, TextInput};
use crate::components::utils::format_count;
use dioxus::prelude::*;
use kvdesk_common::{Genre, GenreForm};

/// Genres view (pure, props-based)
///
/// Form edits are reported as whole updated forms so the caller can store
/// them without knowing which field changed.
#[component]
pub fn GenresView(
    genres: Vec<Genre>,
    form: GenreForm,
    on_form_change: EventHandler<GenreForm>,
    on_reload: EventHandler<()>,
    on_create: EventHandler<()>,
) -> Element {
    let can_submit = form.is_complete();
    let id_form = form.clone();
    let name_form = form.clone();
    let listeners_form = form.clone();

    rsx! {
        PanelSection {
            Card { title: Some("Genres"),
                div { class: "flex justify-end",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_reload.call(()),
                        RefreshIcon { class: "w-4 h-4" }
                        "Reload"
                    }
                }
                if genres.is_empty() {
                    EmptyState { message: "No genres loaded" }
                } else {
                    GenreTable { genres }
                }
            }
            Card { title: Some("Create genre"),
                div { class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                    TextInput {
                        label: "ID",
                        value: form.id.clone(),
                        required: true,
                        monospace: true,
                        placeholder: Some("ROCK"),
                        on_input: move |id| on_form_change.call(GenreForm { id, ..id_form.clone() }),
                    }
                    TextInput {
                        label: "Name",
                        value: form.name.clone(),
                        required: true,
                        placeholder: Some("Rock"),
                        on_input: move |name| on_form_change.call(GenreForm { name, ..name_form.clone() }),
                    }
                    TextInput {
                        label: "Listeners",
                        value: form.listeners.clone(),
                        kind: InputKind::Numeric,
                        required: true,
                        placeholder: Some("0"),
                        on_input: move |listeners| {
                            on_form_change.call(GenreForm { listeners, ..listeners_form.clone() })
                        },
                    }
                }
                div { class: "flex justify-end",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        disabled: !can_submit,
                        onclick: move |_| on_create.call(()),
                        PlusIcon { class: "w-4 h-4" }
                        "Create genre"
                    }
                }
            }
        }
    }
}

#[component]
fn GenreTable(genres: Vec<Genre>) -> Element {
    rsx! {
        table { class: "w-full text-left text-sm",
            thead { class: "text-xs uppercase text-gray-400 border-b border-gray-700",
                tr {
                    th { class: "py-2 pr-4", "ID" }
                    th { class: "py-2 pr-4", "Name" }
                    th { class: "py-2 text-right", "Listeners" }
                }
            }
            tbody {
                for genre in genres {
                    tr { key: "{genre.id}", class: "border-b border-gray-800 last:border-0",
                        td { class: "py-2 pr-4 font-mono text-gray-300", "{genre.id}" }
                        td { class: "py-2 pr-4 text-white", "{genre.name}" }
                        td { class: "py-2 text-right tabular-nums", {format_count(genre.listeners)} }
                    }
                }
            }
        }
    }
}
