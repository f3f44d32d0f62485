use crate::pages::spawn_action;
use crate::ConsoleDispatcher;
use dioxus::prelude::*;
use kvdesk_common::GenreForm;
use kvdesk_ui::GenresView;

#[component]
pub fn GenresPanel() -> Element {
    let dispatcher: ConsoleDispatcher = use_context();
    let mut state = dispatcher.host().state();

    let (genres, form) = {
        let s = state.read();
        (s.genres.genres().to_vec(), s.genres.form.clone())
    };

    let reload = dispatcher.clone();
    let create = dispatcher.clone();

    rsx! {
        GenresView {
            genres,
            form,
            on_form_change: move |form: GenreForm| state.write().genres.form = form,
            on_reload: move |_| {
                let dispatcher = reload.clone();
                spawn_action(async move { dispatcher.load_genres().await });
            },
            on_create: move |_| {
                let dispatcher = create.clone();
                spawn_action(async move { dispatcher.create_genre().await });
            },
        }
    }
}
