use crate::pages::spawn_action;
use crate::ConsoleDispatcher;
use dioxus::prelude::*;
use kvdesk_common::ProfileForm;
use kvdesk_ui::ProfileView;

#[component]
pub fn UsersPanel() -> Element {
    let dispatcher: ConsoleDispatcher = use_context();
    let mut state = dispatcher.host().state();

    let (active_id, profile, form) = {
        let s = state.read();
        (
            s.active_id.get().to_string(),
            s.profile.profile().cloned(),
            s.profile.form.clone(),
        )
    };

    let load = dispatcher.clone();
    let create = dispatcher.clone();
    let update = dispatcher.clone();

    rsx! {
        ProfileView {
            active_id,
            profile,
            form,
            on_form_change: move |form: ProfileForm| state.write().profile.form = form,
            on_load: move |_| {
                let dispatcher = load.clone();
                spawn_action(async move { dispatcher.load_profile().await });
            },
            on_create: move |_| {
                let dispatcher = create.clone();
                spawn_action(async move { dispatcher.create_user().await });
            },
            on_update: move |_| {
                let dispatcher = update.clone();
                spawn_action(async move { dispatcher.update_user().await });
            },
            on_use_loaded: move |_| {
                let mut s = state.write();
                if let Some(profile) = s.profile.profile().cloned() {
                    s.profile.form.fill_from(&profile);
                }
            },
        }
    }
}
