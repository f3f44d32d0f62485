//! Users panel: loaded profile and the create/update form

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, EmptyState, PanelSection};
use crate::components::icons::{PencilIcon, PlusIcon, RefreshIcon};
use crate::components::segmented_control::{Segment, SegmentedControl};
use crate::components::text_input::{InputKind, TextInput};
use dioxus::prelude::*;
use kvdesk_common::{ProfileForm, SubscriptionLevel, UserProfile};

/// Profile view (pure, props-based)
#[component]
pub fn ProfileView(
    /// Identifier the form will create or update
    active_id: String,
    profile: Option<UserProfile>,
    form: ProfileForm,
    on_form_change: EventHandler<ProfileForm>,
    on_load: EventHandler<()>,
    on_create: EventHandler<()>,
    on_update: EventHandler<()>,
    /// Copy the loaded profile into the form
    on_use_loaded: EventHandler<()>,
) -> Element {
    let can_submit = form.is_complete();
    let has_profile = profile.is_some();
    let username_form = form.clone();
    let email_form = form.clone();
    let level_form = form.clone();

    let level_segments = SubscriptionLevel::ALL
        .iter()
        .map(|level| Segment::new(level.label(), level.label()))
        .collect::<Vec<_>>();

    rsx! {
        PanelSection {
            Card { title: Some("Profile"),
                div { class: "flex justify-end gap-2",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        disabled: !has_profile,
                        onclick: move |_| on_use_loaded.call(()),
                        "Use loaded profile"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_load.call(()),
                        RefreshIcon { class: "w-4 h-4" }
                        "Load profile"
                    }
                }
                match profile {
                    Some(profile) => rsx! {
                        ProfileDetails { profile }
                    },
                    None => rsx! {
                        EmptyState { message: "No profile loaded" }
                    },
                }
            }
            Card { title: Some("Create or update"),
                p { class: "text-sm text-gray-400",
                    "Writes to "
                    span { class: "font-mono text-gray-200", "{active_id}" }
                }
                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    TextInput {
                        label: "Username",
                        value: form.username.clone(),
                        required: true,
                        on_input: move |username| {
                            on_form_change.call(ProfileForm { username, ..username_form.clone() })
                        },
                    }
                    TextInput {
                        label: "Email",
                        value: form.email.clone(),
                        kind: InputKind::Email,
                        required: true,
                        on_input: move |email| {
                            on_form_change.call(ProfileForm { email, ..email_form.clone() })
                        },
                    }
                }
                div { class: "space-y-1",
                    span { class: "text-xs uppercase tracking-wide text-gray-400", "Subscription" }
                    div {
                        SegmentedControl {
                            segments: level_segments,
                            selected: form.level.label(),
                            on_select: move |label: &'static str| {
                                if let Some(level) = SubscriptionLevel::ALL
                                    .into_iter()
                                    .find(|level| level.label() == label)
                                {
                                    on_form_change.call(ProfileForm { level, ..level_form.clone() });
                                }
                            },
                        }
                    }
                }
                div { class: "flex justify-end gap-2",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        disabled: !can_submit,
                        onclick: move |_| on_update.call(()),
                        PencilIcon { class: "w-4 h-4" }
                        "Update user"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        disabled: !can_submit,
                        onclick: move |_| on_create.call(()),
                        PlusIcon { class: "w-4 h-4" }
                        "Create user"
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileDetails(profile: UserProfile) -> Element {
    // Levels outside the known tiers are shown as their raw number
    let level = match profile.level() {
        Some(level) => level.label().to_string(),
        None => format!("Level {}", profile.subscription_level),
    };

    rsx! {
        dl { class: "grid grid-cols-[8rem_1fr] gap-y-2 text-sm",
            dt { class: "text-gray-400", "ID" }
            dd { class: "font-mono text-gray-200", "{profile.id}" }
            dt { class: "text-gray-400", "Username" }
            dd { class: "text-white", "{profile.username}" }
            dt { class: "text-gray-400", "Email" }
            dd { class: "text-gray-200", "{profile.email}" }
            dt { class: "text-gray-400", "Subscription" }
            dd { class: "text-gray-200", "{level}" }
        }
    }
}
