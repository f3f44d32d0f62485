//! Labelled text input

use dioxus::prelude::*;

/// What kind of text the field takes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    /// Free text with a numeric keyboard hint. The value is still a string;
    /// parsing happens when the form is submitted.
    Numeric,
}

/// Text input with a label above it
#[component]
pub fn TextInput(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] kind: InputKind,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] required: bool,
    #[props(default)] monospace: bool,
) -> Element {
    let (input_type, input_mode) = match kind {
        InputKind::Text => ("text", None),
        InputKind::Email => ("email", None),
        InputKind::Numeric => ("text", Some("numeric")),
    };

    let font_class = if monospace { "font-mono" } else { "" };

    rsx! {
        label { class: "block space-y-1",
            span { class: "text-xs uppercase tracking-wide text-gray-400",
                "{label}"
                if required {
                    span { class: "text-indigo-400", " *" }
                }
            }
            input {
                r#type: input_type,
                inputmode: input_mode,
                class: "w-full bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-200 placeholder-gray-500 {font_class}",
                value: "{value}",
                placeholder,
                required,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
