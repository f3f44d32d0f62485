//! kvdesk-web - browser admin console
//!
//! Owns the console state signal and the dispatcher, and wires the pure
//! views from `kvdesk-ui` to them.

pub mod host;
pub mod pages;

use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use kvdesk_common::ConsoleState;
use kvdesk_core::{ConsoleApi, ConsoleConfig, Dispatcher};
use tracing::info;

use host::WebHost;
use pages::ConsoleLayout;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Dispatcher type shared through context
pub type ConsoleDispatcher = Dispatcher<WebHost>;

#[cfg(not(feature = "demo"))]
fn backend(config: &ConsoleConfig) -> Rc<dyn ConsoleApi> {
    Rc::new(kvdesk_core::HttpApi::new(config.api_base_url.as_str()))
}

#[cfg(feature = "demo")]
fn backend(_config: &ConsoleConfig) -> Rc<dyn ConsoleApi> {
    info!("Using the in-memory demo backend");
    Rc::new(kvdesk_core::MemoryBackend::seeded())
}

#[component]
pub fn App() -> Element {
    let config = use_hook(ConsoleConfig::from_build_env);
    let state = use_signal(|| ConsoleState::with_user(config.default_user_id.clone()));
    let expiry_task = use_signal(|| None::<Task>);

    let dispatcher = use_context_provider(|| {
        Dispatcher::new(backend(&config), WebHost::new(state, expiry_task))
            .with_notification_ttl(config.notification_ttl())
    });

    use_hook(move || {
        if config.load_genres_on_start {
            info!("Loading genres on start");
            pages::spawn_action(async move { dispatcher.load_genres().await });
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ConsoleLayout {}
    }
}
