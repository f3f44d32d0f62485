//! Dioxus-backed console host

use std::time::Duration;

use dioxus::core::{spawn_forever, Task};
use dioxus::prelude::*;
use kvdesk_common::{ConsoleState, NoticeTicket};
use kvdesk_core::ConsoleHost;
use tracing::debug;

/// Console state in a signal, with one pending notification expiry task.
///
/// Both handles are `Copy`, so clones of the host (and of the dispatcher
/// that owns it) all see the same state.
#[derive(Clone, Copy)]
pub struct WebHost {
    state: Signal<ConsoleState>,
    expiry_task: Signal<Option<Task>>,
}

impl WebHost {
    pub fn new(state: Signal<ConsoleState>, expiry_task: Signal<Option<Task>>) -> Self {
        Self { state, expiry_task }
    }

    pub fn state(&self) -> Signal<ConsoleState> {
        self.state
    }
}

impl ConsoleHost for WebHost {
    fn update<R>(&self, f: impl FnOnce(&mut ConsoleState) -> R) -> R {
        let mut state = self.state;
        state.with_mut(f)
    }

    fn schedule_expiry(&self, ticket: NoticeTicket, after: Duration) {
        let mut expiry_task = self.expiry_task;
        let mut state = self.state;
        if let Some(task) = expiry_task.take() {
            task.cancel();
        }
        // Lives outside any panel so switching tabs does not cancel it
        let task = spawn_forever(async move {
            sleep_ms(after.as_millis() as u64).await;
            if state.with_mut(|s| s.notification.expire(ticket)) {
                debug!("Notification {:?} expired", ticket);
            }
        });
        expiry_task.set(task.into());
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
