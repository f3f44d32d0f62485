use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use kvdesk_common::{
    ConsoleState, Genre, NewGenre, NoticeTicket, TransferRequest, UserProfile, Wallet,
};
use kvdesk_core::{ApiError, ConsoleApi, ConsoleHost, Dispatcher, MemoryBackend};
use tokio::sync::oneshot;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Host with a `RefCell` state and a hand-driven expiry timer.
///
/// Only one expiry is ever pending; scheduling a new one replaces it, the
/// way the web host cancels its previous timer task.
#[derive(Clone, Default)]
pub struct ManualHost {
    state: Rc<RefCell<ConsoleState>>,
    pending: Rc<RefCell<Option<(NoticeTicket, Duration)>>>,
}

#[allow(dead_code)]
impl ManualHost {
    pub fn with_state(state: ConsoleState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            pending: Rc::default(),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&ConsoleState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn message(&self) -> Option<String> {
        self.read(|s| s.notification.message().map(str::to_string))
    }

    pub fn pending_expiry(&self) -> Option<(NoticeTicket, Duration)> {
        *self.pending.borrow()
    }

    /// Let the pending expiry timer fire
    pub fn fire_expiry(&self) {
        if let Some((ticket, _)) = self.pending.borrow_mut().take() {
            self.state.borrow_mut().notification.expire(ticket);
        }
    }
}

impl ConsoleHost for ManualHost {
    fn update<R>(&self, f: impl FnOnce(&mut ConsoleState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    fn schedule_expiry(&self, ticket: NoticeTicket, after: Duration) {
        *self.pending.borrow_mut() = Some((ticket, after));
    }
}

/// Wraps a [`MemoryBackend`], records every call, and can hold responses.
///
/// A held call computes its result against the backend immediately, then
/// waits for its gate before returning it. That lets a test complete
/// requests in a different order than they were issued.
#[derive(Default)]
pub struct TestApi {
    pub backend: MemoryBackend,
    calls: RefCell<Vec<String>>,
    gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

#[allow(dead_code)]
impl TestApi {
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            backend: MemoryBackend::seeded(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Hold the next call until the returned sender fires
    pub fn hold_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    async fn pass<T>(&self, call: String, result: Result<T, ApiError>) -> Result<T, ApiError> {
        self.calls.borrow_mut().push(call);
        let gate = self.gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        result
    }
}

#[async_trait(?Send)]
impl ConsoleApi for TestApi {
    async fn list_genres(&self) -> Result<Vec<Genre>, ApiError> {
        let result = self.backend.list_genres().await;
        self.pass("GET /genres".to_string(), result).await
    }

    async fn create_genre(&self, genre: &NewGenre) -> Result<(), ApiError> {
        let result = self.backend.create_genre(genre).await;
        self.pass("POST /genres".to_string(), result).await
    }

    async fn get_user(&self, id: &str) -> Result<UserProfile, ApiError> {
        let result = self.backend.get_user(id).await;
        self.pass(format!("GET /users/{id}"), result).await
    }

    async fn create_user(&self, profile: &UserProfile) -> Result<(), ApiError> {
        let result = self.backend.create_user(profile).await;
        self.pass("POST /users".to_string(), result).await
    }

    async fn update_user(&self, id: &str, profile: &UserProfile) -> Result<(), ApiError> {
        let result = self.backend.update_user(id, profile).await;
        self.pass(format!("PUT /users/{id}"), result).await
    }

    async fn get_wallet(&self, id: &str) -> Result<Wallet, ApiError> {
        let result = self.backend.get_wallet(id).await;
        self.pass(format!("GET /users/{id}/wallet"), result).await
    }

    async fn transfer(&self, id: &str, request: &TransferRequest) -> Result<(), ApiError> {
        let result = self.backend.transfer(id, request).await;
        self.pass(format!("POST /users/{id}/wallet/transfer"), result)
            .await
    }
}

/// A dispatcher over `api` with a fresh default state
#[allow(dead_code)]
pub fn console(api: Rc<TestApi>) -> (Dispatcher<ManualHost>, ManualHost) {
    let host = ManualHost::default();
    (Dispatcher::new(api, host.clone()), host)
}
