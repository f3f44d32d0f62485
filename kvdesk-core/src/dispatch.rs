//! Action dispatcher - turns user actions into backend calls and state updates
//!
//! Every action follows the same shape: read what it needs from the state at
//! call time, await the backend, then write the outcome back and post a
//! notification. Errors stop here; nothing propagates past an action.
//!
//! Reads are fenced per view model: a completion is applied only if no newer
//! read for the same model was issued while it was in flight.

use std::rc::Rc;
use std::time::Duration;

use kvdesk_common::{
    ConsoleState, NoticeTicket, ReadOutcome, RequestSeq, Snapshot, NOTIFICATION_TTL,
};
use tracing::{debug, info, warn};

use crate::api::ConsoleApi;
use crate::error::ApiError;

/// Static notification texts
pub mod messages {
    pub const GENRES_LOADED: &str = "Genres loaded!";
    pub const GENRES_LOAD_FAILED: &str = "Error loading genres";
    pub const GENRE_CREATED: &str = "Genre created!";
    pub const GENRE_CREATE_FAILED: &str = "Error creating genre";

    pub const PROFILE_LOADED: &str = "Profile loaded!";
    pub const PROFILE_LOAD_FAILED: &str = "Error loading profile";
    pub const USER_CREATED: &str = "User created!";
    pub const USER_CREATE_FAILED: &str = "Error creating user";
    pub const USER_UPDATED: &str = "User updated!";
    pub const USER_UPDATE_FAILED: &str = "Error updating user";

    pub const WALLET_LOADED: &str = "Wallet loaded!";
    pub const WALLET_LOAD_FAILED: &str = "Error loading wallet";
    pub const TRANSFER_COMPLETE: &str = "Transfer complete!";
    pub const TRANSFER_FAILED: &str = "Error transferring credits";
}

/// Where the dispatcher keeps its state and schedules notification expiry.
///
/// The web app backs this with a Dioxus signal and a spawned timer task;
/// tests back it with a `RefCell` and a manual clock.
pub trait ConsoleHost {
    /// Run `f` against the console state
    fn update<R>(&self, f: impl FnOnce(&mut ConsoleState) -> R) -> R;

    /// Arrange for `ticket` to be expired after `after`, cancelling any
    /// expiry scheduled earlier.
    fn schedule_expiry(&self, ticket: NoticeTicket, after: Duration);
}

/// Whether a read posts a notification when it succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feedback {
    /// User-initiated load
    Announce,
    /// Refresh after a mutation; the mutation's message stays up
    Quiet,
}

struct ReadLabels {
    what: &'static str,
    loaded: &'static str,
    failed: &'static str,
}

const GENRES: ReadLabels = ReadLabels {
    what: "genres",
    loaded: messages::GENRES_LOADED,
    failed: messages::GENRES_LOAD_FAILED,
};

const PROFILE: ReadLabels = ReadLabels {
    what: "profile",
    loaded: messages::PROFILE_LOADED,
    failed: messages::PROFILE_LOAD_FAILED,
};

const WALLET: ReadLabels = ReadLabels {
    what: "wallet",
    loaded: messages::WALLET_LOADED,
    failed: messages::WALLET_LOAD_FAILED,
};

/// Per-domain action handlers over a shared [`ConsoleHost`].
///
/// Cheap to clone; clones share the backend and the host.
pub struct Dispatcher<H> {
    api: Rc<dyn ConsoleApi>,
    host: H,
    notification_ttl: Duration,
}

impl<H: Clone> Clone for Dispatcher<H> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            host: self.host.clone(),
            notification_ttl: self.notification_ttl,
        }
    }
}

impl<H: ConsoleHost> Dispatcher<H> {
    pub fn new(api: Rc<dyn ConsoleApi>, host: H) -> Self {
        Self {
            api,
            host,
            notification_ttl: NOTIFICATION_TTL,
        }
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Show `text` and restart the expiry timer
    pub fn notify(&self, text: &str) {
        let ticket = self.host.update(|s| s.notification.notify(text));
        self.host.schedule_expiry(ticket, self.notification_ttl);
    }

    /// Clear the current notification right away
    pub fn dismiss_notification(&self) {
        self.host.update(|s| {
            if let Some(ticket) = s.notification.current_ticket() {
                s.notification.expire(ticket);
            }
        });
    }

    // =========================================================================
    // Genres
    // =========================================================================

    pub async fn load_genres(&self) {
        self.read_genres(Feedback::Announce).await;
    }

    /// Submit the genre form. Fields are only cleared if the backend accepts it.
    pub async fn create_genre(&self) {
        let payload = self.host.update(|s| s.genres.form.to_payload());
        info!("Creating genre {}", payload.id);

        match self.api.create_genre(&payload).await {
            Ok(()) => {
                self.host.update(|s| s.genres.form.clear());
                self.notify(messages::GENRE_CREATED);
                self.read_genres(Feedback::Quiet).await;
            }
            Err(e) => {
                warn!("Failed to create genre {}: {}", payload.id, e);
                self.notify(messages::GENRE_CREATE_FAILED);
            }
        }
    }

    async fn read_genres(&self, feedback: Feedback) {
        let seq = self.host.update(|s| s.genres.list.begin_read());
        let result = self.api.list_genres().await;
        self.finish_read(seq, result, |s| &mut s.genres.list, feedback, &GENRES);
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Load the profile of whoever the active identifier names right now
    pub async fn load_profile(&self) {
        self.read_profile(Feedback::Announce).await;
    }

    pub async fn create_user(&self) {
        let payload = self
            .host
            .update(|s| s.profile.form.to_payload(s.active_id.get()));
        info!("Creating user {}", payload.id);

        match self.api.create_user(&payload).await {
            Ok(()) => {
                self.notify(messages::USER_CREATED);
                self.read_profile(Feedback::Quiet).await;
            }
            Err(e) => {
                warn!("Failed to create user {}: {}", payload.id, e);
                self.notify(messages::USER_CREATE_FAILED);
            }
        }
    }

    pub async fn update_user(&self) {
        let payload = self
            .host
            .update(|s| s.profile.form.to_payload(s.active_id.get()));
        info!("Updating user {}", payload.id);

        match self.api.update_user(&payload.id, &payload).await {
            Ok(()) => {
                self.notify(messages::USER_UPDATED);
                self.read_profile(Feedback::Quiet).await;
            }
            Err(e) => {
                warn!("Failed to update user {}: {}", payload.id, e);
                self.notify(messages::USER_UPDATE_FAILED);
            }
        }
    }

    async fn read_profile(&self, feedback: Feedback) {
        let (seq, id) = self.host.update(|s| {
            (
                s.profile.snapshot.begin_read(),
                s.active_id.get().to_string(),
            )
        });
        let result = self.api.get_user(&id).await;
        self.finish_read(seq, result, |s| &mut s.profile.snapshot, feedback, &PROFILE);
    }

    // =========================================================================
    // Wallet
    // =========================================================================

    pub async fn load_wallet(&self) {
        self.read_wallet(Feedback::Announce).await;
    }

    /// Ask the backend to convert the entered amount of coins into credits
    pub async fn transfer(&self) {
        let (id, request) = self
            .host
            .update(|s| (s.active_id.get().to_string(), s.wallet.form.to_request()));
        info!("Transferring {:?} for {}", request.amount, id);

        match self.api.transfer(&id, &request).await {
            Ok(()) => {
                self.host.update(|s| s.wallet.form.clear());
                self.notify(messages::TRANSFER_COMPLETE);
                self.read_wallet(Feedback::Quiet).await;
            }
            Err(e) => {
                warn!("Transfer for {} failed: {}", id, e);
                self.notify(messages::TRANSFER_FAILED);
            }
        }
    }

    async fn read_wallet(&self, feedback: Feedback) {
        let (seq, id) = self.host.update(|s| {
            (
                s.wallet.balances.begin_read(),
                s.active_id.get().to_string(),
            )
        });
        let result = self.api.get_wallet(&id).await;
        self.finish_read(seq, result, |s| &mut s.wallet.balances, feedback, &WALLET);
    }

    // =========================================================================
    // Shared read completion
    // =========================================================================

    fn finish_read<T>(
        &self,
        seq: RequestSeq,
        result: Result<T, ApiError>,
        snapshot: fn(&mut ConsoleState) -> &mut Snapshot<T>,
        feedback: Feedback,
        labels: &ReadLabels,
    ) {
        match result {
            Ok(value) => match self.host.update(|s| snapshot(s).complete_read(seq, value)) {
                ReadOutcome::Applied => {
                    debug!("Applied {} read {:?}", labels.what, seq);
                    if feedback == Feedback::Announce {
                        self.notify(labels.loaded);
                    }
                }
                ReadOutcome::Stale => {
                    debug!("Dropping stale {} read {:?}", labels.what, seq);
                }
            },
            Err(e) => {
                if !self.host.update(|s| snapshot(s).is_current(seq)) {
                    debug!("Dropping stale {} failure {:?}: {}", labels.what, seq, e);
                    return;
                }
                warn!("Failed to load {}: {}", labels.what, e);
                self.notify(labels.failed);
            }
        }
    }
}
