//! Per-domain view models: a confirmed snapshot plus the form being edited.
//!
//! Forms and snapshots never write to each other implicitly. The only bridge
//! is [`ProfileForm::fill_from`], which the user triggers explicitly.

use crate::numeric::NumericInput;
use crate::records::{Genre, NewGenre, SubscriptionLevel, TransferRequest, UserProfile, Wallet};
use crate::snapshot::Snapshot;

// =============================================================================
// Genres
// =============================================================================

/// Pending input for a new genre
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreForm {
    pub id: String,
    pub name: String,
    pub listeners: String,
}

impl GenreForm {
    /// All three fields are required before the form can be submitted
    pub fn is_complete(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.name.trim().is_empty()
            && !self.listeners.trim().is_empty()
    }

    pub fn to_payload(&self) -> NewGenre {
        NewGenre {
            id: self.id.clone(),
            name: self.name.clone(),
            listeners: NumericInput::parse(&self.listeners),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenresModel {
    pub list: Snapshot<Vec<Genre>>,
    pub form: GenreForm,
}

impl GenresModel {
    /// Genres from the last successful load, in backend order
    pub fn genres(&self) -> &[Genre] {
        self.list.get().map(Vec::as_slice).unwrap_or(&[])
    }
}

// =============================================================================
// Profile
// =============================================================================

/// Pending input for creating or replacing a profile.
/// The id always comes from the active identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub level: SubscriptionLevel,
}

impl ProfileForm {
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn to_payload(&self, id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            username: self.username.clone(),
            email: self.email.clone(),
            subscription_level: self.level.value(),
        }
    }

    /// Copy a loaded profile into the form for editing
    pub fn fill_from(&mut self, profile: &UserProfile) {
        self.username = profile.username.clone();
        self.email = profile.email.clone();
        self.level = profile.level().unwrap_or_default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileModel {
    pub snapshot: Snapshot<UserProfile>,
    pub form: ProfileForm,
}

impl ProfileModel {
    pub fn profile(&self) -> Option<&UserProfile> {
        self.snapshot.get()
    }
}

// =============================================================================
// Wallet
// =============================================================================

/// Pending coin-to-credit transfer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletForm {
    pub amount: String,
}

impl WalletForm {
    pub fn is_complete(&self) -> bool {
        !self.amount.trim().is_empty()
    }

    pub fn to_request(&self) -> TransferRequest {
        TransferRequest {
            amount: NumericInput::parse(&self.amount),
        }
    }

    pub fn clear(&mut self) {
        self.amount.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletModel {
    pub balances: Snapshot<Wallet>,
    pub form: WalletForm,
}

impl WalletModel {
    pub fn wallet(&self) -> Option<&Wallet> {
        self.balances.get()
    }
}
