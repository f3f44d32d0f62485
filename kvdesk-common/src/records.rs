use serde::{Deserialize, Serialize};

use crate::numeric::NumericInput;

/// A music genre as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub listeners: i64,
}

/// Body of `POST /genres`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGenre {
    pub id: String,
    pub name: String,
    pub listeners: NumericInput,
}

/// A user profile as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub subscription_level: i32,
}

impl UserProfile {
    /// Named level, if the stored value is one the console knows about
    pub fn level(&self) -> Option<SubscriptionLevel> {
        SubscriptionLevel::from_value(self.subscription_level)
    }
}

/// Coin and credit balances for one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub coin_balance: i64,
    pub credit_balance: i64,
}

/// Body of `POST /users/{id}/wallet/transfer`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRequest {
    pub amount: NumericInput,
}

/// Subscription tiers offered by the profile form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubscriptionLevel {
    #[default]
    Free,
    Premium,
    Family,
}

impl SubscriptionLevel {
    pub const ALL: [SubscriptionLevel; 3] = [
        SubscriptionLevel::Free,
        SubscriptionLevel::Premium,
        SubscriptionLevel::Family,
    ];

    pub fn value(self) -> i32 {
        match self {
            SubscriptionLevel::Free => 0,
            SubscriptionLevel::Premium => 1,
            SubscriptionLevel::Family => 2,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(SubscriptionLevel::Free),
            1 => Some(SubscriptionLevel::Premium),
            2 => Some(SubscriptionLevel::Family),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SubscriptionLevel::Free => "Free",
            SubscriptionLevel::Premium => "Premium",
            SubscriptionLevel::Family => "Family",
        }
    }
}
