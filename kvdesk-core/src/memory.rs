use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use kvdesk_common::{
    Genre, NewGenre, NumericInput, SubscriptionLevel, TransferRequest, UserProfile, Wallet,
    DEFAULT_USER_ID,
};
use tracing::debug;

use crate::api::ConsoleApi;
use crate::error::ApiError;

/// Balance opened for every newly created user
pub const STARTING_WALLET: Wallet = Wallet {
    coin_balance: 100,
    credit_balance: 0,
};

#[derive(Debug, Default)]
struct Tables {
    /// Insertion order is the listing order
    genres: Vec<Genre>,
    users: HashMap<String, UserProfile>,
    wallets: HashMap<String, Wallet>,
}

/// In-process backend with the same observable rules as the real service.
///
/// Used for the demo build and in tests. `set_available(false)` makes every
/// call fail as if the network were down.
#[derive(Debug)]
pub struct MemoryBackend {
    tables: RefCell<Tables>,
    available: Cell<bool>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self {
            tables: RefCell::new(Tables::default()),
            available: Cell::new(true),
        }
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend preloaded with the service's initial data
    pub fn seeded() -> Self {
        let backend = Self::new();
        {
            let mut tables = backend.tables.borrow_mut();
            for (id, name, listeners) in [
                ("ROCK", "Classic Rock", 8_000_000),
                ("POP", "Global Pop Hits", 15_000_000),
                ("JAZZ", "Smooth Jazz", 500_000),
            ] {
                tables.genres.push(Genre {
                    id: id.to_string(),
                    name: name.to_string(),
                    listeners,
                });
            }
            tables.users.insert(
                DEFAULT_USER_ID.to_string(),
                UserProfile {
                    id: DEFAULT_USER_ID.to_string(),
                    username: "StarterUser".to_string(),
                    email: "starter@example.com".to_string(),
                    subscription_level: SubscriptionLevel::Free.value(),
                },
            );
            tables.wallets.insert(
                DEFAULT_USER_ID.to_string(),
                Wallet {
                    coin_balance: 100,
                    credit_balance: 50,
                },
            );
        }
        backend
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Overwrite a wallet directly, bypassing the API
    pub fn put_wallet(&self, id: &str, wallet: Wallet) {
        self.tables
            .borrow_mut()
            .wallets
            .insert(id.to_string(), wallet);
    }

    pub fn genre_count(&self) -> usize {
        self.tables.borrow().genres.len()
    }

    fn ensure_available(&self) -> Result<(), ApiError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(ApiError::Unavailable("memory backend offline".to_string()))
        }
    }
}

/// Numbers that would not deserialize on the server come back as 422.
fn accept_i32(value: &NumericInput, field: &str) -> Result<i64, ApiError> {
    value
        .as_number()
        .filter(|n| i32::try_from(*n).is_ok())
        .ok_or_else(|| ApiError::unprocessable(format!("{field}: invalid type, expected i32")))
}

#[async_trait(?Send)]
impl ConsoleApi for MemoryBackend {
    async fn list_genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.ensure_available()?;
        Ok(self.tables.borrow().genres.clone())
    }

    async fn create_genre(&self, genre: &NewGenre) -> Result<(), ApiError> {
        self.ensure_available()?;
        let listeners = accept_i32(&genre.listeners, "listeners")?;
        let record = Genre {
            id: genre.id.clone(),
            name: genre.name.clone(),
            listeners,
        };

        let mut tables = self.tables.borrow_mut();
        match tables.genres.iter_mut().find(|g| g.id == record.id) {
            Some(existing) => *existing = record,
            None => tables.genres.push(record),
        }
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<UserProfile, ApiError> {
        self.ensure_available()?;
        self.tables
            .borrow()
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/users/{id}")))
    }

    async fn create_user(&self, profile: &UserProfile) -> Result<(), ApiError> {
        self.ensure_available()?;
        let mut tables = self.tables.borrow_mut();
        tables.users.insert(profile.id.clone(), profile.clone());
        tables.wallets.insert(profile.id.clone(), STARTING_WALLET);
        debug!("Opened wallet for {}", profile.id);
        Ok(())
    }

    async fn update_user(&self, id: &str, profile: &UserProfile) -> Result<(), ApiError> {
        self.ensure_available()?;
        // The path id wins over whatever the body claims
        let record = UserProfile {
            id: id.to_string(),
            ..profile.clone()
        };
        self.tables.borrow_mut().users.insert(id.to_string(), record);
        Ok(())
    }

    async fn get_wallet(&self, id: &str) -> Result<Wallet, ApiError> {
        self.ensure_available()?;
        self.tables
            .borrow()
            .wallets
            .get(id)
            .copied()
            .ok_or_else(|| ApiError::NotFound(format!("/users/{id}/wallet")))
    }

    async fn transfer(&self, id: &str, request: &TransferRequest) -> Result<(), ApiError> {
        self.ensure_available()?;
        let amount = accept_i32(&request.amount, "amount")?;
        if amount <= 0 {
            return Err(ApiError::bad_request("Transfer amount must be positive"));
        }

        let mut tables = self.tables.borrow_mut();
        let wallet = tables.wallets.get_mut(id).ok_or(ApiError::Status {
            status: 500,
            body: format!("no wallet for {id}"),
        })?;

        if wallet.coin_balance < amount {
            return Err(ApiError::bad_request(format!(
                "Insufficient coins. Current balance: {}, requested: {}",
                wallet.coin_balance, amount
            )));
        }

        wallet.coin_balance -= amount;
        wallet.credit_balance += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer_of(amount: NumericInput) -> TransferRequest {
        TransferRequest { amount }
    }

    #[tokio::test]
    async fn test_seeded_data() {
        let backend = MemoryBackend::seeded();
        let ids: Vec<String> = backend
            .list_genres()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, vec!["ROCK", "POP", "JAZZ"]);

        let user = backend.get_user(DEFAULT_USER_ID).await.unwrap();
        assert_eq!(user.username, "StarterUser");
        assert_eq!(
            backend.get_wallet(DEFAULT_USER_ID).await.unwrap(),
            Wallet {
                coin_balance: 100,
                credit_balance: 50
            }
        );
    }

    #[tokio::test]
    async fn test_create_genre_replaces_existing_id() {
        let backend = MemoryBackend::seeded();
        backend
            .create_genre(&NewGenre {
                id: "POP".to_string(),
                name: "Pop".to_string(),
                listeners: NumericInput::Number(1),
            })
            .await
            .unwrap();

        let genres = backend.list_genres().await.unwrap();
        assert_eq!(genres.len(), 3);
        assert_eq!(genres[1].name, "Pop");
        assert_eq!(genres[1].listeners, 1);
    }

    #[tokio::test]
    async fn test_create_genre_rejects_raw_listeners() {
        let backend = MemoryBackend::new();
        let err = backend
            .create_genre(&NewGenre {
                id: "X".to_string(),
                name: "X".to_string(),
                listeners: NumericInput::Raw("lots".to_string()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(backend.genre_count(), 0);
    }

    #[tokio::test]
    async fn test_create_user_opens_wallet() {
        let backend = MemoryBackend::new();
        let profile = UserProfile {
            id: "user:9".to_string(),
            username: "ann".to_string(),
            email: "a@x.com".to_string(),
            subscription_level: 1,
        };
        backend.create_user(&profile).await.unwrap();
        assert_eq!(backend.get_wallet("user:9").await.unwrap(), STARTING_WALLET);
    }

    #[tokio::test]
    async fn test_update_user_keys_by_path_id() {
        let backend = MemoryBackend::seeded();
        let body = UserProfile {
            id: "someone-else".to_string(),
            username: "renamed".to_string(),
            email: "r@x.com".to_string(),
            subscription_level: 2,
        };
        backend.update_user(DEFAULT_USER_ID, &body).await.unwrap();

        let stored = backend.get_user(DEFAULT_USER_ID).await.unwrap();
        assert_eq!(stored.id, DEFAULT_USER_ID);
        assert_eq!(stored.username, "renamed");
        assert!(matches!(
            backend.get_user("someone-else").await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_transfer_rules() {
        let backend = MemoryBackend::seeded();

        backend
            .transfer(DEFAULT_USER_ID, &transfer_of(NumericInput::Number(30)))
            .await
            .unwrap();
        assert_eq!(
            backend.get_wallet(DEFAULT_USER_ID).await.unwrap(),
            Wallet {
                coin_balance: 70,
                credit_balance: 80
            }
        );

        for amount in [0, -5] {
            let err = backend
                .transfer(DEFAULT_USER_ID, &transfer_of(NumericInput::Number(amount)))
                .await
                .unwrap_err();
            assert_eq!(err.status(), Some(400));
        }

        let err = backend
            .transfer(DEFAULT_USER_ID, &transfer_of(NumericInput::Number(71)))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));

        let err = backend
            .transfer(DEFAULT_USER_ID, &transfer_of(NumericInput::Raw("ten".to_string())))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(422));

        let err = backend
            .transfer("user:nobody", &transfer_of(NumericInput::Number(1)))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));

        assert_eq!(
            backend.get_wallet(DEFAULT_USER_ID).await.unwrap().coin_balance,
            70
        );
    }

    #[tokio::test]
    async fn test_unavailable_backend_fails_every_call() {
        let backend = MemoryBackend::seeded();
        backend.set_available(false);
        assert!(matches!(
            backend.list_genres().await,
            Err(ApiError::Unavailable(_))
        ));
        assert_eq!(backend.get_wallet(DEFAULT_USER_ID).await.unwrap_err().status(), None);
    }
}
