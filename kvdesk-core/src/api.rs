use async_trait::async_trait;
use kvdesk_common::{Genre, NewGenre, TransferRequest, UserProfile, Wallet};

use crate::error::ApiError;

/// The backend surface the console consumes.
///
/// Mutating calls report only success or failure; their response bodies are
/// never used, the dispatcher re-reads instead. Futures are `!Send` because
/// browser fetches are.
#[async_trait(?Send)]
pub trait ConsoleApi {
    /// `GET /genres`
    async fn list_genres(&self) -> Result<Vec<Genre>, ApiError>;

    /// `POST /genres`
    async fn create_genre(&self, genre: &NewGenre) -> Result<(), ApiError>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: &str) -> Result<UserProfile, ApiError>;

    /// `POST /users`
    async fn create_user(&self, profile: &UserProfile) -> Result<(), ApiError>;

    /// `PUT /users/{id}`
    async fn update_user(&self, id: &str, profile: &UserProfile) -> Result<(), ApiError>;

    /// `GET /users/{id}/wallet`
    async fn get_wallet(&self, id: &str) -> Result<Wallet, ApiError>;

    /// `POST /users/{id}/wallet/transfer`
    async fn transfer(&self, id: &str, request: &TransferRequest) -> Result<(), ApiError>;
}
