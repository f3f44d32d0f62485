use async_trait::async_trait;
use kvdesk_common::{Genre, NewGenre, TransferRequest, UserProfile, Wallet};
use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::api::ConsoleApi;
use crate::error::ApiError;

/// [`ConsoleApi`] over HTTP against a single backend instance.
///
/// No retries and no auth headers. User ids are percent-encoded into the path.
#[derive(Clone)]
pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_url(&self, id: &str, suffix: &str) -> String {
        self.url(&format!("/users/{}{}", urlencoding::encode(id), suffix))
    }

    /// Turn a non-success status into an error, keeping the body for the logs.
    async fn check(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let url = resp.url().to_string();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url));
        }

        let body = resp.text().await.unwrap_or_default();
        debug!("{} answered {}: {}", url, status, body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait(?Send)]
impl ConsoleApi for HttpApi {
    async fn list_genres(&self) -> Result<Vec<Genre>, ApiError> {
        let resp = self.http.get(self.url("/genres")).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn create_genre(&self, genre: &NewGenre) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/genres"))
            .json(genre)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<UserProfile, ApiError> {
        let resp = self.http.get(self.user_url(id, "")).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn create_user(&self, profile: &UserProfile) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/users"))
            .json(profile)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn update_user(&self, id: &str, profile: &UserProfile) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.user_url(id, ""))
            .json(profile)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn get_wallet(&self, id: &str) -> Result<Wallet, ApiError> {
        let resp = self.http.get(self.user_url(id, "/wallet")).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn transfer(&self, id: &str, request: &TransferRequest) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.user_url(id, "/wallet/transfer"))
            .json(request)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}
