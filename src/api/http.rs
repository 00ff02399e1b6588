//! reqwest-backed [`UserApi`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{ApiError, Operation, UserApi};
use crate::config::ApiConfig;
use crate::constants::USER_AGENT;
use crate::models::{PathStyle, User, UserId};

/// Longest response body excerpt kept in an error detail.
const MAX_ERROR_BODY: usize = 200;

/// URL construction for the collection and its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
    style: PathStyle,
}

impl Endpoints {
    pub fn new(base: impl Into<String>, style: PathStyle) -> Self {
        Self {
            base: base.into(),
            style,
        }
    }

    /// The collection URL used for list and create.
    pub fn collection(&self) -> &str {
        &self.base
    }

    /// URL for updating a record.
    ///
    /// `Legacy` appends `/{id}` to the base verbatim, which yields
    /// `/api/users//{id}` for a trailing-slash base.
    pub fn update(&self, id: UserId) -> String {
        match self.style {
            PathStyle::Legacy => format!("{}/{id}", self.base),
            PathStyle::Normalized => self.join(id),
        }
    }

    /// URL for deleting a record: `/api/users/{id}` in both styles.
    pub fn delete(&self, id: UserId) -> String {
        self.join(id)
    }

    fn join(&self, id: UserId) -> String {
        format!("{}/{id}", self.base.trim_end_matches('/'))
    }
}

/// HTTP client for the user collection.
pub struct HttpUserApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpUserApi {
    /// Build a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(config.base_url.clone(), config.path_style),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

/// Turn a transport result into a success response or a `RequestFailed`.
async fn check(
    operation: Operation,
    result: Result<Response, reqwest::Error>,
) -> Result<Response, ApiError> {
    let resp = result.map_err(|e| ApiError::failed(operation, e.to_string()))?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(MAX_ERROR_BODY).collect();
    let detail = if excerpt.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {}", excerpt.trim())
    };
    Err(ApiError::failed(operation, detail))
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let url = self.endpoints.collection();
        tracing::debug!(method = "GET", %url, "sending request");
        let resp = check(Operation::List, self.client.get(url).send().await).await?;
        resp.json::<Vec<User>>()
            .await
            .map_err(|e| ApiError::failed(Operation::List, format!("invalid response body: {e}")))
    }

    async fn create(&self, user: &User) -> Result<User, ApiError> {
        let url = self.endpoints.collection();
        tracing::debug!(method = "POST", %url, "sending request");
        let resp = check(
            Operation::Create,
            self.client.post(url).json(user).send().await,
        )
        .await?;
        resp.json::<User>().await.map_err(|e| {
            ApiError::failed(Operation::Create, format!("invalid response body: {e}"))
        })
    }

    async fn update(&self, id: UserId, user: &User) -> Result<(), ApiError> {
        let url = self.endpoints.update(id);
        tracing::debug!(method = "PUT", %url, "sending request");
        check(
            Operation::Update,
            self.client.put(&url).json(user).send().await,
        )
        .await?;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        let url = self.endpoints.delete(id);
        tracing::debug!(method = "DELETE", %url, "sending request");
        check(Operation::Delete, self.client.delete(&url).send().await).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3000/api/users/";

    #[test]
    fn legacy_update_keeps_double_slash() {
        let endpoints = Endpoints::new(BASE, PathStyle::Legacy);
        assert_eq!(endpoints.update(4), "http://localhost:3000/api/users//4");
    }

    #[test]
    fn legacy_delete_uses_single_slash() {
        let endpoints = Endpoints::new(BASE, PathStyle::Legacy);
        assert_eq!(endpoints.delete(4), "http://localhost:3000/api/users/4");
    }

    #[test]
    fn normalized_update_uses_single_slash() {
        let endpoints = Endpoints::new(BASE, PathStyle::Normalized);
        assert_eq!(endpoints.update(4), "http://localhost:3000/api/users/4");
    }

    #[test]
    fn base_without_trailing_slash() {
        let endpoints = Endpoints::new("http://h/api/users", PathStyle::Normalized);
        assert_eq!(endpoints.collection(), "http://h/api/users");
        assert_eq!(endpoints.update(1), "http://h/api/users/1");
        assert_eq!(endpoints.delete(1), "http://h/api/users/1");
    }

    #[test]
    fn client_builds_from_default_config() {
        let api = HttpUserApi::new(&ApiConfig::default()).unwrap();
        assert_eq!(api.endpoints().collection(), crate::constants::DEFAULT_API_URL);
    }
}
