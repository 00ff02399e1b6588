//! UserApi trait and the HTTP client for the external user service.
//!
//! The view only talks to [`UserApi`], so tests can swap in a mock and the
//! HTTP details stay in [`http`].

pub mod http;

use async_trait::async_trait;
use strum::Display;
use thiserror::Error;

use crate::models::{User, UserId};

pub use http::{Endpoints, HttpUserApi};

/// The four calls the view makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

/// Errors from the user API.
///
/// Transport failures, non-2xx statuses and undecodable bodies are all the
/// same kind. `detail` is for the developer log only.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{operation} request failed: {detail}")]
    RequestFailed { operation: Operation, detail: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl ApiError {
    pub fn failed(operation: Operation, detail: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            operation,
            detail: detail.into(),
        }
    }
}

/// CRUD access to the user collection.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch the whole collection, in server order.
    async fn list(&self) -> Result<Vec<User>, ApiError>;

    /// Create a record. `user.id` is the unsaved id; the returned record
    /// carries the server-assigned one.
    async fn create(&self, user: &User) -> Result<User, ApiError>;

    /// Overwrite record `id`. Any response body is ignored.
    async fn update(&self, id: UserId, user: &User) -> Result<(), ApiError>;

    /// Remove record `id`. Any response body is ignored.
    async fn delete(&self, id: UserId) -> Result<(), ApiError>;
}
