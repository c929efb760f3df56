//! Repository trait for client data access.

use crate::domain::entities::{Client, ClientChanges, NewClient};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing clients.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_client.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Lists all clients ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Client>, AppError>;

    /// Finds a client by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError>;

    /// Finds the client owning a tax id (CPF).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Client>, AppError>;

    /// Inserts a client and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id or tax id is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_client: NewClient) -> Result<i64, AppError>;

    /// Replaces all fields of a client.
    ///
    /// Returns the number of rows whose stored values actually changed, so an
    /// update that sends the current values returns `0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the tax id belongs to another client.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, changes: ClientChanges) -> Result<u64, AppError>;

    /// Deletes a client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if orders still reference the client.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
