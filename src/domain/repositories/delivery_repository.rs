//! Repository trait for delivery data access.

use crate::domain::entities::{Delivery, NewDelivery};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing deliveries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDeliveryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// Lists all deliveries ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Delivery>, AppError>;

    /// Finds a delivery by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Delivery>, AppError>;

    /// Inserts a priced delivery and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the order does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, delivery: NewDelivery) -> Result<i64, AppError>;

    /// Overwrites a delivery with a new pricing and returns the number of
    /// updated rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the order does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, delivery: NewDelivery) -> Result<u64, AppError>;

    /// Deletes a delivery.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
