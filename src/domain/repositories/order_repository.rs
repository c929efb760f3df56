//! Repository trait for order data access.

use crate::domain::entities::{Order, OrderFields};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing orders.
///
/// Plain single-statement access. Updates that must keep deliveries in step
/// with their order go through
/// [`crate::domain::repositories::OrderDeliveryCoordinator`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Lists all orders ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Order>, AppError>;

    /// Finds an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Inserts an order and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the client does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, fields: OrderFields) -> Result<i64, AppError>;

    /// Replaces the order row alone and returns the number of updated rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the client does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, fields: OrderFields) -> Result<u64, AppError>;

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a delivery still references the order.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
