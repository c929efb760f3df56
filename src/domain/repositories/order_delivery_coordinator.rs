//! Atomic updates spanning an order and its deliveries.

use crate::domain::entities::{Delivery, Order, OrderFields};
use crate::domain::pricing::DeliveryType;
use crate::error::AppError;
use async_trait::async_trait;

/// An order after an update, with the deliveries re-priced from it.
#[derive(Debug, Clone, PartialEq)]
pub struct RepricedOrder {
    pub order: Order,
    pub deliveries: Vec<Delivery>,
}

/// Keeps delivery pricing consistent with the owning order.
///
/// A delivery's monetary fields derive from its order, so the order row and
/// the affected delivery rows are written in a single transaction: either
/// every write commits or none does. Deliveries priced outside an order
/// update hold a shared lock on the order until they are stored, so a
/// concurrent order update either waits for them and re-prices them, or
/// finishes first and they are priced from its new fields.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderDeliveryCoordinator`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderDeliveryCoordinator: Send + Sync {
    /// Replaces an order and re-prices every delivery that references it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    /// Returns [`AppError::Conflict`] if the new client does not exist.
    /// Returns [`AppError::Internal`] on database errors; nothing is committed.
    async fn update_order(&self, order_id: i64, fields: OrderFields)
    -> Result<RepricedOrder, AppError>;

    /// Replaces an order and re-prices one of its deliveries.
    ///
    /// The delivery keeps its stored type unless `delivery_type` is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order or the delivery does not exist.
    /// Returns [`AppError::Validation`] if the delivery belongs to another order.
    /// Returns [`AppError::Internal`] on database errors; nothing is committed.
    async fn update_order_and_delivery(
        &self,
        order_id: i64,
        fields: OrderFields,
        delivery_id: i64,
        delivery_type: Option<DeliveryType>,
    ) -> Result<(Order, Delivery), AppError>;

    /// Prices a new delivery from the order's current fields and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    /// Returns [`AppError::Validation`] if the order cannot be priced.
    /// Returns [`AppError::Internal`] on database errors; nothing is committed.
    async fn create_delivery(
        &self,
        order_id: i64,
        delivery_type: DeliveryType,
    ) -> Result<Delivery, AppError>;

    /// Re-prices a delivery from `order_id`, moving it there if it belonged
    /// to another order. The stored type is kept unless `delivery_type` is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the delivery or the order does not exist.
    /// Returns [`AppError::Internal`] on database errors; nothing is committed.
    async fn reprice_delivery(
        &self,
        delivery_id: i64,
        order_id: i64,
        delivery_type: Option<DeliveryType>,
    ) -> Result<Delivery, AppError>;
}
