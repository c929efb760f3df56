//! Delivery management service.

use crate::domain::entities::Delivery;
use crate::domain::pricing::{self, DeliveryType, PricingInput, Quote};
use crate::domain::repositories::{DeliveryRepository, OrderDeliveryCoordinator};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for pricing and storing deliveries.
///
/// Callers pick the order and the delivery type; every monetary field is
/// computed from the order by [`pricing::quote`]. Writes go through the
/// coordinator so a delivery is never priced from an order that is being
/// changed underneath it.
pub struct DeliveryService<D, K>
where
    D: DeliveryRepository + ?Sized,
    K: OrderDeliveryCoordinator + ?Sized,
{
    deliveries: Arc<D>,
    coordinator: Arc<K>,
}

impl<D, K> DeliveryService<D, K>
where
    D: DeliveryRepository + ?Sized,
    K: OrderDeliveryCoordinator + ?Sized,
{
    /// Creates a new delivery service.
    pub fn new(deliveries: Arc<D>, coordinator: Arc<K>) -> Self {
        Self {
            deliveries,
            coordinator,
        }
    }

    /// Lists all deliveries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_deliveries(&self) -> Result<Vec<Delivery>, AppError> {
        self.deliveries.list().await
    }

    /// Retrieves a delivery by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the delivery does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_delivery(&self, id: i64) -> Result<Delivery, AppError> {
        self.deliveries
            .find_by_id(id)
            .await?
            .ok_or_else(|| delivery_not_found(id))
    }

    /// Prices and stores a delivery for an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    /// Returns [`AppError::Validation`] if the order cannot be priced.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_delivery(
        &self,
        order_id: i64,
        delivery_type: DeliveryType,
    ) -> Result<Delivery, AppError> {
        self.coordinator
            .create_delivery(order_id, delivery_type)
            .await
    }

    /// Re-prices a delivery, optionally moving it to another order or
    /// changing its type. The stored type is kept when none is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the delivery or the order does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_delivery(
        &self,
        id: i64,
        order_id: i64,
        delivery_type: Option<DeliveryType>,
    ) -> Result<Delivery, AppError> {
        self.coordinator
            .reprice_delivery(id, order_id, delivery_type)
            .await
    }

    /// Deletes a delivery.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the delivery does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_delivery(&self, id: i64) -> Result<(), AppError> {
        if !self.deliveries.delete(id).await? {
            return Err(delivery_not_found(id));
        }

        tracing::info!(delivery_id = id, "Delivery deleted");
        Ok(())
    }

    /// Prices raw inputs without storing anything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if an input is negative or too large.
    pub fn quote(&self, input: &PricingInput) -> Result<Quote, AppError> {
        Ok(pricing::quote(input)?)
    }
}

fn delivery_not_found(id: i64) -> AppError {
    AppError::not_found("Delivery not found", json!({ "idEntregas": id }))
}
