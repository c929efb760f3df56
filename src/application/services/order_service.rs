//! Order management service.

use crate::application::services::client_service::client_not_found;
use crate::domain::entities::{Delivery, Order, OrderFields};
use crate::domain::pricing::DeliveryType;
use crate::domain::repositories::{
    ClientRepository, OrderDeliveryCoordinator, OrderRepository, RepricedOrder,
};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating and maintaining orders.
///
/// Updates never touch the order table alone: they go through the
/// [`OrderDeliveryCoordinator`] so delivery prices follow the order.
pub struct OrderService<O, C, K>
where
    O: OrderRepository + ?Sized,
    C: ClientRepository + ?Sized,
    K: OrderDeliveryCoordinator + ?Sized,
{
    orders: Arc<O>,
    clients: Arc<C>,
    coordinator: Arc<K>,
}

impl<O, C, K> OrderService<O, C, K>
where
    O: OrderRepository + ?Sized,
    C: ClientRepository + ?Sized,
    K: OrderDeliveryCoordinator + ?Sized,
{
    /// Creates a new order service.
    pub fn new(orders: Arc<O>, clients: Arc<C>, coordinator: Arc<K>) -> Self {
        Self {
            orders,
            clients,
            coordinator,
        }
    }

    /// Lists all orders.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.orders.list().await
    }

    /// Retrieves an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_order(&self, id: i64) -> Result<Order, AppError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    /// Creates an order for an existing client and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the client does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_order(&self, fields: OrderFields) -> Result<i64, AppError> {
        self.ensure_client(fields.client_id).await?;

        let client_id = fields.client_id;
        let id = self
            .orders
            .create(fields)
            .await
            .map_err(|e| e.on_conflict("Client not found", json!({ "idCliente": client_id })))?;

        tracing::info!(order_id = id, client_id, "Order created");
        Ok(id)
    }

    /// Replaces an order and re-prices all of its deliveries atomically.
    ///
    /// The order is looked up before the client, so a missing order is
    /// reported as such whatever client the new fields name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order or the client does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_order(
        &self,
        id: i64,
        fields: OrderFields,
    ) -> Result<RepricedOrder, AppError> {
        self.get_order(id).await?;
        self.ensure_client(fields.client_id).await?;
        self.coordinator.update_order(id, fields).await
    }

    /// Replaces an order and re-prices one of its deliveries atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order, the delivery or the client
    /// does not exist.
    /// Returns [`AppError::Validation`] if the delivery belongs to another order.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_order_with_delivery(
        &self,
        id: i64,
        fields: OrderFields,
        delivery_id: i64,
        delivery_type: Option<DeliveryType>,
    ) -> Result<(Order, Delivery), AppError> {
        self.get_order(id).await?;
        self.ensure_client(fields.client_id).await?;
        self.coordinator
            .update_order_and_delivery(id, fields, delivery_id, delivery_type)
            .await
    }

    /// Recomputes the prices of every delivery of an order from its stored
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn reprice_order(&self, id: i64) -> Result<RepricedOrder, AppError> {
        let order = self.get_order(id).await?;
        self.coordinator.update_order(id, order.fields()).await
    }

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    /// Returns [`AppError::Conflict`] if deliveries still reference the order.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_order(&self, id: i64) -> Result<(), AppError> {
        if self.orders.find_by_id(id).await?.is_none() {
            return Err(order_not_found(id));
        }

        let deleted = self.orders.delete(id).await.map_err(|e| {
            e.on_conflict(
                "Order has deliveries and cannot be deleted",
                json!({ "idPedidos": id }),
            )
        })?;

        if !deleted {
            return Err(order_not_found(id));
        }

        tracing::info!(order_id = id, "Order deleted");
        Ok(())
    }

    async fn ensure_client(&self, client_id: i64) -> Result<(), AppError> {
        match self.clients.find_by_id(client_id).await? {
            Some(_) => Ok(()),
            None => Err(client_not_found(client_id)),
        }
    }
}

pub(crate) fn order_not_found(id: i64) -> AppError {
    AppError::not_found("Order not found", json!({ "idPedidos": id }))
}
