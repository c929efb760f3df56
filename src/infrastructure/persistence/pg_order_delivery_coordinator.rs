//! PostgreSQL implementation of the order/delivery coordinator.
//!
//! Every operation runs inside one transaction. Rows involved are locked with
//! `SELECT ... FOR UPDATE`, or `FOR SHARE` when an order is only read to price
//! a delivery; any error before `commit` drops the transaction, which rolls
//! back every write made so far.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use super::pg_delivery_repository::{insert_delivery_row, update_delivery_row};
use super::pg_order_repository::update_order_row;
use super::rows::{DELIVERY_COLUMNS, DeliveryRow, ORDER_COLUMNS, OrderRow};
use crate::domain::entities::{Delivery, NewDelivery, Order, OrderFields};
use crate::domain::pricing::DeliveryType;
use crate::domain::repositories::{OrderDeliveryCoordinator, RepricedOrder};
use crate::error::AppError;

/// Transactional coordinator keeping delivery prices in step with orders.
pub struct PgOrderDeliveryCoordinator {
    pool: Arc<PgPool>,
}

impl PgOrderDeliveryCoordinator {
    /// Creates a new coordinator with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

async fn lock_order(conn: &mut PgConnection, id: i64) -> Result<Option<Order>, sqlx::Error> {
    let row: Option<OrderRow> = sqlx::query_as(&format!(
        "SELECT {ORDER_COLUMNS} FROM pedidos WHERE id_pedidos = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Order::from))
}

/// Reads an order and blocks concurrent updates of it until commit.
async fn share_order(conn: &mut PgConnection, id: i64) -> Result<Option<Order>, sqlx::Error> {
    let row: Option<OrderRow> = sqlx::query_as(&format!(
        "SELECT {ORDER_COLUMNS} FROM pedidos WHERE id_pedidos = $1 FOR SHARE"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Order::from))
}

async fn delivery_exists(conn: &mut PgConnection, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM entregas WHERE id_entregas = $1)")
        .bind(id)
        .fetch_one(conn)
        .await
}

async fn lock_delivery(conn: &mut PgConnection, id: i64) -> Result<Option<Delivery>, sqlx::Error> {
    let row: Option<DeliveryRow> = sqlx::query_as(&format!(
        "SELECT {DELIVERY_COLUMNS} FROM entregas WHERE id_entregas = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(Delivery::from))
}

async fn lock_deliveries_of(
    conn: &mut PgConnection,
    order_id: i64,
) -> Result<Vec<Delivery>, sqlx::Error> {
    let rows: Vec<DeliveryRow> = sqlx::query_as(&format!(
        "SELECT {DELIVERY_COLUMNS} FROM entregas WHERE id_pedidos = $1 \
         ORDER BY id_entregas FOR UPDATE"
    ))
    .bind(order_id)
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(Delivery::from).collect())
}

/// Prices `delivery` from `order` and writes the result over its row.
async fn reprice(
    conn: &mut PgConnection,
    order: &Order,
    delivery_id: i64,
    delivery_type: DeliveryType,
) -> Result<Delivery, AppError> {
    let priced = NewDelivery::priced(order, delivery_type)?;
    update_delivery_row(&mut *conn, delivery_id, &priced).await?;
    Ok(priced.into_delivery(delivery_id))
}

fn order_not_found(id: i64) -> AppError {
    AppError::not_found("Order not found", json!({ "idPedidos": id }))
}

fn delivery_not_found(id: i64) -> AppError {
    AppError::not_found("Delivery not found", json!({ "idEntregas": id }))
}

#[async_trait]
impl OrderDeliveryCoordinator for PgOrderDeliveryCoordinator {
    async fn update_order(
        &self,
        order_id: i64,
        fields: OrderFields,
    ) -> Result<RepricedOrder, AppError> {
        let mut tx = self.pool.begin().await?;

        if lock_order(&mut tx, order_id).await?.is_none() {
            tx.rollback().await?;
            return Err(order_not_found(order_id));
        }
        let current = lock_deliveries_of(&mut tx, order_id).await?;

        update_order_row(&mut *tx, order_id, &fields).await?;
        let order = fields.into_order(order_id);

        let mut deliveries = Vec::with_capacity(current.len());
        for delivery in current {
            deliveries.push(reprice(&mut tx, &order, delivery.id, delivery.delivery_type).await?);
        }

        tx.commit().await?;

        tracing::info!(
            order_id,
            repriced = deliveries.len(),
            "Order updated and deliveries repriced"
        );
        Ok(RepricedOrder { order, deliveries })
    }

    async fn update_order_and_delivery(
        &self,
        order_id: i64,
        fields: OrderFields,
        delivery_id: i64,
        delivery_type: Option<DeliveryType>,
    ) -> Result<(Order, Delivery), AppError> {
        let mut tx = self.pool.begin().await?;

        if lock_order(&mut tx, order_id).await?.is_none() {
            tx.rollback().await?;
            return Err(order_not_found(order_id));
        }

        let Some(current) = lock_delivery(&mut tx, delivery_id).await? else {
            tx.rollback().await?;
            return Err(delivery_not_found(delivery_id));
        };

        if current.order_id != order_id {
            tx.rollback().await?;
            return Err(AppError::bad_request(
                "Delivery does not belong to this order",
                json!({ "idPedidos": order_id, "idEntregas": delivery_id }),
            ));
        }

        update_order_row(&mut *tx, order_id, &fields).await?;
        let order = fields.into_order(order_id);

        let delivery_type = delivery_type.unwrap_or(current.delivery_type);
        let delivery = reprice(&mut tx, &order, delivery_id, delivery_type).await?;

        tx.commit().await?;

        tracing::info!(order_id, delivery_id, "Order and delivery updated");
        Ok((order, delivery))
    }

    async fn create_delivery(
        &self,
        order_id: i64,
        delivery_type: DeliveryType,
    ) -> Result<Delivery, AppError> {
        let mut tx = self.pool.begin().await?;

        let Some(order) = share_order(&mut tx, order_id).await? else {
            tx.rollback().await?;
            return Err(order_not_found(order_id));
        };

        let priced = NewDelivery::priced(&order, delivery_type)?;
        let id = insert_delivery_row(&mut *tx, &priced).await?;

        tx.commit().await?;

        tracing::info!(delivery_id = id, order_id, total = %priced.quote.total, "Delivery created");
        Ok(priced.into_delivery(id))
    }

    async fn reprice_delivery(
        &self,
        delivery_id: i64,
        order_id: i64,
        delivery_type: Option<DeliveryType>,
    ) -> Result<Delivery, AppError> {
        let mut tx = self.pool.begin().await?;

        // Order before delivery, the same lock order as `update_order`.
        let Some(order) = share_order(&mut tx, order_id).await? else {
            let delivery_missing = !delivery_exists(&mut tx, delivery_id).await?;
            tx.rollback().await?;
            return Err(if delivery_missing {
                delivery_not_found(delivery_id)
            } else {
                order_not_found(order_id)
            });
        };

        let Some(current) = lock_delivery(&mut tx, delivery_id).await? else {
            tx.rollback().await?;
            return Err(delivery_not_found(delivery_id));
        };

        let delivery_type = delivery_type.unwrap_or(current.delivery_type);
        let delivery = reprice(&mut tx, &order, delivery_id, delivery_type).await?;

        tx.commit().await?;

        tracing::info!(
            delivery_id,
            order_id,
            moved = current.order_id != order_id,
            "Delivery repriced"
        );
        Ok(delivery)
    }
}
