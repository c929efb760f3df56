//! PostgreSQL implementation of the order repository.

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use std::sync::Arc;

use super::rows::{ORDER_COLUMNS, OrderRow};
use crate::domain::entities::{Order, OrderFields};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// PostgreSQL repository for orders.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Overwrites an order row. Shared with the transactional coordinator.
pub(crate) async fn update_order_row<'e, E: PgExecutor<'e>>(
    executor: E,
    id: i64,
    fields: &OrderFields,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE pedidos SET
            id_cliente    = $2,
            data_pedido   = $3,
            distancia     = $4,
            peso_carga    = $5,
            valor_base_km = $6,
            valor_base_kg = $7
        WHERE id_pedidos = $1
        "#,
    )
    .bind(id)
    .bind(fields.client_id)
    .bind(fields.order_date)
    .bind(fields.distance_km)
    .bind(fields.weight_kg)
    .bind(fields.rate_per_km)
    .bind(fields.rate_per_kg)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, AppError> {
        let rows: Vec<OrderRow> = sqlx::query_as(&format!(
            "SELECT {ORDER_COLUMNS} FROM pedidos ORDER BY id_pedidos"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "SELECT {ORDER_COLUMNS} FROM pedidos WHERE id_pedidos = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Order::from))
    }

    async fn create(&self, fields: OrderFields) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO pedidos
                (id_cliente, data_pedido, distancia, peso_carga, valor_base_km, valor_base_kg)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id_pedidos
            "#,
        )
        .bind(fields.client_id)
        .bind(fields.order_date)
        .bind(fields.distance_km)
        .bind(fields.weight_kg)
        .bind(fields.rate_per_km)
        .bind(fields.rate_per_kg)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i64, fields: OrderFields) -> Result<u64, AppError> {
        Ok(update_order_row(self.pool.as_ref(), id, &fields).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM pedidos WHERE id_pedidos = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
