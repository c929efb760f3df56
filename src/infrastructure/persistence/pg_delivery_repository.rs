//! PostgreSQL implementation of the delivery repository.

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use std::sync::Arc;

use super::rows::{DELIVERY_COLUMNS, DeliveryRow};
use crate::domain::entities::{Delivery, NewDelivery};
use crate::domain::repositories::DeliveryRepository;
use crate::error::AppError;

/// PostgreSQL repository for deliveries.
pub struct PgDeliveryRepository {
    pool: Arc<PgPool>,
}

impl PgDeliveryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Inserts a priced delivery and returns its id.
pub(crate) async fn insert_delivery_row<'e, E: PgExecutor<'e>>(
    executor: E,
    delivery: &NewDelivery,
) -> Result<i64, sqlx::Error> {
    let quote = &delivery.quote;
    sqlx::query_scalar(
        r#"
        INSERT INTO entregas
            (id_pedidos, valor_distancia, valor_peso, acrescimo, desconto, taxa,
             valor_final, tipo_entrega)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id_entregas
        "#,
    )
    .bind(delivery.order_id)
    .bind(quote.distance_cost)
    .bind(quote.weight_cost)
    .bind(quote.surcharge)
    .bind(quote.discount)
    .bind(quote.flat_fee)
    .bind(quote.total)
    .bind(delivery.delivery_type.as_str())
    .fetch_one(executor)
    .await
}

/// Overwrites a delivery row with a new pricing. Shared with the
/// transactional coordinator.
pub(crate) async fn update_delivery_row<'e, E: PgExecutor<'e>>(
    executor: E,
    id: i64,
    delivery: &NewDelivery,
) -> Result<u64, sqlx::Error> {
    let quote = &delivery.quote;
    let result = sqlx::query(
        r#"
        UPDATE entregas SET
            id_pedidos      = $2,
            valor_distancia = $3,
            valor_peso      = $4,
            acrescimo       = $5,
            desconto        = $6,
            taxa            = $7,
            valor_final     = $8,
            tipo_entrega    = $9
        WHERE id_entregas = $1
        "#,
    )
    .bind(id)
    .bind(delivery.order_id)
    .bind(quote.distance_cost)
    .bind(quote.weight_cost)
    .bind(quote.surcharge)
    .bind(quote.discount)
    .bind(quote.flat_fee)
    .bind(quote.total)
    .bind(delivery.delivery_type.as_str())
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

#[async_trait]
impl DeliveryRepository for PgDeliveryRepository {
    async fn list(&self) -> Result<Vec<Delivery>, AppError> {
        let rows: Vec<DeliveryRow> = sqlx::query_as(&format!(
            "SELECT {DELIVERY_COLUMNS} FROM entregas ORDER BY id_entregas"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Delivery::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Delivery>, AppError> {
        let row: Option<DeliveryRow> = sqlx::query_as(&format!(
            "SELECT {DELIVERY_COLUMNS} FROM entregas WHERE id_entregas = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Delivery::from))
    }

    async fn create(&self, delivery: NewDelivery) -> Result<i64, AppError> {
        Ok(insert_delivery_row(self.pool.as_ref(), &delivery).await?)
    }

    async fn update(&self, id: i64, delivery: NewDelivery) -> Result<u64, AppError> {
        Ok(update_delivery_row(self.pool.as_ref(), id, &delivery).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM entregas WHERE id_entregas = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
