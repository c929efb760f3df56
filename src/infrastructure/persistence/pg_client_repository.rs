//! PostgreSQL implementation of the client repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{CLIENT_COLUMNS, ClientRow};
use crate::domain::entities::{Client, ClientChanges, NewClient};
use crate::domain::repositories::ClientRepository;
use crate::error::AppError;

/// PostgreSQL repository for clients.
///
/// The tax id is backed by a `UNIQUE` constraint, so concurrent registrations
/// of the same CPF surface as [`AppError::Conflict`].
pub struct PgClientRepository {
    pool: Arc<PgPool>,
}

impl PgClientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn list(&self) -> Result<Vec<Client>, AppError> {
        let rows: Vec<ClientRow> = sqlx::query_as(&format!(
            "SELECT {CLIENT_COLUMNS} FROM cliente ORDER BY id_cliente"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let row: Option<ClientRow> = sqlx::query_as(&format!(
            "SELECT {CLIENT_COLUMNS} FROM cliente WHERE id_cliente = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Client::from))
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Client>, AppError> {
        let row: Option<ClientRow> = sqlx::query_as(&format!(
            "SELECT {CLIENT_COLUMNS} FROM cliente WHERE cpf_cliente = $1"
        ))
        .bind(tax_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Client::from))
    }

    async fn create(&self, new_client: NewClient) -> Result<i64, AppError> {
        let Some(id) = new_client.id else {
            let id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO cliente
                    (nome_cliente, cpf_cliente, telefone_cliente, email_cliente, endereco_completo)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id_cliente
                "#,
            )
            .bind(&new_client.name)
            .bind(&new_client.tax_id)
            .bind(&new_client.phone)
            .bind(&new_client.email)
            .bind(&new_client.address)
            .fetch_one(self.pool.as_ref())
            .await?;

            return Ok(id);
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO cliente
                (id_cliente, nome_cliente, cpf_cliente, telefone_cliente, email_cliente, endereco_completo)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(&new_client.name)
        .bind(&new_client.tax_id)
        .bind(&new_client.phone)
        .bind(&new_client.email)
        .bind(&new_client.address)
        .execute(&mut *tx)
        .await?;

        // Keep the sequence ahead of explicit ids so later inserts don't collide.
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('cliente', 'id_cliente'), \
             (SELECT MAX(id_cliente) FROM cliente))",
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    async fn update(&self, id: i64, changes: ClientChanges) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE cliente SET
                nome_cliente      = $2,
                cpf_cliente       = $3,
                telefone_cliente  = $4,
                email_cliente     = $5,
                endereco_completo = $6
            WHERE id_cliente = $1
              AND (nome_cliente, cpf_cliente, telefone_cliente, email_cliente, endereco_completo)
                  IS DISTINCT FROM ($2::TEXT, $3::TEXT, $4::TEXT, $5::TEXT, $6::TEXT)
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.tax_id)
        .bind(&changes.phone)
        .bind(&changes.email)
        .bind(&changes.address)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cliente WHERE id_cliente = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
