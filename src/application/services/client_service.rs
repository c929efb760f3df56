//! Client management service.

use crate::domain::entities::{Client, ClientChanges, NewClient};
use crate::domain::repositories::ClientRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for registering and maintaining clients.
///
/// Enforces:
/// - Unique tax id (CPF) across clients
/// - Updates that change nothing are reported, not silently accepted
/// - Clients with orders cannot be deleted
pub struct ClientService<R: ClientRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ClientRepository + ?Sized> ClientService<R> {
    /// Creates a new client service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all clients.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a client by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the client does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_client(&self, id: i64) -> Result<Client, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| client_not_found(id))
    }

    /// Registers a client and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the explicit id or the tax id is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_client(&self, new_client: NewClient) -> Result<i64, AppError> {
        if let Some(id) = new_client.id
            && self.repository.find_by_id(id).await?.is_some()
        {
            return Err(AppError::conflict(
                "Client id already in use",
                json!({ "idCliente": id }),
            ));
        }

        if self
            .repository
            .find_by_tax_id(&new_client.tax_id)
            .await?
            .is_some()
        {
            return Err(tax_id_taken(&new_client.tax_id));
        }

        let tax_id = new_client.tax_id.clone();
        let id = self
            .repository
            .create(new_client)
            .await
            .map_err(|e| e.on_conflict("Client already exists", json!({ "cpfCliente": tax_id })))?;

        tracing::info!(client_id = id, "Client created");
        Ok(id)
    }

    /// Replaces all fields of a client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the client does not exist.
    /// Returns [`AppError::Conflict`] if the tax id belongs to another client.
    /// Returns [`AppError::NoEffect`] if the stored values already match.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_client(&self, id: i64, changes: ClientChanges) -> Result<(), AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(client_not_found(id));
        }

        if let Some(owner) = self.repository.find_by_tax_id(&changes.tax_id).await?
            && owner.id != id
        {
            return Err(tax_id_taken(&changes.tax_id));
        }

        let tax_id = changes.tax_id.clone();
        let changed = self
            .repository
            .update(id, changes)
            .await
            .map_err(|e| e.on_conflict("Client already exists", json!({ "cpfCliente": tax_id })))?;

        if changed == 0 {
            return Err(AppError::no_effect(
                "No changes were made to the client",
                json!({ "idCliente": id }),
            ));
        }

        tracing::info!(client_id = id, "Client updated");
        Ok(())
    }

    /// Deletes a client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not positive.
    /// Returns [`AppError::NotFound`] if the client does not exist.
    /// Returns [`AppError::Conflict`] if the client still has orders.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_client(&self, id: i64) -> Result<(), AppError> {
        if id <= 0 {
            return Err(AppError::bad_request(
                "Invalid client id",
                json!({ "idCliente": id }),
            ));
        }

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(client_not_found(id));
        }

        let deleted = self.repository.delete(id).await.map_err(|e| {
            e.on_conflict(
                "Client has orders and cannot be deleted",
                json!({ "idCliente": id }),
            )
        })?;

        if !deleted {
            return Err(client_not_found(id));
        }

        tracing::info!(client_id = id, "Client deleted");
        Ok(())
    }
}

pub(crate) fn client_not_found(id: i64) -> AppError {
    AppError::not_found("Client not found", json!({ "idCliente": id }))
}

fn tax_id_taken(tax_id: &str) -> AppError {
    AppError::conflict(
        "A client with this CPF already exists",
        json!({ "cpfCliente": tax_id }),
    )
}
