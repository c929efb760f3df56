//! Handlers for client endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;

use crate::api::dto::client::{ClientItem, CreateClientRequest, UpdateClientRequest};
use crate::api::dto::message::{CreatedResponse, MessageResponse};
use crate::api::extractors::{ApiPath, ValidatedJson};
use crate::domain::entities::{ClientChanges, NewClient};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all clients.
///
/// # Endpoint
///
/// `GET /clientes`
///
/// # Errors
///
/// Returns 404 when no client is registered.
pub async fn list_clients_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientItem>>, AppError> {
    let clients = state.client_service.list_clients().await?;

    if clients.is_empty() {
        return Err(AppError::not_found("No clients found", Value::Null));
    }

    Ok(Json(clients.into_iter().map(ClientItem::from).collect()))
}

/// `GET /clientes/{id}`
pub async fn get_client_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<ClientItem>, AppError> {
    let client = state.client_service.get_client(id).await?;
    Ok(Json(client.into()))
}

/// Registers a client.
///
/// # Endpoint
///
/// `POST /clientes`
///
/// # Errors
///
/// Returns 400 if a field is missing or invalid, or if the id or CPF is taken.
pub async fn create_client_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateClientRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let new_client = NewClient::new(
        payload.id_cliente,
        &payload.nome_cliente,
        &payload.cpf_cliente,
        &payload.telefone_cliente,
        &payload.email_cliente,
        payload.endereco_completo.as_deref(),
    )?;

    let id = state.client_service.create_client(new_client).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Client created successfully".to_string(),
            id,
        }),
    ))
}

/// Replaces all fields of a client.
///
/// # Endpoint
///
/// `PUT /clientes/{id}`
///
/// # Errors
///
/// Returns 400 if a field is missing, the CPF belongs to another client or
/// nothing changed.
/// Returns 404 if the client does not exist.
pub async fn update_client_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateClientRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let changes = ClientChanges::new(
        &payload.nome_cliente,
        &payload.cpf_cliente,
        &payload.telefone_cliente,
        &payload.email_cliente,
        &payload.endereco_completo,
    )?;

    state.client_service.update_client(id, changes).await?;

    Ok(Json(MessageResponse::new("Client updated successfully")))
}

/// Deletes a client.
///
/// # Endpoint
///
/// `DELETE /clientes/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not positive or the client still has orders.
/// Returns 404 if the client does not exist.
pub async fn delete_client_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.client_service.delete_client(id).await?;
    Ok(Json(MessageResponse::new("Client deleted successfully")))
}

#[cfg(test)]
mod tests {
    use crate::api::handlers::test_support::Mocks;
    use crate::domain::entities::Client;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    fn client(id: i64) -> Client {
        Client {
            id,
            name: "Ana Souza".to_string(),
            tax_id: "12345678900".to_string(),
            phone: "11999990000".to_string(),
            email: "ana@example.com".to_string(),
            address: Some("Rua A, 10".to_string()),
        }
    }

    fn update_body() -> Value {
        json!({
            "nomeCliente": "Ana Souza",
            "cpfCliente": "12345678900",
            "telefoneCliente": "11999990000",
            "emailCliente": "ana@example.com",
            "enderecoCompleto": "Rua A, 10"
        })
    }

    #[tokio::test]
    async fn test_list_clients_empty_is_not_found() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_list().returning(|| Ok(Vec::new()));

        let response = mocks.server().get("/clientes").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_list_clients() {
        let mut mocks = Mocks::new();
        mocks
            .clients
            .expect_list()
            .returning(|| Ok(vec![client(1), client(2)]));

        let response = mocks.server().get("/clientes").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[1]["idCliente"], 2);
        assert_eq!(body[0]["nomeCliente"], "Ana Souza");
    }

    #[tokio::test]
    async fn test_get_client_bad_id() {
        let response = Mocks::new().server().get("/clientes/abc").await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_create_client_returns_id() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_find_by_tax_id().returning(|_| Ok(None));
        mocks
            .clients
            .expect_create()
            .withf(|c| c.name == "Ana" && c.address.is_none())
            .returning(|_| Ok(10));

        let response = mocks
            .server()
            .post("/clientes")
            .json(&json!({
                "nomeCliente": "  Ana ",
                "cpfCliente": "12345678900",
                "telefoneCliente": "119",
                "emailCliente": "ana@example.com",
                "enderecoCompleto": "   "
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["id"], 10);
        assert_eq!(body["message"], "Client created successfully");
    }

    #[tokio::test]
    async fn test_create_client_missing_field() {
        let response = Mocks::new()
            .server()
            .post("/clientes")
            .json(&json!({ "nomeCliente": "Ana" }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_update_client_unchanged_is_bad_request() {
        let mut mocks = Mocks::new();
        mocks
            .clients
            .expect_find_by_id()
            .returning(|id| Ok(Some(client(id))));
        mocks
            .clients
            .expect_find_by_tax_id()
            .returning(|_| Ok(Some(client(4))));
        mocks.clients.expect_update().returning(|_, _| Ok(0));

        let response = mocks.server().put("/clientes/4").json(&update_body()).await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["code"], "no_effect");
    }

    #[tokio::test]
    async fn test_update_client_not_found() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_find_by_id().returning(|_| Ok(None));

        let response = mocks.server().put("/clientes/4").json(&update_body()).await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_client_zero_id() {
        let response = Mocks::new().server().delete("/clientes/0").await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_delete_client() {
        let mut mocks = Mocks::new();
        mocks
            .clients
            .expect_find_by_id()
            .returning(|id| Ok(Some(client(id))));
        mocks.clients.expect_delete().returning(|_| Ok(true));

        let response = mocks.server().delete("/clientes/3").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>()["message"],
            "Client deleted successfully"
        );
    }
}
