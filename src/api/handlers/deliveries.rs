//! Handlers for delivery endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::delivery::{
    DeliveryCreatedResponse, DeliveryItem, DeliveryRequest, DeliveryUpdatedResponse,
    QuoteRequest, QuoteResponse,
};
use crate::api::dto::message::MessageResponse;
use crate::api::extractors::{ApiPath, ValidatedJson};
use crate::domain::pricing::PricingInput;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /entregas`
pub async fn list_deliveries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeliveryItem>>, AppError> {
    let deliveries = state.delivery_service.list_deliveries().await?;
    Ok(Json(deliveries.into_iter().map(DeliveryItem::from).collect()))
}

/// `GET /entregas/{id}`
pub async fn get_delivery_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeliveryItem>, AppError> {
    let delivery = state.delivery_service.get_delivery(id).await?;
    Ok(Json(delivery.into()))
}

fn log_ignored_fields(payload: &DeliveryRequest) {
    let ignored = payload.ignored_fields();
    if !ignored.is_empty() {
        tracing::debug!(
            order_id = payload.id_pedidos,
            fields = ?ignored,
            "Ignoring delivery request fields, prices come from the order"
        );
    }
}

/// Prices and stores a delivery for an order.
///
/// # Endpoint
///
/// `POST /entregas`
///
/// # Errors
///
/// Returns 400 if `idPedidos` is missing.
/// Returns 404 if the order does not exist.
pub async fn create_delivery_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DeliveryRequest>,
) -> Result<(StatusCode, Json<DeliveryCreatedResponse>), AppError> {
    log_ignored_fields(&payload);
    let delivery = state
        .delivery_service
        .create_delivery(payload.id_pedidos, payload.tipo_entrega.unwrap_or_default())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DeliveryCreatedResponse {
            message: "Delivery created successfully".to_string(),
            id: delivery.id,
            entrega: delivery.into(),
        }),
    ))
}

/// Re-prices a delivery from its (possibly new) order.
///
/// # Endpoint
///
/// `PUT /entregas/{id}`
///
/// # Errors
///
/// Returns 400 if `idPedidos` is missing.
/// Returns 404 if the delivery or the order does not exist.
pub async fn update_delivery_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DeliveryRequest>,
) -> Result<Json<DeliveryUpdatedResponse>, AppError> {
    log_ignored_fields(&payload);
    let delivery = state
        .delivery_service
        .update_delivery(id, payload.id_pedidos, payload.tipo_entrega)
        .await?;

    Ok(Json(DeliveryUpdatedResponse {
        message: "Delivery updated successfully".to_string(),
        entrega: delivery.into(),
    }))
}

/// `DELETE /entregas/{id}`
pub async fn delete_delivery_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.delivery_service.delete_delivery(id).await?;
    Ok(Json(MessageResponse::new("Delivery deleted successfully")))
}

/// Prices raw inputs without storing anything.
///
/// # Endpoint
///
/// `POST /entregas/cotacao`
pub async fn quote_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let input = PricingInput::from(payload);
    let quote = state.delivery_service.quote(&input)?;
    Ok(Json(QuoteResponse::new(quote, input.delivery_type)))
}
