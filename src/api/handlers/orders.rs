//! Handlers for order endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::delivery::DeliveryItem;
use crate::api::dto::message::{CreatedResponse, MessageResponse};
use crate::api::dto::order::{
    OrderDeliveryRequest, OrderDeliveryUpdatedResponse, OrderItem, OrderRequest,
    OrderUpdatedResponse,
};
use crate::api::extractors::{ApiPath, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /pedidos`
pub async fn list_orders_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderItem>>, AppError> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders.into_iter().map(OrderItem::from).collect()))
}

/// `GET /pedidos/{id}`
pub async fn get_order_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<OrderItem>, AppError> {
    let order = state.order_service.get_order(id).await?;
    Ok(Json(order.into()))
}

/// Creates an order.
///
/// # Endpoint
///
/// `POST /pedidos`
///
/// # Errors
///
/// Returns 400 if a field is missing or negative.
/// Returns 404 if the client does not exist.
pub async fn create_order_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state
        .order_service
        .create_order(payload.into_fields()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Order created successfully".to_string(),
            id,
        }),
    ))
}

/// Replaces an order and re-prices its deliveries in one transaction.
///
/// # Endpoint
///
/// `PUT /pedidos/{id}`
///
/// # Errors
///
/// Returns 400 if a field is missing or negative.
/// Returns 404 if the order or the client does not exist.
pub async fn update_order_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderRequest>,
) -> Result<Json<OrderUpdatedResponse>, AppError> {
    let repriced = state
        .order_service
        .update_order(id, payload.into_fields()?)
        .await?;

    Ok(Json(OrderUpdatedResponse {
        message: "Order updated successfully".to_string(),
        pedido: repriced.order.into(),
        entregas: repriced
            .deliveries
            .into_iter()
            .map(DeliveryItem::from)
            .collect(),
    }))
}

/// Replaces an order and re-prices one of its deliveries atomically.
///
/// # Endpoint
///
/// `PUT /pedidos/{id}/entregas/{delivery_id}`
///
/// # Errors
///
/// Returns 400 if a field is missing or the delivery belongs to another order.
/// Returns 404 if the order, the delivery or the client does not exist.
pub async fn update_order_delivery_handler(
    ApiPath((id, delivery_id)): ApiPath<(i64, i64)>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderDeliveryRequest>,
) -> Result<Json<OrderDeliveryUpdatedResponse>, AppError> {
    let (order, delivery) = state
        .order_service
        .update_order_with_delivery(
            id,
            payload.pedido.into_fields()?,
            delivery_id,
            payload.tipo_entrega,
        )
        .await?;

    Ok(Json(OrderDeliveryUpdatedResponse {
        message: "Order and delivery updated successfully".to_string(),
        pedido: order.into(),
        entrega: delivery.into(),
    }))
}

/// Deletes an order.
///
/// # Endpoint
///
/// `DELETE /pedidos/{id}`
///
/// # Errors
///
/// Returns 400 if deliveries still reference the order.
/// Returns 404 if the order does not exist.
pub async fn delete_order_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.order_service.delete_order(id).await?;
    Ok(Json(MessageResponse::new("Order deleted successfully")))
}

#[cfg(test)]
mod tests {
    use crate::api::handlers::test_support::Mocks;
    use crate::domain::entities::{Client, NewDelivery, OrderFields};
    use crate::domain::pricing::DeliveryType;
    use crate::domain::repositories::RepricedOrder;
    use crate::error::AppError;
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};

    fn body() -> Value {
        json!({
            "idCliente": 1,
            "dataPedido": "2025-02-10",
            "distancia": 300,
            "pesoCarga": 60,
            "valorBaseKm": 2,
            "valorBaseKg": 1
        })
    }

    fn with_client(mocks: &mut Mocks) {
        mocks.clients.expect_find_by_id().returning(|id| {
            Ok(Some(Client {
                id,
                name: "Ana".to_string(),
                tax_id: "1".to_string(),
                phone: "1".to_string(),
                email: "ana@example.com".to_string(),
                address: None,
            }))
        });
    }

    fn with_order(mocks: &mut Mocks) {
        mocks.orders.expect_find_by_id().returning(|id| {
            Ok(Some(
                OrderFields::new(
                    1,
                    NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                    Decimal::from(10),
                    Decimal::from(5),
                    Decimal::from(2),
                    Decimal::from(1),
                )
                .unwrap()
                .into_order(id),
            ))
        });
    }

    #[tokio::test]
    async fn test_list_orders_empty_is_ok() {
        let mut mocks = Mocks::new();
        mocks.orders.expect_list().returning(|| Ok(Vec::new()));

        let response = mocks.server().get("/pedidos").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn test_create_order_unknown_client() {
        let mut mocks = Mocks::new();
        mocks.clients.expect_find_by_id().returning(|_| Ok(None));

        let response = mocks.server().post("/pedidos").json(&body()).await;

        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["message"], "Client not found");
    }

    #[tokio::test]
    async fn test_create_order() {
        let mut mocks = Mocks::new();
        with_client(&mut mocks);
        mocks.orders.expect_create().returning(|_| Ok(5));

        let response = mocks.server().post("/pedidos").json(&body()).await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["id"], 5);
    }

    #[tokio::test]
    async fn test_create_order_negative_weight() {
        let mut value = body();
        value["pesoCarga"] = json!(-1);

        let response = Mocks::new().server().post("/pedidos").json(&value).await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_update_order_returns_repriced_deliveries() {
        let mut mocks = Mocks::new();
        with_order(&mut mocks);
        with_client(&mut mocks);
        mocks.coordinator.expect_update_order().returning(|id, fields| {
            let order = fields.into_order(id);
            let delivery = NewDelivery::priced(&order, DeliveryType::Urgent)
                .unwrap()
                .into_delivery(11);
            Ok(RepricedOrder {
                order,
                deliveries: vec![delivery],
            })
        });

        let response = mocks.server().put("/pedidos/2").json(&body()).await;

        response.assert_status_ok();
        let json = response.json::<Value>();
        assert_eq!(json["pedido"]["idPedidos"], 2);
        let entrega = &json["entregas"][0];
        assert_eq!(entrega["valorDistancia"], 600.0);
        assert_eq!(entrega["valorPeso"], 60.0);
        assert_eq!(entrega["acrescimo"], 132.0);
        assert_eq!(entrega["desconto"], 79.2);
        assert_eq!(entrega["taxa"], 15.0);
        assert_eq!(entrega["valorFinal"], 727.8);
        assert_eq!(entrega["tipoEntrega"], "urgent");
    }

    #[tokio::test]
    async fn test_update_order_missing() {
        let mut mocks = Mocks::new();
        mocks.orders.expect_find_by_id().returning(|_| Ok(None));
        mocks.clients.expect_find_by_id().times(0);
        mocks.coordinator.expect_update_order().times(0);

        let mut value = body();
        value["idCliente"] = json!(404);
        let response = mocks.server().put("/pedidos/99").json(&value).await;

        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["message"], "Order not found");
    }

    #[tokio::test]
    async fn test_create_order_price_out_of_range() {
        let mut value = body();
        value["distancia"] = json!(1_000_000_000_000i64);
        value["valorBaseKm"] = json!(1000);

        let response = Mocks::new().server().post("/pedidos").json(&value).await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["code"], "validation_error");
    }

    #[tokio::test]
    async fn test_update_order_and_delivery_mismatch() {
        let mut mocks = Mocks::new();
        with_order(&mut mocks);
        with_client(&mut mocks);
        mocks
            .coordinator
            .expect_update_order_and_delivery()
            .withf(|id, _, delivery_id, _| *id == 2 && *delivery_id == 7)
            .returning(|_, _, _, _| {
                Err(AppError::bad_request(
                    "Delivery does not belong to this order",
                    Value::Null,
                ))
            });

        let response = mocks
            .server()
            .put("/pedidos/2/entregas/7")
            .json(&body())
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_update_order_and_delivery() {
        let mut mocks = Mocks::new();
        with_order(&mut mocks);
        with_client(&mut mocks);
        mocks
            .coordinator
            .expect_update_order_and_delivery()
            .withf(|_, _, _, delivery_type| *delivery_type == Some(DeliveryType::Normal))
            .returning(|id, fields, delivery_id, delivery_type| {
                let order = fields.into_order(id);
                let delivery = NewDelivery::priced(&order, delivery_type.unwrap_or_default())
                    .unwrap()
                    .into_delivery(delivery_id);
                Ok((order, delivery))
            });
        let mut value = body();
        value["tipoEntrega"] = json!("normal");

        let response = mocks
            .server()
            .put("/pedidos/2/entregas/7")
            .json(&value)
            .await;

        response.assert_status_ok();
        let json = response.json::<Value>();
        assert_eq!(json["entrega"]["idEntregas"], 7);
        assert_eq!(json["entrega"]["valorFinal"], 609.0);
    }

    #[tokio::test]
    async fn test_delete_order_missing() {
        let mut mocks = Mocks::new();
        mocks.orders.expect_find_by_id().returning(|_| Ok(None));

        let response = mocks.server().delete("/pedidos/4").await;

        response.assert_status_not_found();
    }
}
