//! DTOs for order endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::delivery::DeliveryItem;
use super::non_negative;
use crate::domain::entities::{Order, OrderFields};
use crate::domain::pricing::DeliveryType;
use crate::error::AppError;

/// Order as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id_pedidos: i64,
    pub id_cliente: i64,
    pub data_pedido: NaiveDate,
    pub distancia: Decimal,
    pub peso_carga: Decimal,
    pub valor_base_km: Decimal,
    pub valor_base_kg: Decimal,
}

impl From<Order> for OrderItem {
    fn from(o: Order) -> Self {
        Self {
            id_pedidos: o.id,
            id_cliente: o.client_id,
            data_pedido: o.order_date,
            distancia: o.distance_km,
            peso_carga: o.weight_kg,
            valor_base_km: o.rate_per_km,
            valor_base_kg: o.rate_per_kg,
        }
    }
}

/// Order fields, used to create and to replace an order.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[validate(range(min = 1))]
    pub id_cliente: i64,

    /// `YYYY-MM-DD`
    pub data_pedido: NaiveDate,

    #[validate(custom(function = "non_negative"))]
    pub distancia: Decimal,

    #[validate(custom(function = "non_negative"))]
    pub peso_carga: Decimal,

    #[validate(custom(function = "non_negative"))]
    pub valor_base_km: Decimal,

    #[validate(custom(function = "non_negative"))]
    pub valor_base_kg: Decimal,
}

impl OrderRequest {
    pub fn into_fields(self) -> Result<OrderFields, AppError> {
        Ok(OrderFields::new(
            self.id_cliente,
            self.data_pedido,
            self.distancia,
            self.peso_carga,
            self.valor_base_km,
            self.valor_base_kg,
        )?)
    }
}

/// New order fields plus an optional new type for the delivery being
/// re-priced alongside.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderDeliveryRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub pedido: OrderRequest,

    pub tipo_entrega: Option<DeliveryType>,
}

/// Response to an order update, with the deliveries re-priced from it.
#[derive(Debug, Serialize)]
pub struct OrderUpdatedResponse {
    pub message: String,
    pub pedido: OrderItem,
    pub entregas: Vec<DeliveryItem>,
}

/// Response to a combined order and delivery update.
#[derive(Debug, Serialize)]
pub struct OrderDeliveryUpdatedResponse {
    pub message: String,
    pub pedido: OrderItem,
    pub entrega: DeliveryItem,
}
