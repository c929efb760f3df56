//! DTOs for delivery endpoints and quote previews.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use super::non_negative;
use crate::domain::entities::Delivery;
use crate::domain::pricing::{DeliveryType, PricingInput, Quote};

/// Delivery as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryItem {
    pub id_entregas: i64,
    pub id_pedidos: i64,
    pub valor_distancia: Decimal,
    pub valor_peso: Decimal,
    pub acrescimo: Decimal,
    pub desconto: Decimal,
    pub taxa: Decimal,
    pub valor_final: Decimal,
    pub tipo_entrega: DeliveryType,
}

impl From<Delivery> for DeliveryItem {
    fn from(d: Delivery) -> Self {
        Self {
            id_entregas: d.id,
            id_pedidos: d.order_id,
            valor_distancia: d.distance_cost,
            valor_peso: d.weight_cost,
            acrescimo: d.surcharge,
            desconto: d.discount,
            taxa: d.flat_fee,
            valor_final: d.total,
            tipo_entrega: d.delivery_type,
        }
    }
}

/// Request to create or re-price a delivery.
///
/// Prices are computed from the referenced order. Any other field sent
/// along (older clients still post `distancia_km`, `peso_kg` and the base
/// rates) is collected in `ignored` and never used.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRequest {
    #[validate(range(min = 1))]
    pub id_pedidos: i64,

    pub tipo_entrega: Option<DeliveryType>,

    #[serde(flatten)]
    pub ignored: Map<String, Value>,
}

impl DeliveryRequest {
    /// Names of the fields that were sent but play no part in pricing.
    pub fn ignored_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.ignored.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }
}

/// Raw pricing inputs for a quote preview.
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(custom(function = "non_negative"))]
    pub distancia_km: Decimal,

    #[validate(custom(function = "non_negative"))]
    pub peso_kg: Decimal,

    #[validate(custom(function = "non_negative"))]
    pub valor_base_km: Decimal,

    #[validate(custom(function = "non_negative"))]
    pub valor_base_kg: Decimal,

    #[serde(rename = "tipoEntrega", default)]
    pub tipo_entrega: DeliveryType,
}

impl From<QuoteRequest> for PricingInput {
    fn from(r: QuoteRequest) -> Self {
        PricingInput {
            distance_km: r.distancia_km,
            weight_kg: r.peso_kg,
            rate_per_km: r.valor_base_km,
            rate_per_kg: r.valor_base_kg,
            delivery_type: r.tipo_entrega,
        }
    }
}

/// Cost breakdown of a quote preview.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub valor_distancia: Decimal,
    pub valor_peso: Decimal,
    pub acrescimo: Decimal,
    pub desconto: Decimal,
    pub taxa: Decimal,
    pub valor_final: Decimal,
    pub tipo_entrega: DeliveryType,
}

impl QuoteResponse {
    pub fn new(quote: Quote, delivery_type: DeliveryType) -> Self {
        Self {
            valor_distancia: quote.distance_cost,
            valor_peso: quote.weight_cost,
            acrescimo: quote.surcharge,
            desconto: quote.discount,
            taxa: quote.flat_fee,
            valor_final: quote.total,
            tipo_entrega: delivery_type,
        }
    }
}

/// Response to a delivery creation.
#[derive(Debug, Serialize)]
pub struct DeliveryCreatedResponse {
    pub message: String,
    pub id: i64,
    pub entrega: DeliveryItem,
}

/// Response to a delivery update.
#[derive(Debug, Serialize)]
pub struct DeliveryUpdatedResponse {
    pub message: String,
    pub entrega: DeliveryItem,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delivery_request_type_is_optional() {
        let request: DeliveryRequest =
            serde_json::from_value(json!({ "idPedidos": 4, "valorFinal": 999 })).unwrap();

        assert_eq!(request.id_pedidos, 4);
        assert!(request.tipo_entrega.is_none());
    }

    #[test]
    fn test_delivery_request_collects_pricing_fields() {
        let request: DeliveryRequest = serde_json::from_value(json!({
            "idPedidos": 4,
            "tipoEntrega": "urgente",
            "distancia_km": 300,
            "peso_kg": 60,
            "valor_base_km": 2,
            "valor_base_kg": 1
        }))
        .unwrap();

        assert_eq!(request.tipo_entrega, Some(DeliveryType::Urgent));
        assert_eq!(
            request.ignored_fields(),
            ["distancia_km", "peso_kg", "valor_base_kg", "valor_base_km"]
        );
    }

    #[test]
    fn test_delivery_request_without_extras() {
        let request: DeliveryRequest =
            serde_json::from_value(json!({ "idPedidos": 4 })).unwrap();

        assert!(request.ignored_fields().is_empty());
    }

    #[test]
    fn test_quote_request_defaults_to_normal() {
        let request: QuoteRequest = serde_json::from_value(json!({
            "distancia_km": 10,
            "peso_kg": 5,
            "valor_base_km": 2,
            "valor_base_kg": 1
        }))
        .unwrap();

        assert_eq!(request.tipo_entrega, DeliveryType::Normal);
    }

    #[test]
    fn test_quote_request_rejects_non_numeric_distance() {
        let result = serde_json::from_value::<QuoteRequest>(json!({
            "distancia_km": "far",
            "peso_kg": 5,
            "valor_base_km": 2,
            "valor_base_kg": 1
        }));

        assert!(result.is_err());
    }
}
