//! Order entity.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::pricing::{self, DeliveryType, PricingError, PricingInput};

/// A client's shipment request.
///
/// Distance, weight and the two base rates are the inputs from which the
/// cost of every delivery of this order is computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub order_date: NaiveDate,
    pub distance_km: Decimal,
    pub weight_kg: Decimal,
    pub rate_per_km: Decimal,
    pub rate_per_kg: Decimal,
}

impl Order {
    /// Pricing inputs for a delivery of this order.
    pub fn pricing_input(&self, delivery_type: DeliveryType) -> PricingInput {
        PricingInput {
            distance_km: self.distance_km,
            weight_kg: self.weight_kg,
            rate_per_km: self.rate_per_km,
            rate_per_kg: self.rate_per_kg,
            delivery_type,
        }
    }

    /// The current field values, e.g. to re-save the order unchanged.
    pub fn fields(&self) -> OrderFields {
        OrderFields {
            client_id: self.client_id,
            order_date: self.order_date,
            distance_km: self.distance_km,
            weight_kg: self.weight_kg,
            rate_per_km: self.rate_per_km,
            rate_per_kg: self.rate_per_kg,
        }
    }
}

/// Field set used both to create an order and to replace an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub client_id: i64,
    pub order_date: NaiveDate,
    pub distance_km: Decimal,
    pub weight_kg: Decimal,
    pub rate_per_km: Decimal,
    pub rate_per_kg: Decimal,
}

impl OrderFields {
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] if a quantity or rate is negative,
    /// or if an urgent delivery of the order would cost more than a delivery
    /// can store. Urgent is the most expensive type, so every delivery of an
    /// accepted order can be priced.
    pub fn new(
        client_id: i64,
        order_date: NaiveDate,
        distance_km: Decimal,
        weight_kg: Decimal,
        rate_per_km: Decimal,
        rate_per_kg: Decimal,
    ) -> Result<Self, PricingError> {
        let fields = Self {
            client_id,
            order_date,
            distance_km,
            weight_kg,
            rate_per_km,
            rate_per_kg,
        };
        pricing::quote(&fields.pricing_input(DeliveryType::Urgent))?;
        Ok(fields)
    }

    /// The order these fields describe once stored under `id`.
    pub fn into_order(self, id: i64) -> Order {
        Order {
            id,
            client_id: self.client_id,
            order_date: self.order_date,
            distance_km: self.distance_km,
            weight_kg: self.weight_kg,
            rate_per_km: self.rate_per_km,
            rate_per_kg: self.rate_per_kg,
        }
    }

    fn pricing_input(&self, delivery_type: DeliveryType) -> PricingInput {
        PricingInput {
            distance_km: self.distance_km,
            weight_kg: self.weight_kg,
            rate_per_km: self.rate_per_km,
            rate_per_kg: self.rate_per_kg,
            delivery_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_order_fields_accept_zero() {
        let fields = OrderFields::new(
            1,
            date(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        );

        assert!(fields.is_ok());
    }

    #[test]
    fn test_order_fields_reject_negative_rate() {
        let result = OrderFields::new(
            1,
            date(),
            Decimal::from(10),
            Decimal::from(5),
            Decimal::from(2),
            Decimal::from(-1),
        );

        assert_eq!(
            result,
            Err(PricingError::InvalidInput {
                field: "rate_per_kg",
                reason: "must not be negative",
            })
        );
    }

    #[test]
    fn test_order_fields_reject_unstorable_price() {
        let result = OrderFields::new(
            1,
            date(),
            Decimal::from(1_000_000_000_000i64),
            Decimal::from(5),
            Decimal::from(1000),
            Decimal::from(1),
        );

        assert!(matches!(
            result,
            Err(PricingError::InvalidInput {
                reason: "is out of range",
                ..
            })
        ));
    }

    #[test]
    fn test_into_order_keeps_fields() {
        let fields = OrderFields::new(
            7,
            date(),
            Decimal::from(10),
            Decimal::from(5),
            Decimal::from(2),
            Decimal::from(1),
        )
        .unwrap();

        let order = fields.clone().into_order(42);
        assert_eq!(order.fields(), fields);

        assert_eq!(order.id, 42);
        assert_eq!(order.client_id, 7);
        assert_eq!(order.distance_km, fields.distance_km);
        assert_eq!(
            order.pricing_input(DeliveryType::Urgent).delivery_type,
            DeliveryType::Urgent
        );
    }
}
