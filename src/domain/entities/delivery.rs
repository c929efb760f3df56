//! Delivery entity.

use rust_decimal::Decimal;

use crate::domain::entities::Order;
use crate::domain::pricing::{self, DeliveryType, PricingError, Quote};

/// The priced fulfilment record of an order.
///
/// Monetary fields are always derived from the owning order through the
/// pricing engine; they are never supplied directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub id: i64,
    pub order_id: i64,
    pub distance_cost: Decimal,
    pub weight_cost: Decimal,
    pub surcharge: Decimal,
    pub discount: Decimal,
    pub flat_fee: Decimal,
    pub total: Decimal,
    pub delivery_type: DeliveryType,
}

impl Delivery {
    pub fn quote(&self) -> Quote {
        Quote {
            distance_cost: self.distance_cost,
            weight_cost: self.weight_cost,
            surcharge: self.surcharge,
            discount: self.discount,
            flat_fee: self.flat_fee,
            total: self.total,
        }
    }
}

/// A delivery priced from its order, ready to be inserted or written over an
/// existing row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDelivery {
    pub order_id: i64,
    pub delivery_type: DeliveryType,
    pub quote: Quote,
}

impl NewDelivery {
    /// Prices a delivery of `order`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] if the order's inputs cannot be priced.
    pub fn priced(order: &Order, delivery_type: DeliveryType) -> Result<Self, PricingError> {
        let quote = pricing::quote(&order.pricing_input(delivery_type))?;

        Ok(Self {
            order_id: order.id,
            delivery_type,
            quote,
        })
    }

    /// The delivery this record becomes once stored under `id`.
    pub fn into_delivery(self, id: i64) -> Delivery {
        Delivery {
            id,
            order_id: self.order_id,
            distance_cost: self.quote.distance_cost,
            weight_cost: self.quote.weight_cost,
            surcharge: self.quote.surcharge,
            discount: self.quote.discount,
            flat_fee: self.quote.flat_fee,
            total: self.quote.total,
            delivery_type: self.delivery_type,
        }
    }
}
