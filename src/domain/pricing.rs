//! Delivery pricing engine.
//!
//! Turns the pricing inputs of an order (distance, cargo weight, per-unit
//! rates) and a [`DeliveryType`] into the cost breakdown stored on a delivery.
//!
//! # Algorithm
//!
//! Steps run in a fixed order, each one working on the running subtotal:
//!
//! 1. `distance_cost = distance_km * rate_per_km`
//! 2. `weight_cost = weight_kg * rate_per_kg`
//! 3. `subtotal = distance_cost + weight_cost`
//! 4. urgent deliveries add a 20% surcharge of the subtotal
//! 5. a subtotal above 500 receives a single 10% discount
//! 6. cargo heavier than 50 kg adds a flat fee of 15
//!
//! # Precision
//!
//! Arithmetic is exact ([`Decimal`]) and every derived amount is rounded to
//! two decimal places (midpoint away from zero) before it feeds the next
//! step. The breakdown therefore always adds up to the total, see
//! [`Quote::components_total`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surcharge applied to urgent deliveries (20%).
pub const URGENT_SURCHARGE_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Subtotal above which the volume discount applies.
pub const DISCOUNT_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Volume discount rate (10%).
pub const DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Cargo weight above which the flat fee is charged. Exactly 50 kg is exempt.
pub const HEAVY_CARGO_THRESHOLD_KG: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Flat fee charged for heavy cargo.
pub const HEAVY_CARGO_FEE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Largest amount a delivery can store (`NUMERIC(14, 2)`).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

const MONEY_SCALE: u32 = 2;

/// Delivery service level.
///
/// Parsing is permissive: `urgent` (or the legacy `urgente`), in any case,
/// selects [`DeliveryType::Urgent`]; every other value is a normal delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DeliveryType {
    #[default]
    Normal,
    Urgent,
}

impl DeliveryType {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("urgent") || value.eq_ignore_ascii_case("urgente") {
            Self::Urgent
        } else {
            Self::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Urgent => "urgent",
        }
    }
}

impl From<String> for DeliveryType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("{field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}

impl PricingError {
    fn negative(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            reason: "must not be negative",
        }
    }

    fn out_of_range(field: &'static str) -> Self {
        Self::InvalidInput {
            field,
            reason: "is out of range",
        }
    }
}

/// Inputs of a single pricing run.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingInput {
    pub distance_km: Decimal,
    pub weight_kg: Decimal,
    pub rate_per_km: Decimal,
    pub rate_per_kg: Decimal,
    pub delivery_type: DeliveryType,
}

impl PricingInput {
    /// Rejects negative quantities and rates.
    pub fn validate(&self) -> Result<(), PricingError> {
        let fields = [
            ("distance_km", self.distance_km),
            ("weight_kg", self.weight_kg),
            ("rate_per_km", self.rate_per_km),
            ("rate_per_kg", self.rate_per_kg),
        ];

        match fields.iter().find(|(_, value)| value.is_sign_negative() && !value.is_zero()) {
            Some(&(field, _)) => Err(PricingError::negative(field)),
            None => Ok(()),
        }
    }
}

/// Cost breakdown of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub distance_cost: Decimal,
    pub weight_cost: Decimal,
    pub surcharge: Decimal,
    pub discount: Decimal,
    pub flat_fee: Decimal,
    pub total: Decimal,
}

impl Quote {
    /// Re-adds the individual components. Equal to `total` for every quote
    /// produced by [`quote`].
    pub fn components_total(&self) -> Decimal {
        self.distance_cost + self.weight_cost + self.surcharge - self.discount + self.flat_fee
    }
}

/// Prices a delivery.
///
/// # Errors
///
/// Returns [`PricingError::InvalidInput`] if any input is negative or an
/// amount exceeds [`MAX_AMOUNT`].
pub fn quote(input: &PricingInput) -> Result<Quote, PricingError> {
    input.validate()?;

    let distance_cost = bounded(
        "distance_cost",
        input.distance_km.checked_mul(input.rate_per_km),
    )?;
    let weight_cost = bounded("weight_cost", input.weight_kg.checked_mul(input.rate_per_kg))?;

    let mut subtotal = bounded("total", distance_cost.checked_add(weight_cost))?;

    let surcharge = match input.delivery_type {
        DeliveryType::Urgent => bounded("surcharge", subtotal.checked_mul(URGENT_SURCHARGE_RATE))?,
        DeliveryType::Normal => Decimal::ZERO,
    };
    subtotal = bounded("total", subtotal.checked_add(surcharge))?;

    let discount = if subtotal > DISCOUNT_THRESHOLD {
        money(subtotal * DISCOUNT_RATE)
    } else {
        Decimal::ZERO
    };
    subtotal -= discount;

    let flat_fee = if input.weight_kg > HEAVY_CARGO_THRESHOLD_KG {
        HEAVY_CARGO_FEE
    } else {
        Decimal::ZERO
    };
    let total = bounded("total", subtotal.checked_add(flat_fee))?;

    Ok(Quote {
        distance_cost,
        weight_cost,
        surcharge,
        discount,
        flat_fee,
        total,
    })
}

fn money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an amount to cents, rejecting overflow and anything a delivery
/// row could not store.
fn bounded(field: &'static str, amount: Option<Decimal>) -> Result<Decimal, PricingError> {
    match amount.map(money) {
        Some(amount) if amount <= MAX_AMOUNT => Ok(amount),
        _ => Err(PricingError::out_of_range(field)),
    }
}
