//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names follow the public camelCase contract
//! (`idCliente`, `valorFinal`, ...), independent of the domain names.

pub mod client;
pub mod delivery;
pub mod message;
pub mod order;

use rust_decimal::Decimal;
use validator::ValidationError;

/// Rejects negative quantities and rates.
pub(crate) fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}
