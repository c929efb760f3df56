//! Helper functions shared across layers.
//!
//! - [`db_error`] - Classification of sqlx database errors

pub mod db_error;
