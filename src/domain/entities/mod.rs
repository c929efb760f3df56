//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Client`] - A customer placing orders
//! - [`Order`] - A shipment request carrying the pricing inputs
//! - [`Delivery`] - The priced fulfilment record of an order
//!
//! # Design Pattern
//!
//! Stored records are paired with input types that validate on construction:
//! - `NewClient`, `ClientChanges` - For creating and replacing clients
//! - `OrderFields` - For creating and replacing orders
//! - `NewDelivery` - A delivery priced from its order

pub mod client;
pub mod delivery;
pub mod order;

pub use client::{Client, ClientChanges, NewClient};
pub use delivery::{Delivery, NewDelivery};
pub use order::{Order, OrderFields};
