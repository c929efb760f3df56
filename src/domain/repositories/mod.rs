//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ClientRepository`] - Client CRUD and tax-id lookup
//! - [`OrderRepository`] - Order CRUD
//! - [`DeliveryRepository`] - Delivery CRUD
//! - [`OrderDeliveryCoordinator`] - Atomic order + delivery updates
//!
//! # Conventions
//!
//! - `find_by_id` returns `Ok(None)` for a missing id, never an error
//! - `create` returns the new identifier
//! - `update` returns the number of changed rows
//! - `delete` returns whether a row was removed; a row that is still
//!   referenced yields [`crate::error::AppError::Conflict`]
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod client_repository;
pub mod delivery_repository;
pub mod order_delivery_coordinator;
pub mod order_repository;

pub use client_repository::ClientRepository;
pub use delivery_repository::DeliveryRepository;
pub use order_delivery_coordinator::{OrderDeliveryCoordinator, RepricedOrder};
pub use order_repository::OrderRepository;

#[cfg(test)]
pub use client_repository::MockClientRepository;
#[cfg(test)]
pub use delivery_repository::MockDeliveryRepository;
#[cfg(test)]
pub use order_delivery_coordinator::MockOrderDeliveryCoordinator;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
