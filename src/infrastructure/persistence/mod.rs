//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through [`sqlx::FromRow`] row types.
//!
//! # Repositories
//!
//! - [`PgClientRepository`] - Client storage and tax-id lookup
//! - [`PgOrderRepository`] - Order storage
//! - [`PgDeliveryRepository`] - Delivery storage
//! - [`PgOrderDeliveryCoordinator`] - Transactional order + delivery updates

pub mod pg_client_repository;
pub mod pg_delivery_repository;
pub mod pg_order_delivery_coordinator;
pub mod pg_order_repository;
mod rows;

pub use pg_client_repository::PgClientRepository;
pub use pg_delivery_repository::PgDeliveryRepository;
pub use pg_order_delivery_coordinator::PgOrderDeliveryCoordinator;
pub use pg_order_repository::PgOrderRepository;
