//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! existence checks and business rules. Services consume repository traits and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::client_service::ClientService`] - Client registration and maintenance
//! - [`services::order_service::OrderService`] - Orders and cascading re-pricing
//! - [`services::delivery_service::DeliveryService`] - Delivery pricing and storage
//!
//! # Generic Repositories
//!
//! Services are generic over their repositories (`?Sized`), so the server
//! stores them behind trait objects while unit tests plug in `mockall` mocks.

pub mod services;
