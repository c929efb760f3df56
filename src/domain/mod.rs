//! Domain layer containing business entities and logic.
//!
//! It defines entities, repository interfaces and the pricing engine,
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`pricing`] - Pure delivery pricing computation
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Order Update Flow
//!
//! 1. HTTP handler validates the new order fields
//! 2. [`crate::application::services::OrderService`] checks the owning client
//! 3. [`repositories::OrderDeliveryCoordinator`] rewrites the order and
//!    re-prices its deliveries with [`pricing::quote`] in one transaction

pub mod entities;
pub mod pricing;
pub mod repositories;
