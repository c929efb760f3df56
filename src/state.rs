//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ClientService, DeliveryService, OrderService};
use crate::domain::repositories::{
    ClientRepository, DeliveryRepository, OrderDeliveryCoordinator, OrderRepository,
};
use crate::infrastructure::persistence::{
    PgClientRepository, PgDeliveryRepository, PgOrderDeliveryCoordinator, PgOrderRepository,
};

pub type SharedClientService = ClientService<dyn ClientRepository>;
pub type SharedOrderService =
    OrderService<dyn OrderRepository, dyn ClientRepository, dyn OrderDeliveryCoordinator>;
pub type SharedDeliveryService =
    DeliveryService<dyn DeliveryRepository, dyn OrderDeliveryCoordinator>;

/// Services shared across request handlers.
///
/// Repositories sit behind trait objects, so the same state type serves the
/// PostgreSQL-backed server and handler tests built on mocks.
#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<SharedClientService>,
    pub order_service: Arc<SharedOrderService>,
    pub delivery_service: Arc<SharedDeliveryService>,
}

impl AppState {
    /// Wires the PostgreSQL repositories around a shared pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::from_repositories(
            Arc::new(PgClientRepository::new(pool.clone())),
            Arc::new(PgOrderRepository::new(pool.clone())),
            Arc::new(PgDeliveryRepository::new(pool.clone())),
            Arc::new(PgOrderDeliveryCoordinator::new(pool)),
        )
    }

    pub fn from_repositories(
        clients: Arc<dyn ClientRepository>,
        orders: Arc<dyn OrderRepository>,
        deliveries: Arc<dyn DeliveryRepository>,
        coordinator: Arc<dyn OrderDeliveryCoordinator>,
    ) -> Self {
        Self {
            client_service: Arc::new(ClientService::new(clients.clone())),
            order_service: Arc::new(OrderService::new(orders, clients, coordinator.clone())),
            delivery_service: Arc::new(DeliveryService::new(deliveries, coordinator)),
        }
    }
}
