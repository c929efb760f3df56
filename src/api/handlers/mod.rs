//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod clients;
pub mod deliveries;
pub mod orders;

pub use clients::{
    create_client_handler, delete_client_handler, get_client_handler, list_clients_handler,
    update_client_handler,
};
pub use deliveries::{
    create_delivery_handler, delete_delivery_handler, get_delivery_handler,
    list_deliveries_handler, quote_handler, update_delivery_handler,
};
pub use orders::{
    create_order_handler, delete_order_handler, get_order_handler, list_orders_handler,
    update_order_delivery_handler, update_order_handler,
};
