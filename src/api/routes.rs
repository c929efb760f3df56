//! API route configuration.

use crate::api::handlers::{
    create_client_handler, create_delivery_handler, create_order_handler, delete_client_handler,
    delete_delivery_handler, delete_order_handler, get_client_handler, get_delivery_handler,
    get_order_handler, list_clients_handler, list_deliveries_handler, list_orders_handler,
    quote_handler, update_client_handler, update_delivery_handler, update_order_delivery_handler,
    update_order_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// All resource routes.
///
/// # Endpoints
///
/// - `GET|POST        /clientes`
/// - `GET|PUT|DELETE  /clientes/{id}`
/// - `GET|POST        /pedidos`
/// - `GET|PUT|DELETE  /pedidos/{id}`
/// - `PUT             /pedidos/{id}/entregas/{delivery_id}` - Atomic order + delivery update
/// - `GET|POST        /entregas`
/// - `POST            /entregas/cotacao` - Price preview, nothing stored
/// - `GET|PUT|DELETE  /entregas/{id}`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clientes",
            get(list_clients_handler).post(create_client_handler),
        )
        .route(
            "/clientes/{id}",
            get(get_client_handler)
                .put(update_client_handler)
                .delete(delete_client_handler),
        )
        .route(
            "/pedidos",
            get(list_orders_handler).post(create_order_handler),
        )
        .route(
            "/pedidos/{id}",
            get(get_order_handler)
                .put(update_order_handler)
                .delete(delete_order_handler),
        )
        .route(
            "/pedidos/{id}/entregas/{delivery_id}",
            put(update_order_delivery_handler),
        )
        .route(
            "/entregas",
            get(list_deliveries_handler).post(create_delivery_handler),
        )
        .route("/entregas/cotacao", post(quote_handler))
        .route(
            "/entregas/{id}",
            get(get_delivery_handler)
                .put(update_delivery_handler)
                .delete(delete_delivery_handler),
        )
}
