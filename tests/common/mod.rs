#![allow(dead_code)]

use axum_test::TestServer;
use chrono::NaiveDate;
use delivery_service::api::routes::api_routes;
use delivery_service::domain::entities::{NewDelivery, Order, OrderFields};
use delivery_service::domain::pricing::DeliveryType;
use delivery_service::domain::repositories::DeliveryRepository;
use delivery_service::infrastructure::persistence::PgDeliveryRepository;
use delivery_service::state::AppState;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_client(pool: &PgPool, tax_id: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO cliente (nome_cliente, cpf_cliente, telefone_cliente, email_cliente, endereco_completo)
         VALUES ('Test Client', $1, '11999990000', 'client@example.com', 'Rua Teste, 1')
         RETURNING id_cliente",
    )
    .bind(tax_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn order_fields(client_id: i64, distance: i64, weight: i64) -> OrderFields {
    OrderFields::new(
        client_id,
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        Decimal::from(distance),
        Decimal::from(weight),
        Decimal::from(2),
        Decimal::from(1),
    )
    .unwrap()
}

pub async fn create_test_order(pool: &PgPool, client_id: i64, distance: i64, weight: i64) -> Order {
    let fields = order_fields(client_id, distance, weight);
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO pedidos (id_cliente, data_pedido, distancia, peso_carga, valor_base_km, valor_base_kg)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id_pedidos",
    )
    .bind(fields.client_id)
    .bind(fields.order_date)
    .bind(fields.distance_km)
    .bind(fields.weight_kg)
    .bind(fields.rate_per_km)
    .bind(fields.rate_per_kg)
    .fetch_one(pool)
    .await
    .unwrap();

    fields.into_order(id)
}

pub async fn create_test_delivery(pool: &PgPool, order: &Order, delivery_type: DeliveryType) -> i64 {
    let repo = PgDeliveryRepository::new(Arc::new(pool.clone()));
    repo.create(NewDelivery::priced(order, delivery_type).unwrap())
        .await
        .unwrap()
}

pub async fn order_distance(pool: &PgPool, order_id: i64) -> Decimal {
    sqlx::query_scalar("SELECT distancia FROM pedidos WHERE id_pedidos = $1")
        .bind(order_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(api_routes().with_state(create_test_state(pool))).unwrap()
}
