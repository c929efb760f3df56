mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

fn client_body(tax_id: &str) -> Value {
    json!({
        "nomeCliente": "Ana Souza",
        "cpfCliente": tax_id,
        "telefoneCliente": "11999990000",
        "emailCliente": "ana@example.com",
        "enderecoCompleto": "Rua A, 10"
    })
}

fn order_body(client_id: i64, distance: i64, weight: i64) -> Value {
    json!({
        "idCliente": client_id,
        "dataPedido": "2025-04-01",
        "distancia": distance,
        "pesoCarga": weight,
        "valorBaseKm": 2,
        "valorBaseKg": 1
    })
}

#[sqlx::test]
async fn test_client_order_delivery_flow(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.post("/clientes").json(&client_body("111")).await;
    response.assert_status(StatusCode::CREATED);
    let client_id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = server
        .post("/pedidos")
        .json(&order_body(client_id, 10, 5))
        .await;
    response.assert_status(StatusCode::CREATED);
    let order_id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = server
        .post("/entregas")
        .json(&json!({ "idPedidos": order_id, "tipoEntrega": "normal" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let delivery_id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = server.get(&format!("/entregas/{delivery_id}")).await;
    response.assert_status_ok();
    let delivery = response.json::<Value>();
    assert_eq!(delivery["valorDistancia"], 20.0);
    assert_eq!(delivery["valorPeso"], 5.0);
    assert_eq!(delivery["acrescimo"], 0.0);
    assert_eq!(delivery["desconto"], 0.0);
    assert_eq!(delivery["taxa"], 0.0);
    assert_eq!(delivery["valorFinal"], 25.0);

    let response = server
        .put(&format!("/pedidos/{order_id}/entregas/{delivery_id}"))
        .json(&{
            let mut body = order_body(client_id, 300, 60);
            body["tipoEntrega"] = json!("urgent");
            body
        })
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["entrega"]["valorFinal"], 727.8);

    let response = server.get(&format!("/pedidos/{order_id}")).await;
    assert_eq!(response.json::<Value>()["distancia"], 300.0);
}

#[sqlx::test]
async fn test_delete_client_with_orders_is_bad_request(pool: PgPool) {
    let client_id = common::create_test_client(&pool, "111").await;
    common::create_test_order(&pool, client_id, 10, 5).await;
    let server = common::make_server(pool);

    let response = server.delete(&format!("/clientes/{client_id}")).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["code"], "conflict");
}

#[sqlx::test]
async fn test_order_update_reprices_deliveries(pool: PgPool) {
    let client_id = common::create_test_client(&pool, "111").await;
    let order = common::create_test_order(&pool, client_id, 10, 5).await;
    common::create_test_delivery(
        &pool,
        &order,
        delivery_service::domain::pricing::DeliveryType::Urgent,
    )
    .await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/pedidos/{}", order.id))
        .json(&order_body(client_id, 300, 60))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["entregas"][0]["valorFinal"], 727.8);
    assert_eq!(body["entregas"][0]["tipoEntrega"], "urgent");
}

#[sqlx::test]
async fn test_duplicate_tax_id_is_bad_request(pool: PgPool) {
    let server = common::make_server(pool);
    server
        .post("/clientes")
        .json(&client_body("111"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.post("/clientes").json(&client_body("111")).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_get_missing_order_is_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    server.get("/pedidos/31337").await.assert_status_not_found();
}
