mod common;

use delivery_service::domain::entities::NewDelivery;
use delivery_service::domain::pricing::DeliveryType;
use delivery_service::domain::repositories::DeliveryRepository;
use delivery_service::infrastructure::persistence::PgDeliveryRepository;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

fn repo(pool: PgPool) -> PgDeliveryRepository {
    PgDeliveryRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_stored_delivery_keeps_quote(pool: PgPool) {
    let client_id = common::create_test_client(&pool, "111").await;
    let order = common::create_test_order(&pool, client_id, 300, 60).await;
    let priced = NewDelivery::priced(&order, DeliveryType::Urgent).unwrap();
    let repo = repo(pool);

    let id = repo.create(priced.clone()).await.unwrap();
    let stored = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(stored, priced.into_delivery(id));
    assert_eq!(stored.total, Decimal::new(7278, 1));
    assert_eq!(stored.delivery_type, DeliveryType::Urgent);
}

#[sqlx::test]
async fn test_update_overwrites_pricing(pool: PgPool) {
    let client_id = common::create_test_client(&pool, "111").await;
    let order = common::create_test_order(&pool, client_id, 10, 5).await;
    let id = common::create_test_delivery(&pool, &order, DeliveryType::Normal).await;
    let repo = repo(pool);

    let urgent = NewDelivery::priced(&order, DeliveryType::Urgent).unwrap();
    assert_eq!(repo.update(id, urgent).await.unwrap(), 1);

    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.surcharge, Decimal::from(5));
    assert_eq!(stored.total, Decimal::from(30));
}

#[sqlx::test]
async fn test_find_and_delete_missing(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.find_by_id(77).await.unwrap().is_none());
    assert!(!repo.delete(77).await.unwrap());
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let client_id = common::create_test_client(&pool, "111").await;
    let order = common::create_test_order(&pool, client_id, 10, 5).await;
    let id = common::create_test_delivery(&pool, &order, DeliveryType::Normal).await;
    let repo = repo(pool);

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.list().await.unwrap().is_empty());
}
