//! Row types shared by the PostgreSQL repositories.
//!
//! Columns are aliased to the field names below in every `SELECT`, so a
//! single [`sqlx::FromRow`] derive serves all queries of a table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::domain::entities::{Client, Delivery, Order};
use crate::domain::pricing::DeliveryType;

pub(crate) const CLIENT_COLUMNS: &str = "id_cliente AS id, nome_cliente AS name, \
     cpf_cliente AS tax_id, telefone_cliente AS phone, email_cliente AS email, \
     endereco_completo AS address";

pub(crate) const ORDER_COLUMNS: &str = "id_pedidos AS id, id_cliente AS client_id, \
     data_pedido AS order_date, distancia AS distance_km, peso_carga AS weight_kg, \
     valor_base_km AS rate_per_km, valor_base_kg AS rate_per_kg";

pub(crate) const DELIVERY_COLUMNS: &str = "id_entregas AS id, id_pedidos AS order_id, \
     valor_distancia AS distance_cost, valor_peso AS weight_cost, acrescimo AS surcharge, \
     desconto AS discount, taxa AS flat_fee, valor_final AS total, \
     tipo_entrega AS delivery_type";

#[derive(Debug, FromRow)]
pub(crate) struct ClientRow {
    pub id: i64,
    pub name: String,
    pub tax_id: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
}

impl From<ClientRow> for Client {
    fn from(r: ClientRow) -> Self {
        Client {
            id: r.id,
            name: r.name,
            tax_id: r.tax_id,
            phone: r.phone,
            email: r.email,
            address: r.address,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct OrderRow {
    pub id: i64,
    pub client_id: i64,
    pub order_date: NaiveDate,
    pub distance_km: Decimal,
    pub weight_kg: Decimal,
    pub rate_per_km: Decimal,
    pub rate_per_kg: Decimal,
}

impl From<OrderRow> for Order {
    fn from(r: OrderRow) -> Self {
        Order {
            id: r.id,
            client_id: r.client_id,
            order_date: r.order_date,
            distance_km: r.distance_km,
            weight_kg: r.weight_kg,
            rate_per_km: r.rate_per_km,
            rate_per_kg: r.rate_per_kg,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct DeliveryRow {
    pub id: i64,
    pub order_id: i64,
    pub distance_cost: Decimal,
    pub weight_cost: Decimal,
    pub surcharge: Decimal,
    pub discount: Decimal,
    pub flat_fee: Decimal,
    pub total: Decimal,
    pub delivery_type: String,
}

impl From<DeliveryRow> for Delivery {
    fn from(r: DeliveryRow) -> Self {
        Delivery {
            id: r.id,
            order_id: r.order_id,
            distance_cost: r.distance_cost,
            weight_cost: r.weight_cost,
            surcharge: r.surcharge,
            discount: r.discount,
            flat_fee: r.flat_fee,
            total: r.total,
            delivery_type: DeliveryType::parse(&r.delivery_type),
        }
    }
}
