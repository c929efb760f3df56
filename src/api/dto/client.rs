//! DTOs for client endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Client;

/// Client as returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientItem {
    pub id_cliente: i64,
    pub nome_cliente: String,
    pub cpf_cliente: String,
    pub telefone_cliente: String,
    pub email_cliente: String,
    pub endereco_completo: Option<String>,
}

impl From<Client> for ClientItem {
    fn from(c: Client) -> Self {
        Self {
            id_cliente: c.id,
            nome_cliente: c.name,
            cpf_cliente: c.tax_id,
            telefone_cliente: c.phone,
            email_cliente: c.email,
            endereco_completo: c.address,
        }
    }
}

/// Request to register a client.
///
/// `idCliente` is optional; when present it is used as the new id.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[validate(range(min = 1))]
    pub id_cliente: Option<i64>,

    #[validate(length(min = 1, max = 255))]
    pub nome_cliente: String,

    #[validate(length(min = 1, max = 20))]
    pub cpf_cliente: String,

    #[validate(length(min = 1, max = 30))]
    pub telefone_cliente: String,

    #[validate(email)]
    pub email_cliente: String,

    #[validate(length(max = 500))]
    pub endereco_completo: Option<String>,
}

/// Full replacement of a client. Every field is required.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 255))]
    pub nome_cliente: String,

    #[validate(length(min = 1, max = 20))]
    pub cpf_cliente: String,

    #[validate(length(min = 1, max = 30))]
    pub telefone_cliente: String,

    #[validate(email)]
    pub email_cliente: String,

    #[validate(length(min = 1, max = 500))]
    pub endereco_completo: String,
}
