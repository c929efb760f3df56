//! Client entity.

use crate::error::AppError;
use serde_json::json;

/// A customer that places orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    /// CPF, unique across clients.
    pub tax_id: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
}

/// Input data for registering a client.
///
/// `id` is normally assigned by the database; an explicit value is accepted
/// for imports from legacy systems.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub id: Option<i64>,
    pub name: String,
    pub tax_id: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
}

impl NewClient {
    /// Builds a new client, trimming all text fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is blank or the
    /// explicit id is not positive.
    pub fn new(
        id: Option<i64>,
        name: &str,
        tax_id: &str,
        phone: &str,
        email: &str,
        address: Option<&str>,
    ) -> Result<Self, AppError> {
        if let Some(id) = id
            && id <= 0
        {
            return Err(AppError::bad_request(
                "Client id must be a positive integer",
                json!({ "idCliente": id }),
            ));
        }

        Ok(Self {
            id,
            name: required("nomeCliente", name)?,
            tax_id: required("cpfCliente", tax_id)?,
            phone: required("telefoneCliente", phone)?,
            email: required("emailCliente", email)?,
            address: address
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_owned),
        })
    }
}

/// Full replacement of a client's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientChanges {
    pub name: String,
    pub tax_id: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ClientChanges {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is blank.
    pub fn new(
        name: &str,
        tax_id: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<Self, AppError> {
        Ok(Self {
            name: required("nomeCliente", name)?,
            tax_id: required("cpfCliente", tax_id)?,
            phone: required("telefoneCliente", phone)?,
            email: required("emailCliente", email)?,
            address: required("enderecoCompleto", address)?,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::bad_request(
            "All required fields must be provided",
            json!({ "field": field }),
        ));
    }
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_trims_fields() {
        let client = NewClient::new(
            None,
            "  Ana  ",
            "111",
            "1199999999",
            "ana@example.com",
            Some("  Rua A, 10  "),
        )
        .unwrap();

        assert_eq!(client.name, "Ana");
        assert_eq!(client.address.as_deref(), Some("Rua A, 10"));
        assert!(client.id.is_none());
    }

    #[test]
    fn test_new_client_blank_address_is_none() {
        let client =
            NewClient::new(Some(1), "Ana", "111", "1199999999", "ana@example.com", Some("  "))
                .unwrap();

        assert_eq!(client.id, Some(1));
        assert!(client.address.is_none());
    }

    #[test]
    fn test_new_client_rejects_blank_name() {
        let result = NewClient::new(None, "   ", "111", "1199999999", "ana@example.com", None);

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_new_client_rejects_non_positive_id() {
        let result = NewClient::new(Some(0), "Ana", "111", "1199999999", "ana@example.com", None);

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_client_changes_require_address() {
        let result = ClientChanges::new("Ana", "111", "1199999999", "ana@example.com", "");

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
