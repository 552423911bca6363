//! Wire shape of `GET /customers`.
//!
//! The payload nests every field a level or two deeper than needed and carries
//! redundant blocks (`duplicado`, `meta`, `redundante`). Only the paths the
//! normalizer reads are modelled; serde skips the rest.

use crate::domain::a001_customer::Sale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomersApiResponse {
    pub data: CustomersData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomersData {
    #[serde(default)]
    pub clientes: Vec<RawCustomer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCustomer {
    #[serde(default)]
    pub info: Option<RawInfo>,
    #[serde(default)]
    pub estatisticas: Option<RawStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInfo {
    #[serde(rename = "nomeCompleto", alias = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub detalhes: Option<RawDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDetails {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "nascimento", alias = "birthDate", default)]
    pub birth_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStatistics {
    #[serde(rename = "vendas", alias = "sales", default)]
    pub sales: Option<Vec<Sale>>,
}

impl RawCustomer {
    pub fn full_name(&self) -> Option<&str> {
        self.info.as_ref()?.full_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.details()?.email.as_deref()
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.details()?.birth_date.as_deref()
    }

    /// Sales list; absent or `null` both read as empty
    pub fn sales(&self) -> &[Sale] {
        self.estatisticas
            .as_ref()
            .and_then(|s| s.sales.as_deref())
            .unwrap_or_default()
    }

    /// Required paths that are absent from this entry
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name().is_none() {
            missing.push("info.nomeCompleto");
        }
        if self.email().is_none() {
            missing.push("info.detalhes.email");
        }
        if self.birth_date().is_none() {
            missing.push("info.detalhes.nascimento");
        }
        missing
    }

    fn details(&self) -> Option<&RawDetails> {
        self.info.as_ref()?.detalhes.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redundant_blocks_are_ignored() {
        let json = r#"{
            "data": {
                "clientes": [{
                    "info": {
                        "nomeCompleto": "Ana Beatriz",
                        "detalhes": { "email": "ana.b@example.com", "nascimento": "1992-05-01" }
                    },
                    "duplicado": { "nomeCompleto": "Ana Beatriz" },
                    "estatisticas": { "vendas": [{ "data": "2024-01-01", "valor": 150 }] }
                }]
            },
            "meta": { "registroTotal": 1, "pagina": 1 },
            "redundante": { "status": "ok" }
        }"#;

        let response: CustomersApiResponse = serde_json::from_str(json).unwrap();
        let raw = &response.data.clientes[0];
        assert_eq!(raw.full_name(), Some("Ana Beatriz"));
        assert_eq!(raw.email(), Some("ana.b@example.com"));
        assert_eq!(raw.birth_date(), Some("1992-05-01"));
        assert_eq!(raw.sales(), &[Sale::new("2024-01-01", 150.0)]);
        assert!(raw.missing_fields().is_empty());
    }

    #[test]
    fn test_null_and_absent_sales() {
        let json = r#"{ "data": { "clientes": [
            { "info": { "nomeCompleto": "A", "detalhes": { "email": "a@x.io", "nascimento": "2000-01-01" } },
              "estatisticas": { "vendas": null } },
            { "info": { "nomeCompleto": "B", "detalhes": { "email": "b@x.io", "nascimento": "2000-01-01" } },
              "estatisticas": {} },
            { "info": { "nomeCompleto": "C", "detalhes": { "email": "c@x.io", "nascimento": "2000-01-01" } } }
        ] } }"#;

        let response: CustomersApiResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.clientes.iter().all(|c| c.sales().is_empty()));
    }

    #[test]
    fn test_missing_required_fields_reported() {
        let json = r#"{ "data": { "clientes": [ { "info": { "detalhes": {} } } ] } }"#;
        let response: CustomersApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.data.clientes[0].missing_fields(),
            vec!["info.nomeCompleto", "info.detalhes.email", "info.detalhes.nascimento"]
        );
    }

    #[test]
    fn test_english_field_aliases() {
        let json = r#"{ "data": { "clientes": [ {
            "info": { "fullName": "Bob", "detalhes": { "email": "bob@x.io", "birthDate": "1980-10-10" } },
            "estatisticas": { "sales": [{ "date": "2024-03-01", "amount": 10 }] }
        } ] } }"#;
        let response: CustomersApiResponse = serde_json::from_str(json).unwrap();
        let raw = &response.data.clientes[0];
        assert_eq!(raw.full_name(), Some("Bob"));
        assert_eq!(raw.birth_date(), Some("1980-10-10"));
        assert_eq!(raw.sales().len(), 1);
    }
}
