use super::response::{CustomersApiResponse, RawCustomer};
use crate::domain::a001_customer::{Customer, CustomerId};
use crate::domain::common::{IdGenerator, UuidV4Generator};

/// Flatten the nested API payload into customers.
///
/// One customer per `data.clientes` entry, in order, each under a fresh id
/// from `ids`. Missing sales become an empty list; missing name, email or
/// birth date become empty strings (see [`RawCustomer::missing_fields`] to
/// detect them). No validation, dedup or sorting.
pub fn normalize(response: &CustomersApiResponse, ids: &mut impl IdGenerator) -> Vec<Customer> {
    response
        .data
        .clientes
        .iter()
        .map(|raw| normalize_one(raw, CustomerId::generate(ids)))
        .collect()
}

/// [`normalize`] with random v4 ids, as the fetch layer uses it
pub fn normalize_with_random_ids(response: &CustomersApiResponse) -> Vec<Customer> {
    normalize(response, &mut UuidV4Generator)
}

fn normalize_one(raw: &RawCustomer, id: CustomerId) -> Customer {
    Customer {
        id,
        full_name: raw.full_name().unwrap_or_default().to_string(),
        email: raw.email().unwrap_or_default().to_string(),
        birth_date: raw.birth_date().unwrap_or_default().to_string(),
        sales: raw.sales().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::Sale;
    use crate::domain::common::SequentialIdGenerator;
    use std::collections::HashSet;
    use uuid::Uuid;

    const PAYLOAD: &str = r#"{
        "data": {
            "clientes": [
                {
                    "info": {
                        "nomeCompleto": "Ana Beatriz",
                        "detalhes": { "email": "ana.b@example.com", "nascimento": "1992-05-01" }
                    },
                    "estatisticas": {
                        "vendas": [
                            { "data": "2024-01-01", "valor": 150 },
                            { "data": "2024-01-02", "valor": 50 }
                        ]
                    }
                },
                {
                    "info": {
                        "nomeCompleto": "Carlos Eduardo",
                        "detalhes": { "email": "cadu@example.com", "nascimento": "1987-08-22" }
                    },
                    "duplicado": { "nomeCompleto": "Carlos Eduardo" },
                    "estatisticas": { "vendas": [] }
                },
                {
                    "info": {
                        "nomeCompleto": "Sem Vendas",
                        "detalhes": { "email": "sv@example.com", "nascimento": "2001-12-12" }
                    },
                    "estatisticas": {}
                }
            ]
        },
        "meta": { "registroTotal": 3, "pagina": 1 },
        "redundante": { "status": "ok" }
    }"#;

    fn payload() -> CustomersApiResponse {
        serde_json::from_str(PAYLOAD).unwrap()
    }

    #[test]
    fn test_one_customer_per_entry_in_order() {
        let customers = normalize(&payload(), &mut SequentialIdGenerator::new());

        let names: Vec<&str> = customers.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ana Beatriz", "Carlos Eduardo", "Sem Vendas"]);
    }

    #[test]
    fn test_fields_copied_verbatim() {
        let customers = normalize(&payload(), &mut SequentialIdGenerator::new());
        let ana = &customers[0];

        assert_eq!(ana.id, CustomerId::new(Uuid::from_u128(1)));
        assert_eq!(ana.email, "ana.b@example.com");
        assert_eq!(ana.birth_date, "1992-05-01");
        assert_eq!(
            ana.sales,
            vec![Sale::new("2024-01-01", 150.0), Sale::new("2024-01-02", 50.0)]
        );
    }

    #[test]
    fn test_absent_sales_default_to_empty() {
        let customers = normalize(&payload(), &mut SequentialIdGenerator::new());
        assert!(customers[1].sales.is_empty());
        assert!(customers[2].sales.is_empty());
    }

    #[test]
    fn test_ids_unique_within_call() {
        let customers = normalize_with_random_ids(&payload());
        let ids: HashSet<CustomerId> = customers.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), customers.len());
    }

    #[test]
    fn test_ids_differ_between_calls() {
        let first = normalize_with_random_ids(&payload());
        let second = normalize_with_random_ids(&payload());
        assert!(first.iter().zip(&second).all(|(a, b)| a.id != b.id));
    }

    #[test]
    fn test_empty_payload() {
        let response: CustomersApiResponse =
            serde_json::from_str(r#"{ "data": { "clientes": [] } }"#).unwrap();
        assert!(normalize(&response, &mut SequentialIdGenerator::new()).is_empty());
    }

    #[test]
    fn test_missing_required_fields_pass_through_empty() {
        let response: CustomersApiResponse =
            serde_json::from_str(r#"{ "data": { "clientes": [ { "estatisticas": { "vendas": [] } } ] } }"#)
                .unwrap();
        let customers = normalize(&response, &mut SequentialIdGenerator::new());

        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].full_name, "");
        assert_eq!(customers[0].email, "");
        assert_eq!(customers[0].birth_date, "");
    }
}
