//! Persisted customer list (`toy-store-clientes`).

use super::aggregate::{Customer, CustomerId, NewCustomer};
use crate::domain::common::IdGenerator;
use crate::shared::persistence::Persisted;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomersSnapshot {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl Persisted for CustomersSnapshot {
    const STORAGE_KEY: &'static str = "toy-store-clientes";
}

impl CustomersSnapshot {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Replace the whole list (bulk import)
    pub fn set_customers(&mut self, customers: Vec<Customer>) {
        self.customers = customers;
    }

    /// Append a manually added customer under a fresh id
    pub fn add_customer(&mut self, customer: NewCustomer, ids: &mut impl IdGenerator) -> &Customer {
        let id = CustomerId::generate(ids);
        let index = self.customers.len();
        self.customers.push(customer.into_customer(id));
        &self.customers[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::Sale;
    use crate::domain::common::SequentialIdGenerator;
    use crate::shared::persistence::{load, save, MemoryStore};
    use uuid::Uuid;

    fn new_customer(name: &str) -> NewCustomer {
        NewCustomer {
            full_name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            birth_date: "2000-01-01".into(),
            sales: Vec::new(),
        }
    }

    #[test]
    fn test_add_customer_appends_with_fresh_id() {
        let mut ids = SequentialIdGenerator::new();
        let mut snapshot = CustomersSnapshot::default();

        snapshot.add_customer(new_customer("Ana"), &mut ids);
        let added = snapshot.add_customer(new_customer("Bruno"), &mut ids);

        assert_eq!(added.id, CustomerId::new(Uuid::from_u128(2)));
        assert_eq!(added.full_name, "Bruno");
        assert_eq!(snapshot.customers.len(), 2);
        assert_eq!(snapshot.customers[0].full_name, "Ana");
    }

    #[test]
    fn test_set_customers_replaces_list() {
        let mut ids = SequentialIdGenerator::new();
        let mut snapshot = CustomersSnapshot::default();
        snapshot.add_customer(new_customer("Ana"), &mut ids);

        snapshot.set_customers(Vec::new());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_snapshot_survives_storage() {
        let store = MemoryStore::new();
        let mut ids = SequentialIdGenerator::new();
        let mut snapshot = CustomersSnapshot::default();
        let mut customer = new_customer("Carla");
        customer.sales.push(Sale::new("2024-02-01", 99.9));
        snapshot.add_customer(customer, &mut ids);

        save(&store, &snapshot).unwrap();
        let restored: CustomersSnapshot = load(&store).unwrap();
        assert_eq!(restored, snapshot);
    }
}
