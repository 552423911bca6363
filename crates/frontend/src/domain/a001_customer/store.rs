//! Client-side customer list, persisted under `toy-store-clientes`.

use contracts::domain::a001_customer::{Customer, CustomersSnapshot, NewCustomer};
use contracts::domain::common::UuidV4Generator;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::local_storage;

#[derive(Clone, Copy)]
pub struct CustomersStore {
    pub snapshot: RwSignal<CustomersSnapshot>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CustomersStore {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(local_storage::load_or_default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Fetch from the API unless a previous list was restored from storage
    pub fn load_if_empty(&self) {
        if self.snapshot.with_untracked(|s| !s.is_empty()) || self.loading.get_untracked() {
            return;
        }
        self.refresh();
    }

    pub fn refresh(&self) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        spawn_local(async move {
            match api::fetch_customers().await {
                Ok(customers) => {
                    log::info!("Loaded {} customers", customers.len());
                    this.set_customers(customers);
                }
                Err(e) => {
                    log::error!("Failed to load customers: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn set_customers(&self, customers: Vec<Customer>) {
        self.snapshot.update(|s| s.set_customers(customers));
        self.persist();
    }

    /// Append a customer with a fresh id and return it
    pub fn add_customer(&self, customer: NewCustomer) -> Option<Customer> {
        let mut added = None;
        self.snapshot.update(|s| {
            added = Some(s.add_customer(customer, &mut UuidV4Generator).clone());
        });
        self.persist();
        added
    }

    fn persist(&self) {
        self.snapshot.with_untracked(local_storage::store);
    }
}

impl Default for CustomersStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to use the customers store
pub fn use_customers() -> CustomersStore {
    use_context::<CustomersStore>().expect("CustomersStore not found in context")
}
