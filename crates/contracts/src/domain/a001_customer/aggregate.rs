use crate::domain::common::{AggregateId, IdGenerator};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn generate(ids: &mut impl IdGenerator) -> Self {
        Self(ids.next_id())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Sale
// ============================================================================

/// One purchase: calendar date and amount.
///
/// Serialized as `date`/`amount`; the mock API spells them `data`/`valor`,
/// both are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(alias = "data")]
    pub date: String,
    #[serde(alias = "valor")]
    pub amount: f64,
}

impl Sale {
    pub fn new(date: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            amount,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Flat customer record, created by normalization or by the add form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub birth_date: String,
    #[serde(default)]
    pub sales: Vec<Sale>,
}

impl Customer {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

/// A customer that has not been given an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub full_name: String,
    pub email: String,
    pub birth_date: String,
    #[serde(default)]
    pub sales: Vec<Sale>,
}

impl NewCustomer {
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            full_name: self.full_name,
            email: self.email,
            birth_date: self.birth_date,
            sales: self.sales,
        }
    }
}
