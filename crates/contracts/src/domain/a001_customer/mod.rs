pub mod aggregate;
pub mod store;
pub mod validation;

pub use aggregate::{Customer, CustomerId, NewCustomer, Sale};
pub use store::CustomersSnapshot;
pub use validation::{CustomerForm, CustomerFormError, CustomerFormField};
