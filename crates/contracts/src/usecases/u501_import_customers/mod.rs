//! Import of customers from the mock API payload.

pub mod normalize;
pub mod response;

pub use normalize::{normalize, normalize_with_random_ids};
pub use response::{CustomersApiResponse, RawCustomer};
