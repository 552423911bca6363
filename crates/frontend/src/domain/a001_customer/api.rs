use contracts::domain::a001_customer::Customer;
use contracts::usecases::u501_import_customers::{normalize_with_random_ids, CustomersApiResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the redundant payload from the mock API and flatten it
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let url = api_url("/customers");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: CustomersApiResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(normalize_with_random_ids(&data))
}
