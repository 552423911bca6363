//! Customers payload served by the mock API.
//!
//! Read once at startup from the configured file (or the embedded sample),
//! checked against the wire shape and kept for the lifetime of the process.

use contracts::usecases::u501_import_customers::CustomersApiResponse;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shared::config::{get_customers_fixture_path, Config};

/// Sample dataset compiled into the binary
pub const SAMPLE_CUSTOMERS: &str = include_str!("customers.json");

static CUSTOMERS: OnceCell<CustomersPayload> = OnceCell::new();

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture does not match the customers payload shape: {0}")]
    Json(#[from] serde_json::Error),

    #[error("customers fixture has not been loaded")]
    NotLoaded,

    #[error("customers fixture is already loaded")]
    AlreadyLoaded,
}

/// The payload verbatim plus its typed view
#[derive(Debug, Clone)]
pub struct CustomersPayload {
    pub raw: serde_json::Value,
    pub parsed: CustomersApiResponse,
}

impl CustomersPayload {
    pub fn parse(text: &str) -> Result<Self, FixtureError> {
        let raw: serde_json::Value = serde_json::from_str(text)?;
        let parsed: CustomersApiResponse = serde_json::from_value(raw.clone())?;
        Ok(Self { raw, parsed })
    }

    /// Log entries whose required fields are missing; they are still served
    pub fn report_incomplete_entries(&self) -> usize {
        let mut incomplete = 0;
        for (index, entry) in self.parsed.data.clientes.iter().enumerate() {
            let missing = entry.missing_fields();
            if !missing.is_empty() {
                incomplete += 1;
                tracing::warn!(
                    "Customer entry #{} is missing {}; normalized with empty values",
                    index,
                    missing.join(", ")
                );
            }
        }
        incomplete
    }
}

/// Load the customers fixture selected by the config
pub fn initialize(config: &Config) -> anyhow::Result<()> {
    let payload = match get_customers_fixture_path(config) {
        Some(path) if path.exists() => load_file(&path)?,
        Some(path) => {
            tracing::warn!(
                "Customers fixture not found at {}, serving the embedded sample",
                path.display()
            );
            CustomersPayload::parse(SAMPLE_CUSTOMERS)?
        }
        None => {
            tracing::info!("No customers fixture configured, serving the embedded sample");
            CustomersPayload::parse(SAMPLE_CUSTOMERS)?
        }
    };

    tracing::info!(
        "Customers fixture ready: {} entries",
        payload.parsed.data.clientes.len()
    );
    payload.report_incomplete_entries();

    CUSTOMERS
        .set(payload)
        .map_err(|_| FixtureError::AlreadyLoaded)?;
    Ok(())
}

fn load_file(path: &Path) -> Result<CustomersPayload, FixtureError> {
    tracing::info!("Loading customers fixture from: {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CustomersPayload::parse(&text)
}

pub fn customers_payload() -> Result<&'static CustomersPayload, FixtureError> {
    CUSTOMERS.get().ok_or(FixtureError::NotLoaded)
}

/// Install the embedded sample if nothing is loaded yet
#[cfg(test)]
pub fn ensure_sample_loaded() -> &'static CustomersPayload {
    CUSTOMERS.get_or_init(|| {
        CustomersPayload::parse(SAMPLE_CUSTOMERS).expect("embedded sample must parse")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses() {
        let payload = CustomersPayload::parse(SAMPLE_CUSTOMERS).unwrap();
        assert_eq!(payload.parsed.data.clientes.len(), 5);
        assert_eq!(payload.raw["meta"]["registroTotal"], 5);
        assert_eq!(payload.report_incomplete_entries(), 0);
    }

    #[test]
    fn test_wrong_shape_rejected() {
        let err = CustomersPayload::parse(r#"{ "data": { "clientes": {} } }"#).unwrap_err();
        assert!(matches!(err, FixtureError::Json(_)));

        let err = CustomersPayload::parse("not json").unwrap_err();
        assert!(matches!(err, FixtureError::Json(_)));
    }

    #[test]
    fn test_incomplete_entries_counted() {
        let payload = CustomersPayload::parse(
            r#"{ "data": { "clientes": [ { "info": { "nomeCompleto": "Só Nome" } }, {} ] } }"#,
        )
        .unwrap();
        assert_eq!(payload.report_incomplete_entries(), 2);
    }

    #[test]
    fn test_missing_file_error() {
        let err = load_file(Path::new("/nonexistent/toystore/db.json")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }
}
