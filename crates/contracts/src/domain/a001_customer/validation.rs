//! Validation of the add-customer form.
//!
//! The core never re-validates customers; this is the only place where name,
//! email and birth date are checked.

use super::aggregate::NewCustomer;
use crate::shared::calendar::format_calendar_date;
use chrono::NaiveDate;
use thiserror::Error;

pub const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CustomerFormError {
    #[error("Nome deve ter pelo menos 2 caracteres")]
    NameTooShort,

    #[error("Email inválido")]
    InvalidEmail,

    #[error("Data de nascimento é obrigatória")]
    MissingBirthDate,

    #[error("Data de nascimento deve estar entre 01/01/1900 e hoje")]
    BirthDateOutOfRange,
}

/// Form field an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerFormField {
    FullName,
    Email,
    BirthDate,
}

impl CustomerFormError {
    pub fn field(&self) -> CustomerFormField {
        match self {
            Self::NameTooShort => CustomerFormField::FullName,
            Self::InvalidEmail => CustomerFormField::Email,
            Self::MissingBirthDate | Self::BirthDateOutOfRange => CustomerFormField::BirthDate,
        }
    }
}

/// Raw values typed into the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub full_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
}

impl CustomerForm {
    /// Earliest accepted birth date
    pub fn min_birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Check every field and build the customer, reporting all failures at once
    pub fn validate(&self, today: NaiveDate) -> Result<NewCustomer, Vec<CustomerFormError>> {
        let mut errors = Vec::new();

        let full_name = self.full_name.trim();
        if full_name.chars().count() < MIN_NAME_LEN {
            errors.push(CustomerFormError::NameTooShort);
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            errors.push(CustomerFormError::InvalidEmail);
        }

        match self.birth_date {
            None => errors.push(CustomerFormError::MissingBirthDate),
            Some(date) if date < Self::min_birth_date() || date > today => {
                errors.push(CustomerFormError::BirthDateOutOfRange)
            }
            Some(_) => {}
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewCustomer {
            full_name: full_name.to_string(),
            email: email.to_string(),
            birth_date: self.birth_date.map(format_calendar_date).unwrap_or_default(),
            sales: Vec::new(),
        })
    }
}

/// `local@domain.tld` with no whitespace and an alphabetic TLD of 2+ letters
pub fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    if labels
        .iter()
        .any(|l| l.is_empty() || l.starts_with('-') || l.ends_with('-'))
    {
        return false;
    }

    let tld = labels[labels.len() - 1];
    tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic)
}
