use crate::domain::a001_customer::Customer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First letter of `A..=Z` absent from a name, or `-` when all 26 appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MissingLetter {
    Letter(char),
    AllPresent,
}

impl MissingLetter {
    pub const ALL_PRESENT_CODE: char = '-';

    pub fn code(&self) -> char {
        match self {
            Self::Letter(c) => *c,
            Self::AllPresent => Self::ALL_PRESENT_CODE,
        }
    }
}

impl fmt::Display for MissingLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<MissingLetter> for String {
    fn from(value: MissingLetter) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for MissingLetter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(Self::ALL_PRESENT_CODE), None) => Ok(Self::AllPresent),
            (Some(c), None) if c.is_ascii_uppercase() => Ok(Self::Letter(c)),
            _ => Err(format!("Invalid missing letter code: {:?}", value)),
        }
    }
}

/// Derived statistics of one customer, recomputed on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerMetrics {
    pub customer: Customer,
    pub total_sales: f64,
    pub average_sale_value: f64,
    pub purchase_frequency: usize,
    #[serde(rename = "missingLetterCode")]
    pub missing_letter: MissingLetter,
}

pub fn compute_metrics(customer: &Customer) -> CustomerMetrics {
    let purchase_frequency = customer.sales.len();
    // fold from +0.0: an empty float `sum()` may yield -0.0
    let total_sales = customer.sales.iter().fold(0.0, |acc, sale| acc + sale.amount);
    let average_sale_value = if purchase_frequency > 0 {
        total_sales / purchase_frequency as f64
    } else {
        0.0
    };

    CustomerMetrics {
        customer: customer.clone(),
        total_sales,
        average_sale_value,
        purchase_frequency,
        missing_letter: first_missing_letter(&customer.full_name),
    }
}

/// Scan `A..=Z` and return the first letter not present in the uppercased name.
///
/// Only ASCII letters count: accented characters are not folded, so `É` never
/// stands in for `E`. Uppercasing is full Unicode, so `ß` contributes `S`.
pub fn first_missing_letter(full_name: &str) -> MissingLetter {
    let mut present = [false; 26];
    for c in full_name.to_uppercase().chars() {
        if c.is_ascii_uppercase() {
            present[(c as u8 - b'A') as usize] = true;
        }
    }

    (b'A'..=b'Z')
        .zip(present)
        .find(|(_, seen)| !seen)
        .map(|(letter, _)| MissingLetter::Letter(letter as char))
        .unwrap_or(MissingLetter::AllPresent)
}
