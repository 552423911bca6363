//! Simulated login against a single built-in account.
//!
//! There is no server round trip and no hashing; the session lives in the
//! persisted [`AuthSnapshot`].

use crate::shared::persistence::Persisted;
use serde::{Deserialize, Serialize};

pub const DEMO_EMAIL: &str = "admin@toystore.com";
pub const DEMO_PASSWORD: &str = "admin123";
pub const DEMO_USER_ID: &str = "1";
pub const DEMO_USER_NAME: &str = "Administrador";

/// Simulated latency of a login attempt, in milliseconds
pub const LOGIN_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    /// Uppercased first letter of the name, for the avatar
    pub fn initial(&self) -> Option<char> {
        self.name.trim().chars().next().and_then(|c| c.to_uppercase().next())
    }
}

/// Check the credentials; `None` means rejected
pub fn authenticate(request: &LoginRequest) -> Option<User> {
    if request.email == DEMO_EMAIL && request.password == DEMO_PASSWORD {
        Some(User {
            id: DEMO_USER_ID.to_string(),
            email: DEMO_EMAIL.to_string(),
            name: DEMO_USER_NAME.to_string(),
        })
    } else {
        None
    }
}

/// Persisted session (`toy-store-auth`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl Persisted for AuthSnapshot {
    const STORAGE_KEY: &'static str = "toy-store-auth";
}

impl AuthSnapshot {
    pub fn logged_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    pub fn logged_out() -> Self {
        Self::default()
    }
}
