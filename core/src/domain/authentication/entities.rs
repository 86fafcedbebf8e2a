use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::generate_random_string;

pub const SESSION_TOKEN_LENGTH: usize = 32;
pub const SESSION_LIFETIME_HOURS: i64 = 24;

/// The single admin credential record. This is a mock auth layer: the
/// password is stored in plaintext by design, there is exactly one admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl AdminCredentials {
    /// Seed record written on first load.
    pub fn default_seed() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            email: "admin@herbful.com".to_string(),
        }
    }

    /// Login identifier matches either username or email, case-insensitively.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        let identifier = identifier.trim().to_lowercase();
        identifier == self.username.to_lowercase() || identifier == self.email.to_lowercase()
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: SessionUser) -> Self {
        Self {
            token: generate_random_string(SESSION_TOKEN_LENGTH),
            user,
            expires_at: Utc::now() + Duration::hours(SESSION_LIFETIME_HOURS),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_matches_username_or_email_case_insensitively() {
        let credentials = AdminCredentials::default_seed();
        assert!(credentials.matches_identifier("ADMIN"));
        assert!(credentials.matches_identifier(" admin "));
        assert!(credentials.matches_identifier("Admin@Herbful.com"));
        assert!(!credentials.matches_identifier("root"));
    }

    #[test]
    fn fresh_session_is_not_expired() {
        let session = Session::new(SessionUser {
            username: "admin".to_string(),
            email: "admin@herbful.com".to_string(),
        });
        assert!(!session.is_expired());
        assert_eq!(session.token.len(), SESSION_TOKEN_LENGTH);
    }
}
