use std::future::Future;

use crate::domain::{
    authentication::entities::{AdminCredentials, Session, SessionUser},
    common::entities::app_errors::CoreError,
};

pub trait AuthService: Send + Sync {
    fn login(
        &self,
        identifier: String,
        password: String,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn logout(&self, token: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Resolves a bearer token to its user; expired sessions are dropped and
    /// reported as `SessionExpired`.
    fn authenticate(
        &self,
        token: String,
    ) -> impl Future<Output = Result<SessionUser, CoreError>> + Send;

    /// Re-verifies the current password, then changes the username. All
    /// sessions are invalidated on success.
    fn update_username(
        &self,
        current_password: String,
        new_username: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Re-verifies the current password, then changes the email. Sessions
    /// stay valid; their user payload is refreshed in place.
    fn update_email(
        &self,
        current_password: String,
        new_email: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Re-verifies the current password, then changes it. All sessions are
    /// invalidated on success.
    fn update_password(
        &self,
        current_password: String,
        new_password: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Persisted local auth state: the credential record and the live sessions.
#[cfg_attr(test, mockall::automock)]
pub trait AuthStateRepository: Send + Sync {
    /// Loads the credential record, seeding the defaults on first access.
    fn load_credentials(
        &self,
    ) -> impl Future<Output = Result<AdminCredentials, CoreError>> + Send;

    fn store_credentials(
        &self,
        credentials: AdminCredentials,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_session(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    fn put_session(&self, session: Session) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove_session(&self, token: String)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_sessions(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Rewrites the user payload of every live session (email change).
    fn update_session_users(
        &self,
        user: SessionUser,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
