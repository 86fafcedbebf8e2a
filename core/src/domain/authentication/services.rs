use tracing::info;

use crate::domain::{
    authentication::{
        entities::{Session, SessionUser},
        ports::{AuthService, AuthStateRepository},
    },
    common::{entities::app_errors::CoreError, services::Service},
    review::ports::ReviewRepository,
    storage::ports::ObjectStoragePort,
    symptom::ports::SymptomIndexRepository,
    treatment::ports::TreatmentRepository,
};

impl<T, R, S, A, O> AuthService for Service<T, R, S, A, O>
where
    T: TreatmentRepository,
    R: ReviewRepository,
    S: SymptomIndexRepository,
    A: AuthStateRepository,
    O: ObjectStoragePort,
{
    async fn login(&self, identifier: String, password: String) -> Result<Session, CoreError> {
        let credentials = self.auth_repository.load_credentials().await?;

        if !credentials.matches_identifier(&identifier)
            || !credentials.verify_password(&password)
        {
            return Err(CoreError::InvalidCredentials);
        }

        let session = Session::new(SessionUser {
            username: credentials.username,
            email: credentials.email,
        });
        self.auth_repository.put_session(session.clone()).await?;

        info!(username = %session.user.username, "admin logged in");
        Ok(session)
    }

    async fn logout(&self, token: String) -> Result<(), CoreError> {
        self.auth_repository.remove_session(token).await
    }

    async fn authenticate(&self, token: String) -> Result<SessionUser, CoreError> {
        let session = self
            .auth_repository
            .get_session(token.clone())
            .await?
            .ok_or(CoreError::Unauthorized)?;

        if session.is_expired() {
            self.auth_repository.remove_session(token).await?;
            return Err(CoreError::SessionExpired);
        }

        Ok(session.user)
    }

    async fn update_username(
        &self,
        current_password: String,
        new_username: String,
    ) -> Result<(), CoreError> {
        let new_username = new_username.trim().to_string();
        if new_username.is_empty() {
            return Err(CoreError::ValidationFailed(
                "username must not be empty".to_string(),
            ));
        }

        let mut credentials = self.auth_repository.load_credentials().await?;
        if !credentials.verify_password(&current_password) {
            return Err(CoreError::InvalidCredentials);
        }

        credentials.username = new_username;
        self.auth_repository.store_credentials(credentials).await?;

        // Force re-login with the new identifier.
        self.auth_repository.clear_sessions().await
    }

    async fn update_email(
        &self,
        current_password: String,
        new_email: String,
    ) -> Result<(), CoreError> {
        let new_email = new_email.trim().to_string();
        if new_email.is_empty() || !new_email.contains('@') {
            return Err(CoreError::ValidationFailed(
                "a valid email address is required".to_string(),
            ));
        }

        let mut credentials = self.auth_repository.load_credentials().await?;
        if !credentials.verify_password(&current_password) {
            return Err(CoreError::InvalidCredentials);
        }

        credentials.email = new_email;
        self.auth_repository
            .store_credentials(credentials.clone())
            .await?;

        // Sessions survive an email change with a refreshed payload.
        self.auth_repository
            .update_session_users(SessionUser {
                username: credentials.username,
                email: credentials.email,
            })
            .await
    }

    async fn update_password(
        &self,
        current_password: String,
        new_password: String,
    ) -> Result<(), CoreError> {
        if new_password.is_empty() {
            return Err(CoreError::ValidationFailed(
                "password must not be empty".to_string(),
            ));
        }

        let mut credentials = self.auth_repository.load_credentials().await?;
        if !credentials.verify_password(&current_password) {
            return Err(CoreError::InvalidCredentials);
        }

        credentials.password = new_password;
        self.auth_repository.store_credentials(credentials).await?;

        // Force re-login with the new password.
        self.auth_repository.clear_sessions().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_fixtures::service_with;

    #[tokio::test]
    async fn login_accepts_username_or_email() {
        let service = service_with(vec![], vec![]);

        let by_username = service
            .login("admin".to_string(), "admin123".to_string())
            .await
            .unwrap();
        assert_eq!(by_username.user.username, "admin");

        let by_email = service
            .login("ADMIN@herbful.com".to_string(), "admin123".to_string())
            .await
            .unwrap();
        assert_eq!(by_email.user.email, "admin@herbful.com");
    }

    #[tokio::test]
    async fn login_rejects_a_wrong_password() {
        let service = service_with(vec![], vec![]);
        let result = service
            .login("admin".to_string(), "wrong".to_string())
            .await;
        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn password_change_forces_logout_and_rotates_the_credential() {
        let service = service_with(vec![], vec![]);

        let session = service
            .login("admin".to_string(), "admin123".to_string())
            .await
            .unwrap();
        service
            .update_password("admin123".to_string(), "NewPass1".to_string())
            .await
            .unwrap();

        // Old session gone, old password rejected, new one accepted.
        assert_eq!(
            service.authenticate(session.token).await,
            Err(CoreError::Unauthorized)
        );
        assert_eq!(
            service
                .login("admin".to_string(), "admin123".to_string())
                .await,
            Err(CoreError::InvalidCredentials)
        );
        assert!(
            service
                .login("admin".to_string(), "NewPass1".to_string())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn username_change_requires_the_current_password() {
        let service = service_with(vec![], vec![]);
        assert_eq!(
            service
                .update_username("wrong".to_string(), "root".to_string())
                .await,
            Err(CoreError::InvalidCredentials)
        );

        service
            .update_username("admin123".to_string(), "root".to_string())
            .await
            .unwrap();
        assert!(
            service
                .login("root".to_string(), "admin123".to_string())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn email_change_keeps_the_session_with_a_refreshed_payload() {
        let service = service_with(vec![], vec![]);
        let session = service
            .login("admin".to_string(), "admin123".to_string())
            .await
            .unwrap();

        service
            .update_email("admin123".to_string(), "new@herbful.com".to_string())
            .await
            .unwrap();

        let user = service.authenticate(session.token).await.unwrap();
        assert_eq!(user.email, "new@herbful.com");
    }

    #[tokio::test]
    async fn expired_session_reads_transition_to_anonymous() {
        let service = service_with(vec![], vec![]);
        let mut session = service
            .login("admin".to_string(), "admin123".to_string())
            .await
            .unwrap();

        session.expires_at = chrono::Utc::now() - chrono::Duration::minutes(1);
        service
            .auth_repository
            .put_session(session.clone())
            .await
            .unwrap();

        assert_eq!(
            service.authenticate(session.token.clone()).await,
            Err(CoreError::SessionExpired)
        );
        // Second read finds no session at all.
        assert_eq!(
            service.authenticate(session.token).await,
            Err(CoreError::Unauthorized)
        );
    }
}
