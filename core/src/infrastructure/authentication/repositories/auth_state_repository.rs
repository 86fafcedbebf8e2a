use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use tracing::error;

use crate::domain::{
    authentication::{
        entities::{AdminCredentials, Session, SessionUser},
        ports::AuthStateRepository,
    },
    common::{AuthStateConfig, entities::app_errors::CoreError},
};

const CREDENTIALS_FILE: &str = "credentials.json";
const SESSIONS_FILE: &str = "sessions.json";

/// Auth state on local disk: one JSON file for the credential record, one for
/// the live sessions. An internal lock serializes every read-modify-write.
#[derive(Clone)]
pub struct FileAuthStateRepository {
    state_dir: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileAuthStateRepository {
    pub fn new(config: AuthStateConfig) -> Self {
        Self {
            state_dir: config.state_dir,
            lock: Arc::new(Mutex::new(())),
        }
    }

    async fn read_file<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, CoreError> {
        let path = self.state_dir.join(name);
        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to read auth state");
                return Err(CoreError::InternalServerError);
            }
        };

        serde_json::from_slice(&contents).map(Some).map_err(|err| {
            error!(path = %path.display(), error = %err, "auth state file did not decode");
            CoreError::InternalServerError
        })
    }

    async fn write_file<T: Serialize>(&self, name: &str, value: &T) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.state_dir)
            .await
            .map_err(|err| {
                error!(dir = %self.state_dir.display(), error = %err, "failed to create auth state dir");
                CoreError::InternalServerError
            })?;

        let path = self.state_dir.join(name);
        let contents = serde_json::to_vec_pretty(value).map_err(|err| {
            error!(path = %path.display(), error = %err, "failed to encode auth state");
            CoreError::InternalServerError
        })?;

        tokio::fs::write(&path, contents).await.map_err(|err| {
            error!(path = %path.display(), error = %err, "failed to write auth state");
            CoreError::InternalServerError
        })
    }

    async fn read_sessions(&self) -> Result<HashMap<String, Session>, CoreError> {
        Ok(self
            .read_file::<HashMap<String, Session>>(SESSIONS_FILE)
            .await?
            .unwrap_or_default())
    }
}

impl AuthStateRepository for FileAuthStateRepository {
    async fn load_credentials(&self) -> Result<AdminCredentials, CoreError> {
        let _guard = self.lock.lock().await;

        match self.read_file::<AdminCredentials>(CREDENTIALS_FILE).await? {
            Some(credentials) => Ok(credentials),
            None => {
                let seed = AdminCredentials::default_seed();
                self.write_file(CREDENTIALS_FILE, &seed).await?;
                Ok(seed)
            }
        }
    }

    async fn store_credentials(&self, credentials: AdminCredentials) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        self.write_file(CREDENTIALS_FILE, &credentials).await
    }

    async fn get_session(&self, token: String) -> Result<Option<Session>, CoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_sessions().await?.remove(&token))
    }

    async fn put_session(&self, session: Session) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        let mut sessions = self.read_sessions().await?;
        sessions.insert(session.token.clone(), session);
        self.write_file(SESSIONS_FILE, &sessions).await
    }

    async fn remove_session(&self, token: String) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        let mut sessions = self.read_sessions().await?;
        sessions.remove(&token);
        self.write_file(SESSIONS_FILE, &sessions).await
    }

    async fn clear_sessions(&self) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        self.write_file(SESSIONS_FILE, &HashMap::<String, Session>::new())
            .await
    }

    async fn update_session_users(&self, user: SessionUser) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;
        let mut sessions = self.read_sessions().await?;
        for session in sessions.values_mut() {
            session.user = user.clone();
        }
        self.write_file(SESSIONS_FILE, &sessions).await
    }
}
