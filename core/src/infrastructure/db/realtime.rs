use serde::{Serialize, de::DeserializeOwned};
use tracing::error;

use crate::domain::common::{RealtimeDbConfig, entities::app_errors::CoreError};

/// REST client for the hosted tree-structured JSON store. Every node is
/// addressed by a slash-separated path and read or written as JSON; a `null`
/// body means the node is absent.
#[derive(Clone)]
pub struct RealtimeDb {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl RealtimeDb {
    pub fn new(config: RealtimeDbConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token,
        }
    }

    fn node_url(&self, path: &str) -> String {
        let encoded: Vec<String> = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        let mut url = format!("{}/{}.json", self.base_url, encoded.join("/"));
        if let Some(token) = &self.auth_token {
            url.push_str("?auth=");
            url.push_str(&urlencoding::encode(token));
        }
        url
    }

    /// Reads the node at `path`. `Ok(None)` when the node does not exist.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, CoreError> {
        let response = self
            .client
            .get(self.node_url(path))
            .send()
            .await
            .map_err(|e| {
                error!(%path, error = %e, "store read request failed");
                CoreError::UpstreamReadFailed(e.to_string())
            })?;

        if !response.status().is_success() {
            error!(%path, status = %response.status(), "store read rejected");
            return Err(CoreError::UpstreamReadFailed(format!(
                "status {}",
                response.status()
            )));
        }

        response.json::<Option<T>>().await.map_err(|e| {
            error!(%path, error = %e, "store payload did not decode");
            CoreError::UpstreamReadFailed(e.to_string())
        })
    }

    /// Replaces the node at `path` with `value`.
    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, value: &T) -> Result<(), CoreError> {
        let response = self
            .client
            .put(self.node_url(path))
            .json(value)
            .send()
            .await
            .map_err(|e| {
                error!(%path, error = %e, "store write request failed");
                CoreError::UpstreamWriteFailed(e.to_string())
            })?;

        Self::check_write_status(path, &response)
    }

    /// Merges `value` into the node at `path`, leaving unnamed children alone.
    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        path: &str,
        value: &T,
    ) -> Result<(), CoreError> {
        let response = self
            .client
            .patch(self.node_url(path))
            .json(value)
            .send()
            .await
            .map_err(|e| {
                error!(%path, error = %e, "store patch request failed");
                CoreError::UpstreamWriteFailed(e.to_string())
            })?;

        Self::check_write_status(path, &response)
    }

    pub async fn delete(&self, path: &str) -> Result<(), CoreError> {
        let response = self
            .client
            .delete(self.node_url(path))
            .send()
            .await
            .map_err(|e| {
                error!(%path, error = %e, "store delete request failed");
                CoreError::UpstreamWriteFailed(e.to_string())
            })?;

        Self::check_write_status(path, &response)
    }

    fn check_write_status(path: &str, response: &reqwest::Response) -> Result<(), CoreError> {
        if !response.status().is_success() {
            error!(%path, status = %response.status(), "store write rejected");
            return Err(CoreError::UpstreamWriteFailed(format!(
                "status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db(base_url: &str, auth_token: Option<&str>) -> RealtimeDb {
        RealtimeDb::new(RealtimeDbConfig {
            base_url: base_url.to_string(),
            auth_token: auth_token.map(str::to_string),
        })
    }

    #[test]
    fn node_url_trims_the_trailing_slash() {
        let db = db("https://db.example/", None);
        assert_eq!(db.node_url("treatments"), "https://db.example/treatments.json");
    }

    #[test]
    fn node_url_appends_the_auth_token() {
        let db = db("https://db.example", Some("s3cret"));
        assert_eq!(
            db.node_url("treatments"),
            "https://db.example/treatments.json?auth=s3cret"
        );
    }

    #[test]
    fn node_url_encodes_each_path_segment() {
        let db = db("https://db.example", None);
        assert_eq!(
            db.node_url("reviews/17 12"),
            "https://db.example/reviews/17%2012.json"
        );
    }
}
