use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};

pub mod entities;
pub mod services;

#[cfg(test)]
pub mod test_fixtures;

#[derive(Clone, Debug)]
pub struct HerbfulConfig {
    pub database: RealtimeDbConfig,
    pub object_storage: ObjectStorageConfig,
    pub auth: AuthStateConfig,
}

/// Connection settings for the hosted tree-structured JSON store.
#[derive(Clone, Debug)]
pub struct RealtimeDbConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub public_base_url: String,
}

#[derive(Clone, Debug)]
pub struct AuthStateConfig {
    pub state_dir: std::path::PathBuf,
}

/// Generation-time identifier used for review records (epoch millis, as the
/// original dataset stores them).
pub fn generate_epoch_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Derives a treatment id from its name: lowercased, whitespace runs collapsed
/// to a single hyphen. Collisions are rejected at creation time.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_whitespace() {
        assert_eq!(slugify("Ginger Tea"), "ginger-tea");
        assert_eq!(slugify("  Malunggay   Leaves "), "malunggay-leaves");
        assert_eq!(slugify("Lagundi"), "lagundi");
    }
}
