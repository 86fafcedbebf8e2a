use std::path::PathBuf;

use clap::Parser;
use herbful_core::domain::common::{
    AuthStateConfig, HerbfulConfig, ObjectStorageConfig, RealtimeDbConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "herbful-api", about = "Herbful admin API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub object_storage: ObjectStorageArgs,

    #[command(flatten)]
    pub auth: AuthArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HERBFUL_SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "HERBFUL_SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Path prefix for every route, e.g. `/api`.
    #[arg(long, env = "HERBFUL_SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "HERBFUL_SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "HERBFUL_SERVER_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    /// Base URL of the hosted JSON document store.
    #[arg(long, env = "HERBFUL_DATABASE_URL")]
    pub database_url: String,

    #[arg(long, env = "HERBFUL_DATABASE_AUTH_TOKEN")]
    pub database_auth_token: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ObjectStorageArgs {
    #[arg(long, env = "HERBFUL_STORAGE_ENDPOINT", default_value = "http://localhost:9000")]
    pub storage_endpoint: String,

    #[arg(long, env = "HERBFUL_STORAGE_REGION", default_value = "us-east-1")]
    pub storage_region: String,

    #[arg(long, env = "HERBFUL_STORAGE_ACCESS_KEY")]
    pub storage_access_key: String,

    #[arg(long, env = "HERBFUL_STORAGE_SECRET_KEY")]
    pub storage_secret_key: String,

    #[arg(long, env = "HERBFUL_STORAGE_BUCKET", default_value = "herbful")]
    pub storage_bucket: String,

    /// Base URL under which stored objects are publicly reachable.
    #[arg(long, env = "HERBFUL_STORAGE_PUBLIC_BASE_URL")]
    pub storage_public_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    /// Directory holding the credential and session state files.
    #[arg(long, env = "HERBFUL_AUTH_STATE_DIR", default_value = "./auth-state")]
    pub auth_state_dir: PathBuf,
}

impl From<Args> for HerbfulConfig {
    fn from(args: Args) -> Self {
        Self {
            database: RealtimeDbConfig {
                base_url: args.database.database_url,
                auth_token: args.database.database_auth_token,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.object_storage.storage_endpoint,
                region: args.object_storage.storage_region,
                access_key: args.object_storage.storage_access_key,
                secret_key: args.object_storage.storage_secret_key,
                bucket: args.object_storage.storage_bucket,
                public_base_url: args.object_storage.storage_public_base_url,
            },
            auth: AuthStateConfig {
                state_dir: args.auth.auth_state_dir,
            },
        }
    }
}
