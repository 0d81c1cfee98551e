//! Explicit configuration for storage clients.
//!
//! Clients take one of these structs at construction time; nothing in this
//! crate reads the process environment behind the caller's back. The
//! `from_env` constructors exist for callers that do want the conventional
//! variable names, and fail loudly on anything missing.

use crate::store::error::StoreError;

fn env_var(name: &'static str) -> Result<String, StoreError> {
    std::env::var(name).map_err(|_| StoreError::MissingEnv(name))
}

/// Connection settings for an S3-compatible object store.
#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    /// Service endpoint URL
    pub endpoint: String,
    /// Access key id
    pub access_key: String,
    /// Secret access key
    pub secret_key: String,
    /// Bucket holding image blobs
    pub bucket: String,
}

impl ObjectStoreConfig {
    /// Read the conventional `MINIO_*` variables from the environment.
    pub fn from_env() -> Result<Self, StoreError> {
        Ok(Self {
            endpoint: env_var("MINIO_ENDPOINT")?,
            access_key: env_var("MINIO_ACCESS_KEY")?,
            secret_key: env_var("MINIO_SECRET_KEY")?,
            bucket: env_var("MINIO_IMAGE_BUCKET")?,
        })
    }
}

/// Connection settings for the relational record store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database name
    pub name: String,
    /// User name
    pub user: String,
    /// Password
    pub password: String,
}

impl DatabaseConfig {
    /// Read the conventional `DB_*` variables from the environment.
    pub fn from_env() -> Result<Self, StoreError> {
        let port = env_var("DB_PORT")?;
        Ok(Self {
            host: env_var("DB_HOST")?,
            port: port
                .parse()
                .map_err(|_| StoreError::Backend(format!("invalid DB_PORT value {port:?}")))?,
            name: env_var("DB_NAME")?,
            user: env_var("DB_USER")?,
            password: env_var("DB_PASSWORD")?,
        })
    }
}
