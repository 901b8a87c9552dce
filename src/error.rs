use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("Database query failed: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Cache backend error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, PropertyError>;
