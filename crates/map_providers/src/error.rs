use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapProviderError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned {status}: {message}")]
    Status { status: String, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),
}
