use thiserror::Error;

#[derive(Error, Debug)]
pub enum StylogramError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type SgResult<T> = Result<T, StylogramError>;
