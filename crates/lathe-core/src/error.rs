use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatheError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Renderer error: {0}")]
    Renderer(String),
}

pub type Result<T> = std::result::Result<T, LatheError>;
