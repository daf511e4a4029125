use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("inference failed: {0}")]
    Inference(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
