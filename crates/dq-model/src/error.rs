use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
    #[error("unknown order status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
