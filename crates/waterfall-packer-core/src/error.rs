use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaterfallError {
    #[error("columns must be at least 1, got {columns}")]
    InvalidColumns { columns: usize },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, WaterfallError>;
