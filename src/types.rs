use crate::errors::AppError;

/// Result type returned by HTTP handlers
pub type Result<T> = std::result::Result<T, AppError>;
