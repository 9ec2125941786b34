use thiserror::Error;

/// Errors raised by the batch runner
///
/// The matching engine itself never fails; everything here belongs to
/// reading configuration and requests or writing results.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Batch of {size} pairs exceeds the configured maximum of {max}")]
    BatchTooLarge { size: usize, max: usize },

    #[error("Thread pool error: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),
}

impl AppError {
    /// Short machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ConfigError(_) => "invalid_config",
            AppError::IoError(_) => "io_error",
            AppError::JsonError(_) => "invalid_json",
            AppError::ValidationError(_) => "validation_failed",
            AppError::BatchTooLarge { .. } => "batch_too_large",
            AppError::ThreadPoolError(_) => "thread_pool",
        }
    }
}
