use thiserror::Error;

#[derive(Debug, Error)]
pub enum PingplotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission error: {0}")]
    Permission(String),

    #[error("No response: {0}")]
    NoResponse(String),

    #[error("Missing optional dependency: {0}")]
    MissingDependency(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Render error: {0}")]
    Render(String),
}

impl PingplotError {
    /// Process exit code for this error. Kept stable so scripts can
    /// distinguish failure classes; 2 matches clap's own usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            PingplotError::Config(_) => 2,
            PingplotError::Permission(_) => 3,
            PingplotError::NoResponse(_) => 4,
            PingplotError::MissingDependency(_) => 5,
            PingplotError::Io(_)
            | PingplotError::Json(_)
            | PingplotError::Csv(_)
            | PingplotError::Render(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PingplotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_fatal_class() {
        let codes = [
            PingplotError::Config("x".into()).exit_code(),
            PingplotError::Permission("x".into()).exit_code(),
            PingplotError::NoResponse("x".into()).exit_code(),
            PingplotError::MissingDependency("x".into()).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_io_error_converts() {
        let err: PingplotError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert_eq!(err.exit_code(), 1);
    }
}
