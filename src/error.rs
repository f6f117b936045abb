use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Connection failed: {0}")]
    Network(String),

    #[error("Server error (HTTP {status})")]
    Server { status: u16 },

    #[error("Endpoint not found")]
    NotFound,

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl DashboardError {
    /// Single user-facing line shown in the error banner. One message per
    /// failed snapshot, regardless of which of the four reads failed.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::DataIntegrity(_) => {
                "No data received from the server. Please retry.".to_string()
            }
            DashboardError::NotFound => {
                "Dashboard endpoint not found. Check the server address.".to_string()
            }
            DashboardError::Server { .. } => {
                "Server error. Please retry in a moment.".to_string()
            }
            DashboardError::Network(_) => {
                "Connection failed. Check your network and the server address.".to_string()
            }
            _ => "Something went wrong. Please retry.".to_string(),
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> DashboardResult<T>;
    fn with_context<F>(self, f: F) -> DashboardResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> DashboardResult<T> {
        self.map_err(|e| DashboardError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> DashboardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DashboardError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> DashboardResult<T> {
        self.ok_or_else(|| DashboardError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> DashboardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| DashboardError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! dashboard_error {
    ($error_type:ident, $msg:expr) => {
        DashboardError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        DashboardError::$error_type(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard_error;

    #[test]
    fn test_error_context_on_result() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let desk_result = result.context("Failed to read config file");
        assert!(desk_result.is_err());

        match desk_result {
            Err(DashboardError::Unknown(msg)) => {
                assert!(msg.contains("Failed to read config file"));
                assert!(msg.contains("file not found"));
            }
            _ => panic!("Expected DashboardError::Unknown"),
        }
    }

    #[test]
    fn test_error_context_on_option() {
        let option: Option<String> = None;
        let result = option.context("Server address not configured");

        assert!(result.is_err());
        match result {
            Err(DashboardError::Unknown(msg)) => {
                assert_eq!(msg, "Server address not configured");
            }
            _ => panic!("Expected DashboardError::Unknown"),
        }
    }

    #[test]
    fn test_dashboard_error_macro() {
        let error = dashboard_error!(InvalidInput, "Unknown dimension: {}", "flavour");
        match error {
            DashboardError::InvalidInput(msg) => {
                assert_eq!(msg, "Unknown dimension: flavour")
            }
            _ => panic!("Expected DashboardError::InvalidInput"),
        }
    }

    #[test]
    fn test_user_message_per_category() {
        assert!(DashboardError::DataIntegrity("issues payload missing".into())
            .user_message()
            .contains("No data received"));
        assert!(DashboardError::NotFound
            .user_message()
            .contains("endpoint not found"));
        assert!(DashboardError::Server { status: 503 }
            .user_message()
            .contains("Server error"));
        assert!(DashboardError::Network("connect refused".into())
            .user_message()
            .contains("Connection failed"));
        assert!(DashboardError::Unknown("huh".into())
            .user_message()
            .contains("retry"));
    }
}
