//! Startup configuration errors.

/// Configuration could not be loaded or is incomplete.
///
/// Raised before any script is read or message is sent.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Required environment variables that were unset, if that was the problem
    pub missing: Vec<&'static str>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// A loading or parsing failure described by `message`.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            missing: Vec::new(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Required credentials are unset; names every one of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuecast_error::ConfigError;
    ///
    /// let err = ConfigError::missing_variables(vec!["TELEGRAM_BOT_TOKEN", "TELEGRAM_CHAT_ID"]);
    /// assert_eq!(
    ///     err.message,
    ///     "Missing required environment variables: TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID"
    /// );
    /// assert!(err.is_missing_credentials());
    /// ```
    #[track_caller]
    pub fn missing_variables(names: Vec<&'static str>) -> Self {
        let mut err = Self::new(format!(
            "Missing required environment variables: {}",
            names.join(" and ")
        ));
        err.missing = names;
        err
    }

    /// True when the error is about unset credentials.
    pub fn is_missing_credentials(&self) -> bool {
        !self.missing.is_empty()
    }
}
