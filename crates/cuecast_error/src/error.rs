//! Top-level error wrapper types.

use crate::{ConfigError, ScriptError, TelegramError};

/// Every error condition cuecast can surface to the binary.
///
/// # Examples
///
/// ```
/// use cuecast_error::{CuecastError, ConfigError};
///
/// let config_err = ConfigError::new("Missing token");
/// let err: CuecastError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CuecastErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Script input error
    #[from(ScriptError)]
    Script(ScriptError),
    /// Telegram transport error
    #[from(TelegramError)]
    Telegram(TelegramError),
}

/// Cuecast error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cuecast_error::{CuecastErrorKind, CuecastResult, ConfigError};
///
/// fn might_fail() -> CuecastResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), CuecastErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cuecast Error: {}", _0)]
pub struct CuecastError(Box<CuecastErrorKind>);

impl CuecastError {
    /// Create a new error from a kind.
    pub fn new(kind: CuecastErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CuecastErrorKind {
        &self.0
    }
}

impl<T> From<T> for CuecastError
where
    T: Into<CuecastErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for cuecast operations.
pub type CuecastResult<T> = std::result::Result<T, CuecastError>;
