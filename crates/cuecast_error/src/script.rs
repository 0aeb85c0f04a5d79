//! Script input error types.

/// Kinds of script input errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ScriptErrorKind {
    /// Script file does not exist
    #[display("File '{}' not found", _0)]
    NotFound(String),
    /// Script file exists but could not be read
    #[display("Failed to read '{}': {}", path, reason)]
    Read {
        /// Path that was being read
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
}

/// Script input error with location tracking.
///
/// # Examples
///
/// ```
/// use cuecast_error::{ScriptError, ScriptErrorKind};
///
/// let err = ScriptError::new(ScriptErrorKind::NotFound("Bee.txt".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Script Error: {} at line {} in {}", kind, line, file)]
pub struct ScriptError {
    /// The kind of error that occurred
    pub kind: ScriptErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ScriptError {
    /// Create a new script error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the script file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ScriptErrorKind::NotFound(_))
    }
}
