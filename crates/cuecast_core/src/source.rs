//! Script file loading.

use cuecast_error::{ScriptError, ScriptErrorKind};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A screenplay read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSource {
    path: PathBuf,
    text: String,
}

impl ScriptSource {
    /// Read a UTF-8 script file.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptErrorKind::NotFound`] when the file does not exist and
    /// [`ScriptErrorKind::Read`] for any other I/O or encoding failure.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            let display = path.display().to_string();
            if e.kind() == ErrorKind::NotFound {
                ScriptError::new(ScriptErrorKind::NotFound(display))
            } else {
                ScriptError::new(ScriptErrorKind::Read {
                    path: display,
                    reason: e.to_string(),
                })
            }
        })?;

        debug!(bytes = text.len(), "Read script file");

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Path the script was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full script text.
    pub fn text(&self) -> &str {
        &self.text
    }
}
