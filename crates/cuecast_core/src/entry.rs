//! Dialogue entry type.

use serde::{Deserialize, Serialize};

/// One spoken line attributed to a character.
///
/// Renders as `**CHARACTER**: line`, the form delivered as a chat message.
///
/// # Examples
///
/// ```
/// use cuecast_core::DialogueEntry;
///
/// let entry = DialogueEntry::new("BARRY", "Ya like jazz?");
/// assert_eq!(entry.to_string(), "**BARRY**: Ya like jazz?");
/// assert_eq!(entry.character(), "BARRY");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_getters::Getters,
)]
#[display("**{}**: {}", character, line)]
pub struct DialogueEntry {
    /// Name of the speaking character, without the trailing colon
    character: String,
    /// The spoken line, trimmed
    line: String,
}

impl DialogueEntry {
    /// Create an entry for `character` speaking `line`.
    pub fn new(character: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            line: line.into(),
        }
    }

    /// The text sent to the chat for this entry.
    pub fn message_text(&self) -> String {
        self.to_string()
    }
}
