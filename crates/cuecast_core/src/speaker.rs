//! Speaker state accumulator.

use crate::{DialogueEntry, LineKind};

/// Who is currently speaking.
///
/// The parser starts at [`Speaker::Unset`]. A cue line moves it to
/// [`Speaker::Named`], and it never returns to `Unset`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Speaker {
    /// No character cue has been seen yet
    #[default]
    Unset,
    /// The most recent character cue
    Named(String),
}

impl Speaker {
    /// Apply one classified line, returning the next state and any entry it emits.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuecast_core::{LineKind, Speaker};
    ///
    /// let (speaker, entry) = Speaker::Unset.advance(LineKind::Cue("JERRY"));
    /// assert_eq!(speaker, Speaker::Named("JERRY".to_string()));
    /// assert!(entry.is_none());
    ///
    /// let (_, entry) = speaker.advance(LineKind::Dialogue("Hello there."));
    /// assert_eq!(entry.unwrap().to_string(), "**JERRY**: Hello there.");
    /// ```
    pub fn advance(self, line: LineKind<'_>) -> (Self, Option<DialogueEntry>) {
        match line {
            LineKind::StageDirection => (self, None),
            LineKind::Cue(name) => (Speaker::Named(name.to_string()), None),
            LineKind::Dialogue(text) => {
                let entry = match &self {
                    Speaker::Named(name) if !text.is_empty() && text != ":" => {
                        Some(DialogueEntry::new(name.clone(), text))
                    }
                    _ => None,
                };
                (self, entry)
            }
        }
    }

    /// The current character name, if one has been established.
    pub fn name(&self) -> Option<&str> {
        match self {
            Speaker::Unset => None,
            Speaker::Named(name) => Some(name),
        }
    }
}
