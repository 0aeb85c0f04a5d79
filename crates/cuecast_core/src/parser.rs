//! Line-oriented screenplay parser.

use crate::{DialogueEntry, Speaker};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Uppercase letters and whitespace followed by a single trailing colon.
static CUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z\s]+:$").expect("cue pattern is a valid regex")
});

/// Classification of one trimmed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `(parenthesized)` direction, ignored entirely
    StageDirection,
    /// Character cue; holds the name with the colon removed
    Cue(&'a str),
    /// Anything else; holds the trimmed line
    Dialogue(&'a str),
}

/// Classify a single line after trimming surrounding whitespace.
///
/// Only all-uppercase cues are recognized, so `Jerry:` is dialogue.
///
/// # Examples
///
/// ```
/// use cuecast_core::{LineKind, classify_line};
///
/// assert_eq!(classify_line("  (pause)  "), LineKind::StageDirection);
/// assert_eq!(classify_line("VANESSA BLOOME:"), LineKind::Cue("VANESSA BLOOME"));
/// assert_eq!(classify_line("Vanessa:"), LineKind::Dialogue("Vanessa:"));
/// ```
pub fn classify_line(raw: &str) -> LineKind<'_> {
    let line = raw.trim();

    if line.starts_with('(') && line.ends_with(')') {
        return LineKind::StageDirection;
    }

    if CUE_PATTERN.is_match(line) {
        let name = line[..line.len() - 1].trim();
        return LineKind::Cue(name);
    }

    LineKind::Dialogue(line)
}

/// Parse a whole screenplay into dialogue entries, in script order.
///
/// Never fails. Lines before the first cue, blank lines, bare colons and
/// stage directions produce nothing.
///
/// # Examples
///
/// ```
/// use cuecast_core::parse_script;
///
/// let entries = parse_script("JERRY:\nHello there.\n(pause)\nHow are you?");
/// let texts: Vec<String> = entries.iter().map(|e| e.message_text()).collect();
/// assert_eq!(texts, vec!["**JERRY**: Hello there.", "**JERRY**: How are you?"]);
/// ```
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_script(text: &str) -> Vec<DialogueEntry> {
    let (speaker, entries) = text.split('\n').map(classify_line).fold(
        (Speaker::Unset, Vec::new()),
        |(speaker, mut entries), line| {
            let (speaker, entry) = speaker.advance(line);
            entries.extend(entry);
            (speaker, entries)
        },
    );

    debug!(
        entries = entries.len(),
        last_speaker = speaker.name(),
        "Parsed script"
    );
    entries
}
