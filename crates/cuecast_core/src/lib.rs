//! Core screenplay types for cuecast.
//!
//! This crate turns raw screenplay text into an ordered list of
//! [`DialogueEntry`] values, each attributed to the character speaking it:
//! - [`parse_script`] - Pure, total parser over the whole script text
//! - [`classify_line`] - Classification of a single trimmed line
//! - [`Speaker`] - The two-state speaker accumulator threaded through the parse
//! - [`ScriptSource`] - Reading a script file from disk

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entry;
mod parser;
mod source;
mod speaker;

pub use entry::DialogueEntry;
pub use parser::{LineKind, classify_line, parse_script};
pub use source::ScriptSource;
pub use speaker::Speaker;
