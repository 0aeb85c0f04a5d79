//! Test utilities for delivery tests.
//!
//! This module provides a scripted transport and a recording progress observer.

pub mod mock_transport;

#[allow(unused_imports)]
pub use mock_transport::{MockResponse, MockTransport, RecordingProgress};

use cuecast_core::DialogueEntry;

/// Entries spoken by one character, one per line.
#[allow(dead_code)]
pub fn entries(character: &str, lines: &[&str]) -> Vec<DialogueEntry> {
    lines
        .iter()
        .map(|line| DialogueEntry::new(character, *line))
        .collect()
}
