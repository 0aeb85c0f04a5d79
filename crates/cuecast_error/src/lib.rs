//! Error types for cuecast.
//!
//! This crate provides the foundation error types used throughout the cuecast workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cuecast_error::{ConfigError, CuecastResult};
//!
//! fn load_token() -> CuecastResult<String> {
//!     Err(ConfigError::new("TELEGRAM_BOT_TOKEN is not set"))?
//! }
//!
//! match load_token() {
//!     Ok(token) => println!("Got {} bytes", token.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod rate_limit;
mod script;
mod telegram;

pub use config::ConfigError;
pub use error::{CuecastError, CuecastErrorKind, CuecastResult};
pub use rate_limit::{RateLimitError, RateLimitErrorKind};
pub use script::{ScriptError, ScriptErrorKind};
pub use telegram::{TelegramError, TelegramErrorKind, TelegramResult};
