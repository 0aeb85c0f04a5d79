//! cuecast - deliver a screenplay to a Telegram chat.
//!
//! cuecast parses a plain-text screenplay into dialogue lines attributed to
//! their speaking character, then sends each line as its own Telegram
//! message, pacing requests and retrying when the Bot API throttles.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cuecast::{Dispatcher, NoProgress, RetryPolicy, TelegramClient, TokioSleeper, parse_script};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let entries = parse_script("BARRY:\nYa like jazz?");
//!     let client = TelegramClient::new(std::env::var("TELEGRAM_BOT_TOKEN")?, "-100123".into())?;
//!
//!     let dispatcher = Dispatcher::new(client, TokioSleeper, RetryPolicy::default());
//!     let report = dispatcher.dispatch(&entries, &NoProgress).await;
//!     println!("{} of {} delivered", report.delivered(), report.total());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! cuecast is organized as a workspace with focused crates:
//!
//! - `cuecast_error` - Error types
//! - `cuecast_core` - Screenplay parsing
//! - `cuecast_rate_limit` - Retry policy and wait capability
//! - `cuecast_delivery` - Sequential dispatch loop
//! - `cuecast_telegram` - Telegram Bot API transport
//!
//! This crate (`cuecast`) re-exports everything for convenience and adds
//! configuration loading and console progress for the binary.

#![warn(missing_docs)]

mod config;
mod console;

pub use config::{CuecastConfig, EnvOverrides, ScriptSettings, Settings, TelegramSettings};
pub use console::{ConsoleProgress, print_summary};

// Re-export workspace crates
pub use cuecast_core::*;
pub use cuecast_delivery::*;
pub use cuecast_error::*;
pub use cuecast_rate_limit::*;
pub use cuecast_telegram::*;
