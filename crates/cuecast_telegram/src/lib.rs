//! Telegram Bot API transport.
//!
//! Implements [`ChatTransport`](cuecast_delivery::ChatTransport) over the
//! Bot API `sendMessage` method:
//! - [`TelegramClient`] - HTTP client bound to one bot token and one chat
//! - [`classify_response`] - Maps status and body to a send outcome
//! - [`SendMessageRequest`] / [`ApiEnvelope`] - Wire types

#![warn(missing_docs)]

mod client;
mod wire;

pub use client::{DEFAULT_API_BASE_URL, TelegramClient};
pub use wire::{ApiEnvelope, ResponseParameters, SendMessageRequest, classify_response};
