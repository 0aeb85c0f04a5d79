//! Bot API HTTP client.
//!
//! This module provides the TelegramClient struct which posts each message to
//! `sendMessage` for a single configured chat.

use crate::{SendMessageRequest, classify_response};
use async_trait::async_trait;
use cuecast_delivery::{ChatTransport, SendOutcome};
use cuecast_error::{TelegramError, TelegramErrorKind, TelegramResult};
use reqwest::Client;
use std::fmt;
use tracing::{debug, info, instrument};

/// Production Bot API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Telegram bot bound to one destination chat.
///
/// The client applies no request timeout.
///
/// # Example
/// ```no_run
/// use cuecast_delivery::ChatTransport;
/// use cuecast_telegram::TelegramClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("TELEGRAM_BOT_TOKEN")?;
///     let chat_id = std::env::var("TELEGRAM_CHAT_ID")?;
///
///     let client = TelegramClient::new(token, chat_id)?;
///     let outcome = client.send_message("**BARRY**: Ya like jazz?").await?;
///     println!("{}", outcome);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    bot_token: String,
    chat_id: String,
    base_url: String,
}

impl TelegramClient {
    /// Create a client for the production Bot API.
    ///
    /// # Errors
    /// Returns an error if the HTTP client fails to initialize.
    #[instrument(skip(bot_token), fields(token_len = bot_token.len()))]
    pub fn new(bot_token: String, chat_id: String) -> TelegramResult<Self> {
        let http = Client::builder().build().map_err(|e| {
            TelegramError::new(TelegramErrorKind::ClientBuild(e.to_string()))
        })?;

        info!("Initialized Telegram client");

        Ok(Self {
            http,
            bot_token,
            chat_id,
            base_url: DEFAULT_API_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different Bot API server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The configured destination chat.
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// The Bot API server in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.bot_token)
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    #[instrument(skip(self, text), fields(chat_id = %self.chat_id, text_len = text.len()))]
    async fn send_message(&self, text: &str) -> TelegramResult<SendOutcome> {
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        // without_url keeps the token out of error messages
        let response = self
            .http
            .post(self.send_message_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TelegramError::new(TelegramErrorKind::Transport(e.without_url().to_string()))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            TelegramError::new(TelegramErrorKind::Transport(e.without_url().to_string()))
        })?;

        debug!(status, body_len = body.len(), "Received Bot API response");
        classify_response(status, &body)
    }

    fn destination(&self) -> &str {
        &self.chat_id
    }
}
