//! Bot API request and response shapes.

use cuecast_delivery::SendOutcome;
use cuecast_error::{TelegramError, TelegramErrorKind, TelegramResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Body of a `sendMessage` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest<'a> {
    /// Destination chat identifier or `@channelusername`
    pub chat_id: &'a str,
    /// Message text, sent without a parse mode
    pub text: &'a str,
}

/// The envelope every Bot API response is wrapped in.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ApiEnvelope {
    /// True when the request succeeded
    #[serde(default)]
    pub ok: bool,
    /// Human-readable failure description
    #[serde(default)]
    pub description: Option<String>,
    /// Hints for recovering from the failure
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

/// The `parameters` object of a failed response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ResponseParameters {
    /// Seconds to wait before repeating a throttled request
    #[serde(default)]
    pub retry_after: Option<f64>,
}

impl ApiEnvelope {
    /// The server-suggested wait before retrying.
    ///
    /// `None` when the value is missing or does not fit a `Duration`.
    pub fn retry_after(&self) -> Option<Duration> {
        self.parameters
            .as_ref()
            .and_then(|p| p.retry_after)
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

/// Map an HTTP status and raw body to a send outcome.
///
/// The body must decode as an [`ApiEnvelope`] whatever the status;
/// otherwise the answer is treated as a transport failure and retried.
///
/// # Examples
///
/// ```
/// use cuecast_delivery::SendOutcome;
/// use cuecast_telegram::classify_response;
/// use std::time::Duration;
///
/// let body = r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 3","parameters":{"retry_after":3}}"#;
/// assert_eq!(
///     classify_response(429, body).unwrap(),
///     SendOutcome::Throttled { retry_after: Some(Duration::from_secs(3)) }
/// );
///
/// assert!(classify_response(502, "<html>Bad Gateway</html>").is_err());
/// ```
pub fn classify_response(status: u16, body: &str) -> TelegramResult<SendOutcome> {
    let envelope: ApiEnvelope = serde_json::from_str(body).map_err(|e| {
        TelegramError::new(TelegramErrorKind::MalformedResponse {
            status,
            reason: e.to_string(),
        })
    })?;

    debug!(status, ok = envelope.ok, "Classifying Bot API response");

    let outcome = match status {
        200 => SendOutcome::Delivered,
        429 => SendOutcome::Throttled {
            retry_after: envelope.retry_after(),
        },
        _ => SendOutcome::Rejected {
            status,
            description: body.to_string(),
        },
    };

    Ok(outcome)
}
