//! # Notification Sender
//!
//! One blocking `POST {base}/bot{token}/sendMessage` per call. Anything but
//! `200 OK` is a failure carrying the status line; the response body is never
//! parsed, only drained so the connection is released.
//!
//! The token is part of the URL, so it is kept out of log events and stripped
//! from transport errors before they leave this module.

use crate::error::{Result, TelNotiError};
use crate::message::OutboundMessage;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::io;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

pub struct Sender {
    client: Client,
    base_url: String,
}

impl Sender {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint for `sendMessage` with the token substituted in.
    pub fn endpoint(&self, bot_token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, bot_token)
    }

    pub fn send(&self, bot_token: &str, message: &OutboundMessage) -> Result<()> {
        tracing::debug!(base = %self.base_url, chat_id = message.chat_id, "sending message");

        let response = self
            .client
            .post(self.endpoint(bot_token))
            .json(message)
            .send()
            .map_err(|e| TelNotiError::Transport(e.without_url()))?;

        let status = response.status();
        tracing::debug!(%status, "received response");
        release(response);

        if status != StatusCode::OK {
            return Err(TelNotiError::Status(status.to_string()));
        }

        tracing::info!(chat_id = message.chat_id, "message sent");
        Ok(())
    }
}

impl Default for Sender {
    fn default() -> Self {
        Self::new()
    }
}

fn release(mut response: Response) {
    if let Err(e) = response.copy_to(&mut io::sink()) {
        tracing::warn!(error = %e.without_url(), "failed to close response body");
    }
}
