// ABOUTME: Operator notification over Telegram, modeled as a capability.
// ABOUTME: Delivery is best-effort: failures are logged, never propagated.

use crate::config::TelegramConfig;
use crate::types::ChatId;
use async_trait::async_trait;
use serde::Serialize;

/// A channel the final report can be delivered on.
///
/// `notify` never fails: the operator losing one message is preferable to a
/// cleanup run aborting over an unreachable bot API.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str);
}

/// Build the notifier matching the configuration.
///
/// Absent credentials select the no-op implementation, so the pipeline never
/// branches on whether notification is configured.
pub fn from_config(telegram: Option<&TelegramConfig>) -> Box<dyn Notifier> {
    match telegram {
        Some(cfg) => Box::new(TelegramNotifier::new(cfg)),
        None => {
            tracing::warn!("BOT_TOKEN or CHAT_ID not set, skipping Telegram notifications");
            Box::new(NoopNotifier)
        }
    }
}

/// Notifier used when credentials are absent.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _text: &str) {
        tracing::debug!("notifications disabled, dropping report");
    }
}

/// Errors delivering a Telegram message. Internal to this module; callers
/// only ever see the logged form.
#[derive(Debug, thiserror::Error)]
enum NotifyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a ChatId,
    parse_mode: &'a str,
    text: &'a str,
}

/// Delivers reports to a Telegram chat through the bot API.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(cfg: &TelegramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: format!("https://api.telegram.org/bot{}/sendMessage", cfg.bot_token),
            chat_id: cfg.chat_id.clone(),
        }
    }

    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            parse_mode: "Markdown",
            text,
        };

        self.client
            .post(&self.api_url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) {
        tracing::info!("sending Telegram message");
        match self.send(text).await {
            Ok(()) => tracing::info!("Telegram message sent"),
            Err(e) => tracing::error!(error = %e, "failed to send Telegram message"),
        }
    }
}
