// ABOUTME: Configuration from the environment, built once at process start.
// ABOUTME: The cleanup core never reads environment state directly.

use crate::error::{Error, Result};
use crate::runtime::PruneFilter;
use crate::types::ChatId;
use std::env;
use std::time::Duration;

/// Age bound applied when neither flag nor environment specify one.
pub const DEFAULT_DURATION: &str = "72h";

const ENV_DURATION: &str = "DURATION";
const ENV_BOT_TOKEN: &str = "BOT_TOKEN";
const ENV_CHAT_ID: &str = "CHAT_ID";

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum image age for pruning. `None` means prune all unused images.
    pub prune_age: Option<Duration>,

    /// Telegram credentials; `None` disables notification.
    pub telegram: Option<TelegramConfig>,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: ChatId,
}

impl Config {
    /// Build the configuration from the environment.
    ///
    /// `duration_override` (the `--duration` flag) takes precedence over the
    /// `DURATION` variable. A zero span such as "0h" switches to all-unused
    /// semantics with no age bound. Missing or empty `BOT_TOKEN`/`CHAT_ID`
    /// disables notification rather than failing the run.
    pub fn from_env(duration_override: Option<&str>) -> Result<Self> {
        let raw = duration_override
            .map(str::to_string)
            .or_else(|| env::var(ENV_DURATION).ok())
            .unwrap_or_else(|| DEFAULT_DURATION.to_string());
        let prune_age = parse_prune_age(&raw)?;

        let bot_token = env::var(ENV_BOT_TOKEN).ok().filter(|v| !v.is_empty());
        let chat_id = env::var(ENV_CHAT_ID).ok().filter(|v| !v.is_empty());
        let telegram = match (bot_token, chat_id) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig {
                bot_token,
                chat_id: ChatId::new(chat_id),
            }),
            _ => None,
        };

        Ok(Config {
            prune_age,
            telegram,
        })
    }

    /// The prune filter this configuration selects.
    pub fn prune_filter(&self) -> PruneFilter {
        match self.prune_age {
            Some(age) => PruneFilter::Until(age),
            None => PruneFilter::AllUnused,
        }
    }
}

fn parse_prune_age(raw: &str) -> Result<Option<Duration>> {
    let age = humantime::parse_duration(raw).map_err(|source| Error::InvalidDuration {
        value: raw.to_string(),
        source,
    })?;
    Ok(if age.is_zero() { None } else { Some(age) })
}
