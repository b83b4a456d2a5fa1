use crate::agencies::{self, AgencyConfig};
use std::collections::HashMap;
use std::time::Duration;

/// Default bound on the outbound webhook call.
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Fallback destination (`MAKE_WEBHOOK_DEFAULT`).
    pub default_webhook_url: Option<String>,
    /// Agency-specific destinations keyed by the agency's route key.
    pub agency_webhook_urls: HashMap<String, String>,
    pub webhook_timeout_secs: u64,
    /// Allowed browser origin; permissive CORS when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let default_webhook_url = non_empty("MAKE_WEBHOOK_DEFAULT")
            .map(|url| validate_webhook_url("MAKE_WEBHOOK_DEFAULT", url))
            .transpose()?;

        let mut agency_webhook_urls = HashMap::new();
        for agency in agencies::all_agencies() {
            let key = agency.webhook_route_key;
            if let Some(url) = non_empty(key) {
                agency_webhook_urls.insert(key.to_string(), validate_webhook_url(key, url)?);
            }
        }

        let config = Self {
            port: non_empty("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            default_webhook_url,
            agency_webhook_urls,
            webhook_timeout_secs: non_empty("WEBHOOK_TIMEOUT_SECS")
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| {
                            anyhow::anyhow!("WEBHOOK_TIMEOUT_SECS must be a positive integer")
                        })
                })
                .transpose()?
                .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECS),
            cors_allowed_origin: non_empty("CORS_ALLOWED_ORIGIN"),
        };

        // Log successful configuration load (without webhook URLs, they embed secrets)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Webhook timeout: {}s", config.webhook_timeout_secs);
        if config.default_webhook_url.is_none() && config.agency_webhook_urls.is_empty() {
            tracing::warn!(
                "No webhook URL configured. Set MAKE_WEBHOOK_DEFAULT (or an agency-specific variable); leads will not be forwarded"
            );
        } else {
            tracing::info!(
                "Webhook destinations configured: default={}, agency-specific={}",
                config.default_webhook_url.is_some(),
                config.agency_webhook_urls.len()
            );
        }

        Ok(config)
    }

    /// Webhook URL for an agency: its own destination, else the default one.
    pub fn webhook_url_for(&self, agency: &AgencyConfig) -> Option<&str> {
        self.agency_webhook_urls
            .get(agency.webhook_route_key)
            .or(self.default_webhook_url.as_ref())
            .map(String::as_str)
    }

    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_secs(self.webhook_timeout_secs)
    }
}

fn validate_webhook_url(key: &str, raw: String) -> anyhow::Result<String> {
    let raw = raw.trim().to_string();
    let parsed = url::Url::parse(&raw)
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL: {}", key, e))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("{} must start with http:// or https://", key);
    }

    Ok(raw)
}
