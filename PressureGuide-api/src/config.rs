use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use pressure_guide_domain::entities::Guideline;
use pressure_guide_domain::services::LocalClock;

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,

    /// Guideline used when a request does not name one
    pub default_guideline: Guideline,

    /// UTC offset used when a request does not pass `utc_offset_minutes`
    pub default_utc_offset_minutes: i32,

    /// Deployment environment reported by `/health`
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            default_guideline: Guideline::AhaAcc,
            default_utc_offset_minutes: 0,
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, keeping defaults for unset ones
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .with_context(|| format!("HOST must be an IP address, got {:?}", value))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number, got {:?}", value))?,
            None => defaults.port,
        };

        let default_guideline = match lookup("DEFAULT_GUIDELINE") {
            // Unknown tokens fall back to aha_acc; resolve logs the fallback
            Some(value) => Guideline::resolve(&value).guideline,
            None => defaults.default_guideline,
        };

        let default_utc_offset_minutes = match lookup("DEFAULT_UTC_OFFSET_MINUTES") {
            Some(value) => {
                let minutes = value
                    .parse::<i32>()
                    .with_context(|| format!("DEFAULT_UTC_OFFSET_MINUTES must be a number, got {:?}", value))?;
                LocalClock::from_offset_minutes(minutes).context("DEFAULT_UTC_OFFSET_MINUTES is out of range")?;
                minutes
            }
            None => defaults.default_utc_offset_minutes,
        };

        let environment = lookup("APP_ENV").unwrap_or(defaults.environment);

        Ok(Self {
            host,
            port,
            default_guideline,
            default_utc_offset_minutes,
            environment,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
