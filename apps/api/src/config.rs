use anyhow::{Context, Result};

/// Deployment stage. Drives the analytics backend choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Staging,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => anyhow::bail!(
                "APP_ENV must be one of development, staging, production (got '{other}')"
            ),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

/// Application configuration loaded from environment variables.
/// Nothing is required: every variable has a default or is optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub environment: AppEnvironment,
    /// Without a token, analytics events are only logged.
    pub mixpanel_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            environment: AppEnvironment::parse(
                &lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            )?,
            mixpanel_token: lookup("MIXPANEL_TOKEN").filter(|t| !t.trim().is_empty()),
        })
    }
}
