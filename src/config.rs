//! Server configuration: command-line flags with environment fallbacks, `.env` loaded first.

use clap::{Parser, ValueEnum};
use resource_actor::tracing::LogFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogStyle {
    Compact,
    Json,
}

impl From<LogStyle> for LogFormat {
    fn from(style: LogStyle) -> Self {
        match style {
            LogStyle::Compact => LogFormat::Compact,
            LogStyle::Json => LogFormat::Json,
        }
    }
}

/// Marketplace API server configuration
#[derive(Debug, Parser)]
#[command(name = "marketplace", about = "Marketplace order API server", long_about = None)]
pub struct ServerConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "5000")]
    pub port: u16,

    /// Default log filter; `RUST_LOG` takes precedence when set
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "compact")]
    pub log_format: LogStyle,

    /// Secret the session token key is derived from
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: String,

    /// Session token lifetime in seconds
    #[arg(long, env = "TOKEN_TTL_SECS", default_value = "3600")]
    pub token_ttl_secs: u32,

    /// Request queue size of each collection actor (at least 1)
    #[arg(
        long,
        env = "CHANNEL_CAPACITY",
        default_value = "32",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub channel_capacity: usize,

    #[arg(long, env = "ADMIN_NAME", default_value = "Administrator")]
    pub admin_name: String,

    /// Administrator account created at startup when both email and password are set
    #[arg(long, env = "ADMIN_EMAIL")]
    pub admin_email: Option<String>,

    #[arg(long, env = "ADMIN_PHONE", default_value = "0000000000")]
    pub admin_phone: String,

    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::from(self.token_ttl_secs))
    }

    /// Email and password of the bootstrap administrator, if configured.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        Some((self.admin_email.as_deref()?, self.admin_password.as_deref()?))
    }
}
