use anyhow::anyhow;
use std::{net::SocketAddr, time::Duration};
use time::OffsetDateTime;

const DEFAULT_READ_RETENTION_SECS: u64 = 24 * 60 * 60;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_message_len: usize,
    pub max_http_content_len: usize,

    /// How long read notification is kept before deletion
    pub read_retention: Duration,
    /// How often persisted pending deletions are checked
    pub sweep_interval: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("LEAGUE_NOTIFICATIONS_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("LEAGUE_NOTIFICATIONS_LOG_FILENAME")?;
        let bind_address = Self::env_var("LEAGUE_NOTIFICATIONS_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("LEAGUE_NOTIFICATIONS_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("LEAGUE_NOTIFICATIONS_DB_NAME")?;
        let max_message_len = Self::env_var("LEAGUE_NOTIFICATIONS_MAX_MESSAGE_LEN")?.parse()?;
        let max_http_content_len =
            Self::env_var("LEAGUE_NOTIFICATIONS_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let read_retention = Self::env_var_secs(
            "LEAGUE_NOTIFICATIONS_READ_RETENTION",
            DEFAULT_READ_RETENTION_SECS,
        )?;
        Self::validate_read_retention(read_retention)?;
        let sweep_interval = Self::env_var_secs(
            "LEAGUE_NOTIFICATIONS_SWEEP_INTERVAL",
            DEFAULT_SWEEP_INTERVAL_SECS,
        )?;
        if sweep_interval.is_zero() {
            anyhow::bail!("LEAGUE_NOTIFICATIONS_SWEEP_INTERVAL must be greater than 0");
        }

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_message_len,
            max_http_content_len,
            read_retention,
            sweep_interval,
        })
    }

    /// Deletion time of notification read now must be representable
    fn validate_read_retention(read_retention: Duration) -> anyhow::Result<()> {
        time::Duration::try_from(read_retention)
            .ok()
            .and_then(|retention| OffsetDateTime::now_utc().checked_add(retention))
            .ok_or_else(|| anyhow!("LEAGUE_NOTIFICATIONS_READ_RETENTION is too large"))?;

        Ok(())
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    /// Optional variable with number of seconds
    fn env_var_secs(name: &'static str, default: u64) -> anyhow::Result<Duration> {
        let secs = match std::env::var(name) {
            Ok(secs) => secs
                .parse()
                .map_err(|err| anyhow!("environment variable {name} invalid: {err}"))?,
            Err(_) => default,
        };

        Ok(Duration::from_secs(secs))
    }
}
