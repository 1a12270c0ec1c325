use std::fmt;
use std::time::Duration;

use anyhow::{bail, Context};
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    /// Full connection string; takes precedence over the discrete fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = var("DATABASE_URL");
        let user = var("DB_USER");
        let password = var("DB_PASSWORD");
        if url.is_none() && (user.is_none() || password.is_none()) {
            bail!("DB_USER and DB_PASSWORD must be set when DATABASE_URL is not");
        }

        let database = DatabaseConfig {
            url,
            host: var("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: var("DB_PORT")
                .unwrap_or_else(|| "5432".to_string())
                .parse()
                .context("DB_PORT must be a valid port number")?,
            name: var("DB_NAME").unwrap_or_else(|| "cars_db".to_string()),
            user,
            password,
            max_connections: var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            acquire_timeout: Duration::from_secs(
                var("DB_ACQUIRE_TIMEOUT_SECS")
                    .unwrap_or_else(|| "5".to_string())
                    .parse()
                    .context("DB_ACQUIRE_TIMEOUT_SECS must be a valid number")?,
            ),
            run_migrations: parse_flag(var("RUN_MIGRATIONS").as_deref(), true)
                .context("RUN_MIGRATIONS must be true or false")?,
        };

        Ok(Self {
            database,
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return url
                .parse::<PgConnectOptions>()
                .context("DATABASE_URL is not a valid Postgres URL");
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name);
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

// Never print credentials.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

fn parse_flag(value: Option<&str>, default: bool) -> anyhow::Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => bail!("unrecognised flag value {other:?}"),
        },
    }
}
