use super::database::{DEFAULT_HOST, DEFAULT_PORT, DatabaseConfig};
use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).with_context(|| format!("Missing environment variable: {key}"))
        };

        let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("DB_PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let database = required("DB_NAME")?;
        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;

        let dev_mode = parse_flag("DEV_MODE", lookup("DEV_MODE"))?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG", lookup("ENABLE_FILE_LOG"))?;

        Ok(Self {
            database: DatabaseConfig::new(host, port, database, user, password),
            dev_mode,
            enable_file_log,
        })
    }
}

fn parse_flag(key: &str, value: Option<String>) -> Result<bool> {
    match value.as_deref() {
        None | Some("") => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
    }
}
