use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub log_dir: String,
    pub log_level: Level,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            api_url: env::var("API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: parse_var("LOG_LEVEL", "DEBUG")?,
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS", "30")?, // default 30s
        })
    }
}

fn parse_var<T>(name: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .with_context(|| format!("{} has an invalid value", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_uses_default_when_unset() {
        let timeout: u64 = parse_var("HRMS_TEST_UNSET_TIMEOUT", "30").unwrap();
        assert_eq!(timeout, 30);

        let level: Level = parse_var("HRMS_TEST_UNSET_LEVEL", "info").unwrap();
        assert_eq!(level, Level::INFO);
    }

    #[test]
    fn parse_var_reports_variable_name() {
        let err = parse_var::<u64>("HRMS_TEST_UNSET_BAD", "soon").unwrap_err();
        assert!(err.to_string().contains("HRMS_TEST_UNSET_BAD"));
    }
}
