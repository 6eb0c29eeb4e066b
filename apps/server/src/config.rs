use anyhow::Context;
use std::{net::SocketAddr, time::Duration};

use crate::auth::decode_secret_key;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Decoded HS256 key. `None` means a throwaway key is generated at startup.
    pub jwt_secret: Option<Vec<u8>>,
    pub token_ttl: Duration,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid FT_LISTEN_ADDR")?;
        let db_path = std::env::var("FT_DB_PATH").unwrap_or_else(|_| "./db/fintrack.db".into());
        let cors_allow = std::env::var("FT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = parse_duration_var(
            "FT_REQUEST_TIMEOUT_MS",
            std::env::var("FT_REQUEST_TIMEOUT_MS").ok(),
            30000,
            1,
        )
        .map(Duration::from_millis)?;
        let jwt_secret = match std::env::var("FT_JWT_SECRET") {
            Ok(raw) => Some(decode_secret_key(&raw).context("Invalid FT_JWT_SECRET")?),
            Err(_) => None,
        };
        let token_ttl = parse_duration_var(
            "FT_TOKEN_TTL_MINUTES",
            std::env::var("FT_TOKEN_TTL_MINUTES").ok(),
            1440,
            60,
        )
        .map(Duration::from_secs)?;
        let log_format = std::env::var("FT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout,
            jwt_secret,
            token_ttl,
            log_format,
        })
    }
}

/// Parses a numeric duration variable and scales it by `unit`.
/// An unset variable yields `default`; a malformed or oversized one is an error.
fn parse_duration_var(
    name: &str,
    raw: Option<String>,
    default: u64,
    unit: u64,
) -> anyhow::Result<u64> {
    let value = match raw {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid {name}: {raw:?}"))?,
        None => default,
    };
    value
        .checked_mul(unit)
        .with_context(|| format!("{name} is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_duration_uses_default() {
        let ttl = parse_duration_var("FT_TOKEN_TTL_MINUTES", None, 1440, 60).unwrap();
        assert_eq!(ttl, 86400);
        let timeout = parse_duration_var("FT_REQUEST_TIMEOUT_MS", None, 30000, 1).unwrap();
        assert_eq!(timeout, 30000);
    }

    #[test]
    fn test_duration_is_parsed_and_scaled() {
        let raw = Some(" 15 ".to_string());
        let ttl = parse_duration_var("FT_TOKEN_TTL_MINUTES", raw, 1440, 60).unwrap();
        assert_eq!(ttl, 900);
    }

    #[test]
    fn test_malformed_duration_is_an_error() {
        for raw in ["abc", "-5", "1.5", ""] {
            let err = parse_duration_var("FT_REQUEST_TIMEOUT_MS", Some(raw.to_string()), 30000, 1)
                .unwrap_err();
            assert!(err.to_string().contains("Invalid FT_REQUEST_TIMEOUT_MS"), "{raw}");
        }
    }

    #[test]
    fn test_oversized_duration_is_an_error() {
        let raw = Some(u64::MAX.to_string());
        let err = parse_duration_var("FT_TOKEN_TTL_MINUTES", raw, 1440, 60).unwrap_err();
        assert_eq!(err.to_string(), "FT_TOKEN_TTL_MINUTES is too large");
    }
}
