// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

use crate::domain::chapter::{
    ChapterPolicy, DEFAULT_AGGREGATE_CATALOG_ID, DEFAULT_EXCLUDED_CATALOG_IDS, DEFAULT_PAGE_SIZE,
};
use crate::presentation::http::middleware::rate_limit::RateLimitSettings;
use crate::presentation::http::routes::RouterOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://ant.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:5066".into()
}

fn default_api_base_url() -> String {
    "http://localhost:5066/".into()
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got '{raw}'")))
}

fn parse_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|part| !part.is_empty())
}

fn parse_bool(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

/// Server settings. Built from the process environment by [`AppConfig::from_env`]
/// or from any key lookup by [`AppConfig::from_lookup`].
#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
    chapter_policy: ChapterPolicy,
    rate_limit: Option<RateLimitSettings>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| parse_list(&raw).map(str::to_string).collect())
            .unwrap_or_default();

        let aggregate_catalog_id = lookup("CHAPTER_AGGREGATE_CATALOG_ID")
            .map(|raw| parse_number::<i64>("CHAPTER_AGGREGATE_CATALOG_ID", &raw))
            .transpose()?
            .unwrap_or(DEFAULT_AGGREGATE_CATALOG_ID);

        let excluded_catalog_ids = match lookup("CHAPTER_EXCLUDED_CATALOG_IDS") {
            Some(raw) => parse_list(&raw)
                .map(|part| parse_number::<i64>("CHAPTER_EXCLUDED_CATALOG_IDS", part))
                .collect::<Result<Vec<_>, _>>()?,
            None => DEFAULT_EXCLUDED_CATALOG_IDS.to_vec(),
        };

        let default_page_size = lookup("CHAPTER_DEFAULT_PAGE_SIZE")
            .map(|raw| parse_number::<u32>("CHAPTER_DEFAULT_PAGE_SIZE", &raw))
            .transpose()?
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let chapter_policy =
            ChapterPolicy::new(aggregate_catalog_id, &excluded_catalog_ids, default_page_size)
                .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED").is_some_and(|raw| parse_bool(&raw));
        let rate_limit = if rate_limit_enabled {
            let defaults = RateLimitSettings::default();
            Some(RateLimitSettings {
                per_second: lookup("RATE_LIMIT_PER_SECOND")
                    .map(|raw| parse_number("RATE_LIMIT_PER_SECOND", &raw))
                    .transpose()?
                    .unwrap_or(defaults.per_second),
                burst_size: lookup("RATE_LIMIT_BURST")
                    .map(|raw| parse_number("RATE_LIMIT_BURST", &raw))
                    .transpose()?
                    .unwrap_or(defaults.burst_size),
            })
        } else {
            None
        };

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            chapter_policy,
            rate_limit,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn chapter_policy(&self) -> &ChapterPolicy {
        &self.chapter_policy
    }

    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            allowed_origins: self.allowed_origins.clone(),
            rate_limit: self.rate_limit,
        }
    }
}

/// Settings for the headless sync client.
#[derive(Clone, Debug)]
pub struct SyncConfig {
    api_base_url: String,
    cache_database_url: String,
    http_timeout: Duration,
}

impl SyncConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("SYNC_API_BASE_URL").unwrap_or_else(default_api_base_url);
        let cache_database_url = lookup("SYNC_CACHE_DATABASE_URL")
            .unwrap_or_else(|| "sqlite://ant_cache.db?mode=rwc".into());
        let timeout_secs = lookup("SYNC_HTTP_TIMEOUT_SECS")
            .map(|raw| parse_number::<u64>("SYNC_HTTP_TIMEOUT_SECS", &raw))
            .transpose()?
            .unwrap_or(30);
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "SYNC_HTTP_TIMEOUT_SECS must be positive".into(),
            ));
        }

        Ok(Self {
            api_base_url,
            cache_database_url,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn cache_database_url(&self) -> &str {
        &self.cache_database_url
    }

    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }
}

/// Settings for the replay tool.
#[derive(Clone, Debug)]
pub struct ReplayConfig {
    data_dir: String,
    api_base_url: String,
}

impl ReplayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("REPLAY_DATA_DIR").unwrap_or_else(|| "./ParsedData".into());
        let api_base_url = lookup("REPLAY_API_BASE_URL").unwrap_or_else(default_api_base_url);
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "REPLAY_API_BASE_URL must be an http(s) URL, got '{api_base_url}'"
            )));
        }
        Ok(Self {
            data_dir,
            api_base_url,
        })
    }

    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
