use crate::config::env::{self, EnvKey};
use thiserror::Error;
use url::Url;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_DETAIL_BASE_URL: &str = "https://www.themoviedb.org/movie";
pub const DEFAULT_CERTIFICATION_COUNTRY: &str = "US";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    Missing(&'static str),
    #[error("invalid url in {key}: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub image_base_url: String,
    pub detail_base_url: String,
    /// Country that scopes the certification filter. `None` sends the
    /// certification on its own.
    pub certification_country: Option<String>,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(env::process)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(EnvKey) -> Option<String>,
    {
        let tmdb_api_key = lookup(EnvKey::TmdbApiKey)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing(EnvKey::TmdbApiKey.as_str()))?;

        let certification_country = env::get_or(
            &lookup,
            EnvKey::CertificationCountry,
            DEFAULT_CERTIFICATION_COUNTRY,
        );
        let certification_country = Some(certification_country.trim().to_string())
            .filter(|country| !country.is_empty());

        Ok(Self {
            server_port: env::get_parsed(&lookup, EnvKey::ServerPort, 3000),
            tmdb_api_key,
            tmdb_base_url: base_url(&lookup, EnvKey::TmdbBaseUrl, DEFAULT_TMDB_BASE_URL)?,
            image_base_url: base_url(&lookup, EnvKey::TmdbImageBaseUrl, DEFAULT_IMAGE_BASE_URL)?,
            detail_base_url: base_url(
                &lookup,
                EnvKey::TmdbDetailBaseUrl,
                DEFAULT_DETAIL_BASE_URL,
            )?,
            certification_country,
        })
    }
}

// Validated, stored without a trailing slash so paths can be appended.
fn base_url<F>(lookup: &F, key: EnvKey, default: &str) -> Result<String, ConfigError>
where
    F: Fn(EnvKey) -> Option<String>,
{
    let raw = env::get_or(lookup, key, default);
    let raw = raw.trim();
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        key: key.as_str(),
        source,
    })?;
    Ok(raw.trim_end_matches('/').to_string())
}
