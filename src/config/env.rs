use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKey {
    ServerPort,
    TmdbApiKey,
    TmdbBaseUrl,
    TmdbImageBaseUrl,
    TmdbDetailBaseUrl,
    CertificationCountry,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::TmdbApiKey => "TMDB_API_KEY",
            EnvKey::TmdbBaseUrl => "TMDB_BASE_URL",
            EnvKey::TmdbImageBaseUrl => "TMDB_IMAGE_BASE_URL",
            EnvKey::TmdbDetailBaseUrl => "TMDB_DETAIL_BASE_URL",
            EnvKey::CertificationCountry => "CERTIFICATION_COUNTRY",
        }
    }
}

/// Reads a key from the process environment.
pub fn process(key: EnvKey) -> Option<String> {
    std::env::var(key.as_str()).ok()
}

pub fn get_or<F>(lookup: &F, key: EnvKey, default: &str) -> String
where
    F: Fn(EnvKey) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

pub fn get_parsed<F, T>(lookup: &F, key: EnvKey, default: T) -> T
where
    F: Fn(EnvKey) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(val) => val.trim().parse::<T>().unwrap_or(default),
        None => default,
    }
}
