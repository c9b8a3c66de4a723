use super::error::TmdbError;
use super::types::{DiscoverResponse, MovieRecord};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const DISCOVER_PATH: &str = "/discover/movie";
const LANGUAGES_PATH: &str = "/configuration/languages";

/// Thin wrapper over the TMDB REST API. Cheap to clone; the inner
/// `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        extra_params: &[(&'static str, String)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{}", self.base_url, path);
        let mut params: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
        params.extend(extra_params.iter().map(|(k, v)| (*k, v.as_str())));

        let resp = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                warn!(path, error = %e, "TMDB request failed");
                TmdbError::Unreachable(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(path, %status, "TMDB returned an error status");
            return Err(TmdbError::Status(status));
        }

        let body = resp.bytes().await.map_err(TmdbError::Unreachable)?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(path, error = %e, "TMDB response could not be parsed");
            TmdbError::Malformed(e)
        })
    }

    /// Runs one discovery query and returns the first result page.
    pub async fn discover_movies(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<Vec<MovieRecord>, TmdbError> {
        debug!(?params, "TMDB discover");
        let resp: DiscoverResponse = self.get(DISCOVER_PATH, params).await?;
        let raw = resp.results.unwrap_or_default();
        let total = raw.len();
        let records: Vec<MovieRecord> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable TMDB record");
                    None
                }
            })
            .collect();
        debug!(total, usable = records.len(), "TMDB discover returned");
        Ok(records)
    }

    /// Supported languages, left as raw JSON so the caller can decide
    /// what counts as a usable shape.
    pub async fn languages(&self) -> Result<serde_json::Value, TmdbError> {
        self.get(LANGUAGES_PATH, &[]).await
    }
}
