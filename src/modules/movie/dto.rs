use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

use super::filters::FilterSet;
use super::model::{MovieOutcome, MovieSummary};

pub const DEFAULT_GENRE: &str = "comedy";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_SORT: &str = "popular";

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieQuery {
    /// Genre label such as `horror` or `science fiction`. Defaults to `comedy`;
    /// `any` or an unknown label searches all genres.
    pub genre: Option<String>,
    /// Age rating code, e.g. `PG-13`.
    pub certification: Option<String>,
    /// ISO 639-1 original language. Defaults to `en`; empty searches all languages.
    pub language: Option<String>,
    /// One of `popular`, `top_rated`, `newest`. Defaults to `popular`.
    pub sort_by: Option<String>,
}

impl MovieQuery {
    /// Builds the query from raw key/value pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "genre" => &mut query.genre,
                "certification" => &mut query.certification,
                "language" => &mut query.language,
                "sort_by" => &mut query.sort_by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn into_filters(self) -> FilterSet {
        FilterSet {
            genre: Some(self.genre.unwrap_or_else(|| DEFAULT_GENRE.to_string())),
            certification: self.certification,
            language: Some(self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())),
            sort_by: Some(self.sort_by.unwrap_or_else(|| DEFAULT_SORT.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MovieStatus {
    Success,
    Fallback,
    Error,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub status: MovieStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl MovieResponse {
    fn movie(status: MovieStatus, message: Option<String>, movie: MovieSummary) -> Self {
        Self {
            status,
            message,
            title: Some(movie.title),
            year: Some(movie.release_year),
            rating: Some(movie.rating),
            poster: Some(movie.poster_url),
            link: Some(movie.detail_url),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: MovieStatus::Error,
            message: Some(message.into()),
            title: None,
            year: None,
            rating: None,
            poster: None,
            link: None,
        }
    }
}

impl From<MovieOutcome> for MovieResponse {
    fn from(outcome: MovieOutcome) -> Self {
        match outcome {
            MovieOutcome::Success(movie) => Self::movie(MovieStatus::Success, None, movie),
            MovieOutcome::Fallback(movie, message) => {
                Self::movie(MovieStatus::Fallback, Some(message.to_string()), movie)
            }
            MovieOutcome::NotFound(message) => Self::error(message),
            MovieOutcome::UpstreamError(e) => Self::error(e.to_string()),
        }
    }
}
