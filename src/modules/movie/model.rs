use crate::infrastructure::tmdb::TmdbError;
use crate::infrastructure::tmdb::types::MovieRecord;

pub const FALLBACK_MESSAGE: &str =
    "No movie found based on your selected filters. Here is a popular English movie instead.";
pub const NOT_FOUND_MESSAGE: &str = "No movies found, even in English!";

/// Base URLs used to turn record paths and ids into absolute links.
#[derive(Debug, Clone)]
pub struct MovieLinks {
    pub image_base: String,
    pub detail_base: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub title: String,
    pub release_year: String,
    pub rating: f64,
    pub poster_url: String,
    pub detail_url: String,
}

impl MovieSummary {
    pub fn from_record(record: &MovieRecord, links: &MovieLinks) -> Self {
        let poster_url = match record.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", links.image_base, path),
            _ => String::new(),
        };

        Self {
            title: record.title.clone().unwrap_or_default(),
            release_year: release_year(record.release_date.as_deref()),
            rating: record.vote_average.unwrap_or(0.0),
            poster_url,
            detail_url: format!("{}/{}", links.detail_base, record.id),
        }
    }
}

/// First four characters of a release date, or "N/A".
pub fn release_year(release_date: Option<&str>) -> String {
    match release_date.map(str::trim) {
        Some(date) if !date.is_empty() => date.chars().take(4).collect(),
        _ => "N/A".to_string(),
    }
}

/// Result of one suggestion request.
#[derive(Debug)]
pub enum MovieOutcome {
    Success(MovieSummary),
    Fallback(MovieSummary, &'static str),
    NotFound(&'static str),
    UpstreamError(TmdbError),
}
