//! Maps user-facing filter labels onto discovery query parameters.
//!
//! Every input is sanitized to a safe value, so resolution cannot fail:
//! unknown genres drop the genre filter, unknown sort labels fall back to
//! popularity, and blank certification/language values omit their filter.

/// Genre label to TMDB genre id.
pub const GENRES: &[(&str, &str)] = &[
    ("action", "28"),
    ("adventure", "12"),
    ("animation", "16"),
    ("comedy", "35"),
    ("crime", "80"),
    ("documentary", "99"),
    ("drama", "18"),
    ("family", "10751"),
    ("fantasy", "14"),
    ("history", "36"),
    ("horror", "27"),
    ("music", "10402"),
    ("mystery", "9648"),
    ("romance", "10749"),
    ("science fiction", "878"),
    ("tv movie", "10770"),
    ("thriller", "53"),
    ("war", "10752"),
    ("western", "37"),
];

pub const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Popularity,
    Rating,
    ReleaseDate,
}

impl SortOrder {
    /// Unrecognized labels resolve to popularity.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "top_rated" => SortOrder::Rating,
            "newest" => SortOrder::ReleaseDate,
            _ => SortOrder::Popularity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "popularity.desc",
            SortOrder::Rating => "vote_average.desc",
            SortOrder::ReleaseDate => "release_date.desc",
        }
    }
}

/// Raw filter values as they arrive from a request. `None` and blank
/// strings are treated alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub genre: Option<String>,
    pub certification: Option<String>,
    pub language: Option<String>,
    pub sort_by: Option<String>,
}

/// Filters resolved into upstream terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverParams {
    pub genre_id: Option<&'static str>,
    pub certification: Option<String>,
    pub certification_country: Option<String>,
    pub original_language: Option<String>,
    pub sort_by: SortOrder,
}

pub fn genre_id(label: &str) -> Option<&'static str> {
    let label = label.trim().to_lowercase();
    GENRES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, id)| *id)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl DiscoverParams {
    pub fn resolve(filters: &FilterSet, certification_country: Option<&str>) -> Self {
        let certification = non_blank(filters.certification.as_deref());
        let certification_country = certification
            .as_ref()
            .and_then(|_| non_blank(certification_country));

        Self {
            genre_id: filters.genre.as_deref().and_then(genre_id),
            certification,
            certification_country,
            original_language: non_blank(filters.language.as_deref()),
            sort_by: filters
                .sort_by
                .as_deref()
                .map(SortOrder::from_label)
                .unwrap_or_default(),
        }
    }

    /// Relaxed query used when the primary one comes back empty.
    pub fn fallback() -> Self {
        Self {
            genre_id: None,
            certification: None,
            certification_country: None,
            original_language: Some(FALLBACK_LANGUAGE.to_string()),
            sort_by: SortOrder::Popularity,
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(5);
        if let Some(id) = self.genre_id {
            query.push(("with_genres", id.to_string()));
        }
        if let Some(country) = &self.certification_country {
            query.push(("certification_country", country.clone()));
        }
        if let Some(cert) = &self.certification {
            query.push(("certification", cert.clone()));
        }
        if let Some(lang) = &self.original_language {
            query.push(("with_original_language", lang.clone()));
        }
        query.push(("sort_by", self.sort_by.as_str().to_string()));
        query
    }
}
