use serde::Deserialize;
use serde_json::Value;

/// Raw page; records are parsed one by one so a single bad entry does
/// not sink the others. A missing or null `results` is an empty page.
#[derive(Debug, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

/// One entry of a discovery result page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageRecord {
    pub iso_639_1: String,
    pub english_name: String,
}
