use super::dto::LanguageResponse;
use crate::infrastructure::tmdb::types::LanguageRecord;
use crate::state::AppState;
use anyhow::{Result, anyhow};
use serde_json::Value;

pub struct LanguageService;

impl LanguageService {
    pub async fn list(state: AppState) -> Result<Vec<LanguageResponse>> {
        let data = state.tmdb.languages().await?;
        reshape(data)
    }
}

/// Accepts only a JSON list of `{iso_639_1, english_name}` records.
pub fn reshape(data: Value) -> Result<Vec<LanguageResponse>> {
    if !data.is_array() {
        return Err(anyhow!("Language list is not an array"));
    }
    let records: Vec<LanguageRecord> = serde_json::from_value(data)?;
    Ok(records.into_iter().map(LanguageResponse::from).collect())
}
