use crate::infrastructure::tmdb::types::LanguageRecord;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LanguageResponse {
    pub code: String,
    pub name: String,
}

impl From<LanguageRecord> for LanguageResponse {
    fn from(l: LanguageRecord) -> Self {
        Self {
            code: l.iso_639_1,
            name: l.english_name,
        }
    }
}
