use crate::config::settings::AppConfig;
use crate::infrastructure::tmdb::TmdbClient;
use crate::modules::movie::model::MovieLinks;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub tmdb: TmdbClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let tmdb = TmdbClient::new(&config.tmdb_base_url, &config.tmdb_api_key);
        Self { config, tmdb }
    }

    pub fn links(&self) -> MovieLinks {
        MovieLinks {
            image_base: self.config.image_base_url.clone(),
            detail_base: self.config.detail_base_url.clone(),
        }
    }
}
