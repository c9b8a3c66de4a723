use super::filters::{DiscoverParams, FilterSet};
use super::model::{FALLBACK_MESSAGE, MovieLinks, MovieOutcome, MovieSummary, NOT_FOUND_MESSAGE};
use crate::infrastructure::tmdb::TmdbClient;
use crate::infrastructure::tmdb::types::MovieRecord;
use crate::state::AppState;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

pub struct MovieService;

impl MovieService {
    pub async fn suggest(state: AppState, filters: FilterSet) -> MovieOutcome {
        let params = DiscoverParams::resolve(&filters, state.config.certification_country.as_deref());
        let links = state.links();
        Self::suggest_with(&state.tmdb, &params, &links).await
    }

    /// Primary query, then at most one relaxed re-query if it came back empty.
    pub async fn suggest_with(
        tmdb: &TmdbClient,
        params: &DiscoverParams,
        links: &MovieLinks,
    ) -> MovieOutcome {
        debug!(?params, "Resolved movie filters");

        let results = match tmdb.discover_movies(&params.to_query()).await {
            Ok(results) => results,
            Err(e) => return MovieOutcome::UpstreamError(e),
        };
        if let Some(movie) = pick(&results, links) {
            return MovieOutcome::Success(movie);
        }

        info!("No movies matched the filters, trying popular English movies");
        let fallback = match tmdb.discover_movies(&DiscoverParams::fallback().to_query()).await {
            Ok(results) => results,
            Err(e) => return MovieOutcome::UpstreamError(e),
        };
        match pick(&fallback, links) {
            Some(movie) => MovieOutcome::Fallback(movie, FALLBACK_MESSAGE),
            None => MovieOutcome::NotFound(NOT_FOUND_MESSAGE),
        }
    }
}

fn pick(records: &[MovieRecord], links: &MovieLinks) -> Option<MovieSummary> {
    pick_with(records, links, &mut rand::rng())
}

/// Uniform choice over `records`.
pub fn pick_with<R: Rng + ?Sized>(
    records: &[MovieRecord],
    links: &MovieLinks,
    rng: &mut R,
) -> Option<MovieSummary> {
    records
        .choose(rng)
        .map(|record| MovieSummary::from_record(record, links))
}
