/// TMDB catalog provider
///
/// Issues the single filtered discover query that turns (mood, decade,
/// minimum rating, country) into a list of movie candidates. One synchronous
/// round trip per call; no retry, no caching, no degradation. A missing API
/// key is passed through as an empty `api_key` parameter and surfaces as the
/// upstream 401.
use crate::{
    error::{AppError, AppResult},
    models::{DiscoverResponse, MovieCandidate},
    observer::{observable_url, QueryObserver},
    services::moods,
};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;

const SORT_BY: &str = "popularity.desc";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for movie catalog backends
///
/// `discover` owns the whole query construction: it resolves the mood to
/// genre IDs, builds the decade date range, and normalizes the country code.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Searches the catalog for candidates matching the given filters.
    ///
    /// An empty result list is a valid outcome the caller must handle; it is
    /// never reported as an error.
    async fn discover(
        &self,
        mood: &str,
        decade: i32,
        min_rating: f64,
        country: &str,
    ) -> AppResult<Vec<MovieCandidate>>;
}

/// Release-date bounds for a decade, as TMDB expects them.
fn release_window(decade: i32) -> (String, String) {
    (
        format!("{:04}-01-01", decade),
        format!("{:04}-12-31", decade + 9),
    )
}

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    observer: Arc<dyn QueryObserver>,
}

impl TmdbProvider {
    pub fn new(api_key: Option<String>, api_url: String, observer: Arc<dyn QueryObserver>) -> Self {
        Self {
            http_client: HttpClient::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            api_url,
            observer,
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn discover(
        &self,
        mood: &str,
        decade: i32,
        min_rating: f64,
        country: &str,
    ) -> AppResult<Vec<MovieCandidate>> {
        let genre_filter = moods::resolve_categories(mood).join(",");
        let (start_date, end_date) = release_window(decade);
        // Debug formatting keeps the trailing .0 on whole-number ratings,
        // matching the query the upstream has always received.
        let min_rating_filter = format!("{:?}", min_rating);
        let region = country.to_uppercase();
        let url = format!("{}/discover/movie", self.api_url);

        let request = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_deref().unwrap_or("")),
                ("with_genres", genre_filter.as_str()),
                ("sort_by", SORT_BY),
                ("primary_release_date.gte", start_date.as_str()),
                ("primary_release_date.lte", end_date.as_str()),
                ("vote_average.gte", min_rating_filter.as_str()),
                ("region", region.as_str()),
            ])
            .build()
            .map_err(AppError::CatalogTransport)?;

        self.observer.on_request(&observable_url(request.url()));

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(AppError::CatalogTransport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::CatalogApi {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(AppError::CatalogTransport)?;
        self.observer.on_response(&body);

        let discover: DiscoverResponse =
            serde_json::from_str(&body).map_err(AppError::CatalogDecode)?;

        tracing::info!(
            mood = %mood,
            genres = %genre_filter,
            region = %region,
            results = discover.results.len(),
            provider = "tmdb",
            "Discover query completed"
        );

        Ok(discover.results)
    }
}
