/// Recommendation flow
///
/// Linear composition of the two leaf services: discover candidates, then
/// compose the narrative. Strictly sequential; the generation call depends on
/// the catalog result, and an empty candidate list short-circuits before the
/// composer is ever touched.
use crate::{
    error::AppResult,
    services::{catalog::CatalogProvider, composer, generation::TextGenerator},
};

/// Filter inputs for one recommendation cycle.
#[derive(Debug, Clone)]
pub struct RecommendationQuery {
    pub mood: String,
    pub decade: i32,
    pub min_rating: f64,
    pub country: String,
    pub count: u32,
}

/// Terminal states of a recommendation cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The catalog matched nothing; the caller should suggest loosening the
    /// filters. Not an error.
    NoMatches,
    /// The composed recommendation text, verbatim from the generator.
    Recommendation(String),
}

pub async fn run_recommendation(
    catalog: &dyn CatalogProvider,
    generator: &dyn TextGenerator,
    query: &RecommendationQuery,
) -> AppResult<Outcome> {
    let candidates = catalog
        .discover(&query.mood, query.decade, query.min_rating, &query.country)
        .await?;

    if candidates.is_empty() {
        tracing::info!(mood = %query.mood, "Discover query matched no candidates");
        return Ok(Outcome::NoMatches);
    }

    let text = composer::compose(generator, &query.mood, &candidates, query.count).await?;
    Ok(Outcome::Recommendation(text))
}
