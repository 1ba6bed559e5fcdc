/// Recommendation composer
///
/// Turns the candidate list and the user's mood into a single-turn prompt and
/// hands it to the text generator. The generated text is returned verbatim;
/// nothing here parses or re-ranks the model's output.
use crate::{error::AppResult, models::MovieCandidate, services::generation::TextGenerator};

/// At most this many candidates are formatted into the prompt, in the order
/// the catalog returned them.
const MAX_PROMPT_CANDIDATES: usize = 10;

/// Sentinel shown when a candidate has no rating.
const MISSING_RATING: &str = "N/A";

/// Placeholder shown when a candidate has no synopsis.
const MISSING_OVERVIEW: &str = "No description available.";

/// Builds the instruction block sent to the generation service.
pub fn build_prompt(mood: &str, candidates: &[MovieCandidate], count: u32) -> String {
    let movie_list = candidates
        .iter()
        .take(MAX_PROMPT_CANDIDATES)
        .map(|movie| {
            let rating = movie
                .vote_average
                .map(|r| r.to_string())
                .unwrap_or_else(|| MISSING_RATING.to_string());
            let overview = movie.overview.as_deref().unwrap_or(MISSING_OVERVIEW);
            format!("- {} (TMDB rating: {}): {}", movie.title, rating, overview)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "User mood: {mood}\n\
         Here are some movies fetched from TMDB that might fit this mood (with their TMDB ratings):\n\
         {movie_list}\n\n\
         Please recommend and describe {count} movies from this list that best fit the user's mood. \
         For each recommended movie, you must display the TMDB rating next to the movie title in your output. \
         Respond in a friendly, engaging way."
    )
}

/// Composes the final recommendation text for the given candidates.
pub async fn compose(
    generator: &dyn TextGenerator,
    mood: &str,
    candidates: &[MovieCandidate],
    count: u32,
) -> AppResult<String> {
    let prompt = build_prompt(mood, candidates, count);
    generator.generate(&prompt).await
}
