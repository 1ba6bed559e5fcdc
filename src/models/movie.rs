use serde::{Deserialize, Serialize};

/// One movie record returned by the TMDB discover endpoint.
///
/// Only the fields the recommendation flow needs are kept. Rating and
/// synopsis are frequently absent upstream, so both are optional and the
/// prompt formatting substitutes fixed sentinels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieCandidate {
    pub title: String,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Raw response body of GET /discover/movie.
///
/// A body without a `results` key deserializes to an empty list; zero
/// candidates is a valid terminal state, not an error.
#[derive(Debug, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub results: Vec<MovieCandidate>,
}
