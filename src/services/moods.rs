//! Mood classification
//!
//! Maps a user-selected mood onto TMDB genre IDs. The table is fixed for the
//! process lifetime; genre IDs are opaque strings owned by TMDB's taxonomy.
//! Unrecognized moods deliberately fall back to Drama rather than failing.

/// Fallback genre list when a mood is not in the table (Drama).
pub const DEFAULT_GENRES: &[&str] = &["18"];

/// The canonical mood set offered by the client form, in display order.
pub const MOODS: &[&str] = &[
    "happy",
    "sad",
    "excited",
    "romantic",
    "scared",
    "curious",
    "fantasy",
    "mysterious",
    "inspired",
    "sci-fi",
];

/// Resolves a mood to its TMDB genre IDs.
///
/// Lookup is case-insensitive. Never fails and never returns an empty list.
pub fn resolve_categories(mood: &str) -> &'static [&'static str] {
    match mood.to_lowercase().as_str() {
        "happy" => &["35", "10751"],    // Comedy, Family
        "sad" => &["18"],               // Drama
        "excited" => &["28", "12"],     // Action, Adventure
        "romantic" => &["10749"],       // Romance
        "scared" => &["27", "53"],      // Horror, Thriller
        "curious" => &["99"],           // Documentary
        "fantasy" => &["14", "16"],     // Fantasy, Animation
        "mysterious" => &["9648"],      // Mystery
        "inspired" => &["36", "10402"], // History, Music
        "sci-fi" => &["878"],           // Science Fiction
        _ => DEFAULT_GENRES,
    }
}
