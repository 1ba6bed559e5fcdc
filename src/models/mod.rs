mod movie;

pub use movie::{DiscoverResponse, MovieCandidate};
