use crate::catalog::MovieRecord;

/// A single yes/no condition a movie must satisfy to be recommended.
pub trait MoviePredicate: Send + Sync {
    /// Returns the name of this predicate (for logging)
    fn name(&self) -> &str;

    fn matches(&self, movie: &MovieRecord) -> bool;
}

/// Keeps movies that fit in the available watch time. No lower bound.
pub struct RuntimeLimit {
    max_runtime: i64,
}

impl RuntimeLimit {
    pub fn new(max_runtime: i64) -> Self {
        Self { max_runtime }
    }
}

impl MoviePredicate for RuntimeLimit {
    fn name(&self) -> &str {
        "RuntimeLimit"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        movie.runtime <= self.max_runtime
    }
}

/// Drops adult titles unless the caller opted in.
pub struct AdultContent {
    include_adult: bool,
}

impl AdultContent {
    pub fn new(include_adult: bool) -> Self {
        Self { include_adult }
    }
}

impl MoviePredicate for AdultContent {
    fn name(&self) -> &str {
        "AdultContent"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        self.include_adult || !movie.adult
    }
}

/// Keeps movies sharing at least one genre id with the request.
/// An empty request list matches everything.
pub struct GenreOverlap {
    genre_ids: Vec<i64>,
}

impl GenreOverlap {
    pub fn new(genre_ids: Vec<i64>) -> Self {
        Self { genre_ids }
    }
}

impl MoviePredicate for GenreOverlap {
    fn name(&self) -> &str {
        "GenreOverlap"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        self.genre_ids.is_empty() || movie.has_any_genre(&self.genre_ids)
    }
}
