use super::{AdultContent, GenreOverlap, MoviePredicate, RuntimeLimit};
use crate::catalog::MovieRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub runtime: i64,
    pub genres: Vec<i64>,
    pub include_adult: bool,
}

impl RecommendationQuery {
    pub fn predicates(&self) -> Vec<Box<dyn MoviePredicate>> {
        vec![
            Box::new(RuntimeLimit::new(self.runtime)),
            Box::new(AdultContent::new(self.include_adult)),
            Box::new(GenreOverlap::new(self.genres.clone())),
        ]
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecommendError {
    #[error("no movies match the requested filters")]
    NoRecommendations,
}

/// Filters `catalog` with every predicate of `query` and ranks the survivors
/// by `vote_average`, highest first. Equal scores keep catalog order.
pub fn recommend<'a>(
    query: &RecommendationQuery,
    catalog: &'a [MovieRecord],
) -> Result<Vec<&'a MovieRecord>, RecommendError> {
    let predicates = query.predicates();

    let mut selected: Vec<&MovieRecord> = catalog
        .iter()
        .filter(|movie| {
            predicates.iter().all(|predicate| {
                let keep = predicate.matches(movie);
                if !keep {
                    tracing::debug!(
                        "movie {} rejected by {}",
                        movie.movie_id,
                        predicate.name()
                    );
                }
                keep
            })
        })
        .collect();

    // slice::sort_by is stable
    selected.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average));

    tracing::info!(
        "{} of {} movies matched {:?}",
        selected.len(),
        catalog.len(),
        query
    );

    if selected.is_empty() {
        return Err(RecommendError::NoRecommendations);
    }
    Ok(selected)
}
