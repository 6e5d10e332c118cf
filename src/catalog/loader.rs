use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::MovieRecord;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not a valid movie array: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("movie id {0} appears more than once")]
    DuplicateMovieId(i64),
    #[error("movie {movie_id} has invalid {field}: {value}")]
    InvalidField {
        movie_id: i64,
        field: &'static str,
        value: i64,
    },
}

/// Source of the full movie catalog. Every call returns the complete record
/// set or fails; there is no partial load.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<MovieRecord>, CatalogError>;
}

/// Reads the catalog document from disk on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonFileCatalog {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        let bytes = std::fs::read(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        let movies = parse_catalog(&bytes)?;
        tracing::info!(
            "Loaded {} movies from {}",
            movies.len(),
            self.path.display()
        );
        Ok(movies)
    }
}

/// Catalog already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    movies: Vec<MovieRecord>,
}

impl InMemoryCatalog {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        InMemoryCatalog { movies }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        Ok(self.movies.clone())
    }
}

pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<MovieRecord>, CatalogError> {
    let movies: Vec<MovieRecord> = serde_json::from_slice(bytes)?;
    validate_catalog(&movies)?;
    Ok(movies)
}

fn validate_catalog(movies: &[MovieRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(movies.len());
    for movie in movies {
        if movie.movie_id <= 0 {
            return Err(CatalogError::InvalidField {
                movie_id: movie.movie_id,
                field: "movie_id",
                value: movie.movie_id,
            });
        }
        if movie.runtime <= 0 {
            return Err(CatalogError::InvalidField {
                movie_id: movie.movie_id,
                field: "runtime",
                value: movie.runtime,
            });
        }
        if !seen.insert(movie.movie_id) {
            return Err(CatalogError::DuplicateMovieId(movie.movie_id));
        }
    }
    Ok(())
}
