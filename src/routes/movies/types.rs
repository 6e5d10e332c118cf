use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::{MovieRecord, Provider};

/// Turns a catalog `poster_path` into a displayable URL.
#[derive(Debug, Clone)]
pub struct PosterUrlBuilder {
    base_url: String,
}

impl PosterUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        PosterUrlBuilder {
            base_url: base_url.into(),
        }
    }

    // An empty path still yields the bare base URL.
    pub fn build(&self, poster_path: &str) -> String {
        format!("{}{}", self.base_url, poster_path)
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub movie_id: i64,
    pub title: String,
    pub original_title: String,
    pub poster_url: String,
    pub overview: String,
    pub runtime: i64,
    pub release_date: String,
    pub genres: Vec<String>,
    pub vote_average: f64,
    pub providers: Vec<Provider>,
}

impl MovieDetail {
    pub fn from_record(movie: &MovieRecord, posters: &PosterUrlBuilder) -> Self {
        MovieDetail {
            movie_id: movie.movie_id,
            title: movie.title.clone(),
            original_title: movie.original_title.clone(),
            poster_url: posters.build(&movie.poster_path),
            overview: movie.overview.clone(),
            runtime: movie.runtime,
            release_date: movie.release_date.clone(),
            genres: movie.genre_names(),
            vote_average: movie.vote_average,
            providers: movie.providers.clone(),
        }
    }
}

/// Summary of one movie inside a recommendation response.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MovieRecommendation {
    pub movie_id: i64,
    pub title: String,
    pub runtime: i64,
    pub genres: Vec<String>,
    pub poster_url: String,
    pub vote_average: f64,
    pub overview: String,
}

impl MovieRecommendation {
    pub fn from_record(movie: &MovieRecord, posters: &PosterUrlBuilder) -> Self {
        MovieRecommendation {
            movie_id: movie.movie_id,
            title: movie.title.clone(),
            runtime: movie.runtime,
            genres: movie.genre_names(),
            poster_url: posters.build(&movie.poster_path),
            vote_average: movie.vote_average,
            overview: movie.overview.clone(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MovieTagsResponse {
    pub movie_id: i64,
    pub title: String,
    pub tags: Vec<String>,
}

impl From<&MovieRecord> for MovieTagsResponse {
    fn from(movie: &MovieRecord) -> Self {
        MovieTagsResponse {
            movie_id: movie.movie_id,
            title: movie.title.clone(),
            tags: movie.tags.clone(),
        }
    }
}
