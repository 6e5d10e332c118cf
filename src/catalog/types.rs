use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Provider {
    pub provider_id: i64,
    pub provider_name: String,
}

/// One movie as stored in the static catalog document.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub movie_id: i64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    #[serde(default)]
    pub poster_path: String,
    pub runtime: i64,
    pub release_date: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub vote_average: f64,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub providers: Vec<Provider>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MovieRecord {
    pub fn has_any_genre(&self, genre_ids: &[i64]) -> bool {
        self.genres.iter().any(|genre| genre_ids.contains(&genre.id))
    }

    pub fn genre_names(&self) -> Vec<String> {
        self.genres.iter().map(|genre| genre.name.clone()).collect()
    }
}
