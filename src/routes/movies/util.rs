use actix_web::{
    web::{self, Data},
    Scope,
};

use crate::catalog::{CatalogSource, MovieRecord};
use crate::error::ApiError;

use super::{get_movie_info, get_movie_tags};

pub fn movie_source() -> Scope {
    web::scope("/movies")
        .route("/{movie_id}", web::get().to(get_movie_info))
        .route("/{movie_id}/tags", web::get().to(get_movie_tags))
}

/// Loads the whole catalog on the blocking pool.
pub async fn load_catalog(catalog: &Data<dyn CatalogSource>) -> Result<Vec<MovieRecord>, ApiError> {
    let source = catalog.clone().into_inner();
    let result = web::block(move || source.load())
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(result?)
}
