use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use tracing::Instrument;

use super::{load_catalog, MovieDetail, PosterUrlBuilder};
use crate::catalog::{find_by_id, CatalogSource};
use crate::error::ApiError;

#[utoipa::path(
    get,
    path = "/movies/{movie_id}",
    tag = "movies",
    params(("movie_id" = i64, Path, description = "Catalog movie id")),
    responses(
        (status = 200, description = "Movie detail", body = MovieDetail),
        (status = 404, description = "No movie with this id", body = crate::util::ErrorResponse)
    )
)]
pub async fn get_movie_info(
    path: Path<i64>,
    catalog: Data<dyn CatalogSource>,
    posters: Data<PosterUrlBuilder>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = path.into_inner();
    let query_span = tracing::info_span!("Get movie info", movie_id);

    let movies = load_catalog(&catalog).instrument(query_span).await?;
    let movie = find_by_id(&movies, movie_id).ok_or(ApiError::MovieNotFound(movie_id))?;
    tracing::info!("Sending movie {} info", movie.movie_id);
    Ok(HttpResponse::Ok().json(MovieDetail::from_record(movie, &posters)))
}
