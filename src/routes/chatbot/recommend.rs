use actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use tracing::Instrument;
use validator::Validate;

use super::{FiltersApplied, RecommendRequest, RecommendResponse};
use crate::catalog::CatalogSource;
use crate::error::ApiError;
use crate::recommendation::{recommend, RecommendationQuery};
use crate::routes::{load_catalog, MovieRecommendation, PosterUrlBuilder};

#[utoipa::path(
    post,
    path = "/chatbot/recommend",
    tag = "chatbot",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Ranked recommendations", body = RecommendResponse),
        (status = 404, description = "No movie matches the filters", body = crate::util::ErrorResponse),
        (status = 422, description = "Runtime out of range or too many genres", body = crate::util::ErrorResponse)
    )
)]
pub async fn recommend_movies(
    body: Json<RecommendRequest>,
    catalog: Data<dyn CatalogSource>,
    posters: Data<PosterUrlBuilder>,
) -> Result<HttpResponse, ApiError> {
    let query_span = tracing::info_span!("Handle movie recommendation", ?body);

    body.validate()?;
    let query = RecommendationQuery::from(body.into_inner());

    let movies = load_catalog(&catalog).instrument(query_span).await?;
    let recommendations = recommend(&query, &movies)?
        .into_iter()
        .map(|movie| MovieRecommendation::from_record(movie, &posters))
        .collect::<Vec<_>>();

    tracing::info!("Recommending {} movies", recommendations.len());
    Ok(HttpResponse::Ok().json(RecommendResponse {
        total: recommendations.len(),
        recommendations,
        filters_applied: FiltersApplied::from(query),
    }))
}
