//! OpenAPI document for the HTTP surface, served through Swagger UI.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::authentication::{LoginSession, User, UserProfile};
use crate::catalog::Provider;
use crate::routes;
use crate::util::{ErrorResponse, ResponseMessage};

/// Where the Swagger UI is mounted. Advertised by `GET /`.
pub const DOCS_PATH: &str = "/docs/";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MovieSir API",
        description = "Movie lookup and rule-based recommendations over a static catalog",
    ),
    paths(
        routes::handler,
        routes::health_check,
        routes::user_login,
        routes::user_logout,
        routes::get_movie_info,
        routes::get_movie_tags,
        routes::recommend_movies,
    ),
    components(
        schemas(
            routes::LoginRequest,
            LoginSession,
            User,
            UserProfile,
            routes::MovieDetail,
            routes::MovieRecommendation,
            routes::MovieTagsResponse,
            Provider,
            routes::RecommendRequest,
            routes::RecommendResponse,
            routes::FiltersApplied,
            ResponseMessage,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and service info"),
        (name = "auth", description = "Stub login against the configured account"),
        (name = "movies", description = "Catalog lookups"),
        (name = "chatbot", description = "Recommendations"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at [`DOCS_PATH`] backed by the generated document at
/// [`OPENAPI_JSON_PATH`].
pub fn swagger_ui(openapi: utoipa::openapi::OpenApi) -> SwaggerUi {
    SwaggerUi::new("/docs/{_:.*}").url(OPENAPI_JSON_PATH, openapi)
}
