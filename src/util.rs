use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ResponseMessage {
    pub message: String,
}

/// Body of every non-2xx response.
#[derive(Serialize, ToSchema, Debug)]
pub struct ErrorResponse {
    /// Machine-readable code, e.g. `MOVIE_NOT_FOUND`.
    pub error: String,
    pub message: String,
    /// Per-field validation failures; only present on 422.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}
