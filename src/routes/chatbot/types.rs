use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::recommendation::RecommendationQuery;
use crate::routes::MovieRecommendation;

#[derive(Deserialize, Debug, Validate, ToSchema)]
pub struct RecommendRequest {
    /// Available watch time in minutes.
    #[schema(minimum = 30, maximum = 180)]
    #[validate(range(min = 30, max = 180, message = "runtime must be between 30 and 180 minutes"))]
    pub runtime: i64,
    #[serde(default)]
    #[schema(max_items = 3)]
    #[validate(length(max = 3, message = "at most 3 genres can be selected"))]
    pub genres: Vec<i64>,
    #[serde(default)]
    pub include_adult: bool,
}

impl From<RecommendRequest> for RecommendationQuery {
    fn from(request: RecommendRequest) -> Self {
        RecommendationQuery {
            runtime: request.runtime,
            genres: request.genres,
            include_adult: request.include_adult,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FiltersApplied {
    pub runtime: i64,
    pub genres: Vec<i64>,
    pub include_adult: bool,
}

impl From<RecommendationQuery> for FiltersApplied {
    fn from(query: RecommendationQuery) -> Self {
        FiltersApplied {
            runtime: query.runtime,
            genres: query.genres,
            include_adult: query.include_adult,
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct RecommendResponse {
    pub recommendations: Vec<MovieRecommendation>,
    pub total: usize,
    pub filters_applied: FiltersApplied,
}
