use actix_web::HttpResponse;

use crate::util::ResponseMessage;

// No session exists to clear.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses((status = 200, description = "Logged out", body = ResponseMessage))
)]
pub async fn user_logout() -> HttpResponse {
    tracing::info!("User logged out");
    HttpResponse::Ok().json(ResponseMessage {
        message: "Logged out successfully.".to_string(),
    })
}
