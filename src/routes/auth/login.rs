use actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use serde::Deserialize;
use tracing::Instrument;
use utoipa::ToSchema;

use crate::authentication::StubAuthenticator;
use crate::error::ApiError;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = crate::authentication::LoginSession),
        (status = 400, description = "Email or password does not match", body = crate::util::ErrorResponse)
    )
)]
pub async fn user_login(
    body: Json<LoginRequest>,
    authenticator: Data<StubAuthenticator>,
) -> Result<HttpResponse, ApiError> {
    let login_span = tracing::info_span!("Handle User Login", email = %body.email);

    async move {
        let session = authenticator
            .authenticate(&body.email, &body.password)
            .ok_or(ApiError::InvalidCredentials)?;
        tracing::info!("successful Login");
        Ok(HttpResponse::Ok().json(session))
    }
    .instrument(login_span)
    .await
}
