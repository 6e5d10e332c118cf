use actix_web::{web, Scope};

use super::{user_login, user_logout};

pub fn auth_source() -> Scope {
    web::scope("/auth")
        .route("/login", web::post().to(user_login))
        .route("/logout", web::post().to(user_logout))
}
