use actix_web::{web, Scope};

use super::recommend_movies;

pub fn chatbot_source() -> Scope {
    web::scope("/chatbot").route("/recommend", web::post().to(recommend_movies))
}
