use crate::authentication::StubAuthenticator;
use crate::catalog::CatalogSource;
use crate::configuration::Settings;
use crate::error::ApiError;
use crate::openapi::{swagger_ui, ApiDoc};
use crate::routes::{
    auth_source, chatbot_source, handler, health_check, movie_source, PosterUrlBuilder,
};

use actix_web::{
    dev::Server,
    error::{JsonPayloadError, PathError},
    web::{self, Data},
    App, HttpRequest, HttpServer,
};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;

use actix_cors::Cors;

fn configure_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default();
    for origin in allowed_origins {
        cors = if origin == "*" {
            cors.allow_any_origin()
        } else {
            cors.allowed_origin(origin)
        };
    }
    cors.allow_any_method()
        .allow_any_header()
        .max_age(3600)
        .supports_credentials()
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::MalformedRequest(err.to_string()).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::MalformedRequest(err.to_string()).into()
}

pub fn run_server(
    listener: TcpListener,
    settings: &Settings,
    catalog: Arc<dyn CatalogSource>,
) -> Result<Server, std::io::Error> {
    let catalog: Data<dyn CatalogSource> = Data::from(catalog);
    let authenticator = Data::new(StubAuthenticator::new(settings.auth.clone()));
    let posters = Data::new(PosterUrlBuilder::new(
        settings.catalog.image_base_url.clone(),
    ));
    let allowed_origins = settings.cors.allowed_origins.clone();
    let openapi = ApiDoc::openapi();

    let server: Server = HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);
        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(catalog.clone())
            .app_data(authenticator.clone())
            .app_data(posters.clone())
            .service(auth_source())
            .service(movie_source())
            .service(chatbot_source())
            .service(swagger_ui(openapi.clone()))
            .route("/", web::get().to(handler))
            .route("/health", web::get().to(health_check))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
