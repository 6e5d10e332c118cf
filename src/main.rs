use dotenv::dotenv;
use moviesir_backend::catalog::{CatalogSource, JsonFileCatalog};
use moviesir_backend::configuration::get_configuration;
use moviesir_backend::startup;
use moviesir_backend::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let configuration = get_configuration("configuration").map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!(
                "Failed to read `configuration.json`. Please make sure it exists and is valid JSON: {}",
                err
            ),
        )
    })?;

    let telemetry = &configuration.telemetry;
    let subscriber = get_subscriber(
        "moviesir",
        &telemetry.level,
        telemetry.format,
        std::io::stdout,
    );
    init_subscriber(subscriber)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let catalog = JsonFileCatalog::new(&configuration.catalog.path);
    if let Err(err) = catalog.load() {
        tracing::warn!(
            "Catalog at {} is not loadable yet: {}",
            catalog.path().display(),
            err
        );
    }

    let address = configuration.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    startup::run_server(listener, &configuration, Arc::new(catalog))?.await
}
