pub mod authentication;
pub mod catalog;
pub mod configuration;
pub mod error;
pub mod openapi;
pub mod recommendation;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod util;
