use moviesir_backend::configuration::get_configuration;
use moviesir_backend::telemetry::LogFormat;

// Environment variables are process-wide, so this binary holds a single test.
#[test]
fn environment_overrides_file_settings() {
    std::env::set_var("MOVIESIR_APPLICATION__PORT", "9123");
    std::env::set_var("MOVIESIR_TELEMETRY__FORMAT", "json");

    let settings =
        get_configuration("test_configuration").expect("Failed to read configuration file");

    assert_eq!(settings.application.port, 9123);
    assert_eq!(settings.application.host, "127.0.0.1");
    assert_eq!(settings.application.address(), "127.0.0.1:9123");
    assert_eq!(settings.telemetry.format, LogFormat::Json);
    assert_eq!(settings.telemetry.level, "debug");
    assert_eq!(settings.auth.email, "test@test.com");
}
