//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ______      ___
   / ____/___  / (_)___
  / /_  / __ \/ / / __ \
 / __/ / /_/ / / / /_/ /
/_/    \____/_/_/\____/

      Book Catalog API
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(rest_port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:   http://0.0.0.0:{}/api", rest_port);
    info!("Health:     http://0.0.0.0:{}/health", rest_port);
    info!("Swagger UI: http://0.0.0.0:{}/swagger-ui", rest_port);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(8080);
    }
}
