// Common utilities for integration tests

use bbox_client::prelude::*;

/// Configuration read from the environment, `BBOX_PASSWORD` must be set
pub fn create_test_config() -> Config {
    setup_logger();
    let config = Config::new();
    assert!(
        !config.credentials.password.is_empty(),
        "BBOX_PASSWORD must be set to run integration tests"
    );
    config
}

/// Logged-in client for the router on the local network
pub async fn create_test_client() -> BboxClient {
    BboxClient::connect(create_test_config())
        .await
        .expect("Failed to login")
}
