/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Maps a `LOGLEVEL` value to a tracing level, INFO when unknown
#[must_use]
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global tracing subscriber
///
/// The level comes from the `LOGLEVEL` environment variable (default INFO).
/// Safe to call many times; only the first call has an effect. If another
/// subscriber is already installed it is left in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string()));

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}
