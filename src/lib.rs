/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Bbox Client
//!
//! Asynchronous client for the local management API of Bbox routers.
//!
//! The client logs in with the router admin password, keeps the session
//! cookie, and maps the read-only endpoints to typed records:
//!
//! | Endpoint | Result |
//! |---|---|
//! | `GET /device` | [`RouterInfo`](presentation::RouterInfo) |
//! | `GET /hosts` | [`HostList`](presentation::HostList) |
//! | `GET /wan/ip/stats` | [`WanIpStats`](presentation::WanIpStats) |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bbox_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = BboxClient::connect(Config::with_password("secret")).await?;
//!
//! let router = client.get_router_info().await?;
//! let hosts = client.get_hosts().await?;
//! let wan = client.get_wan_ip_stats().await?;
//! info!(
//!     "{}: {} hosts, rx {} kbit/s",
//!     router.modelname,
//!     hosts.len(),
//!     wan.rx.bandwidth
//! );
//!
//! client.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads `BBOX_PASSWORD`,
//! `BBOX_BASE_URL` and `BBOX_TIMEOUT` from the environment or a `.env` file.
//! Logging goes through `tracing`; call
//! [`setup_logger`](utils::logger::setup_logger) to get output on stdout,
//! with the level taken from `LOGLEVEL`.

/// Client, session and configuration
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire-level models and HTTP helpers
pub mod model;
/// Commonly used types
pub mod prelude;
/// Typed records returned by the endpoints
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
