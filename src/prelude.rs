/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Bbox Client Prelude
//!
//! Imports the most commonly used types and traits in one go.
//!
//! ```rust
//! use bbox_client::prelude::*;
//!
//! let config = Config::with_password("secret");
//! let client = BboxClient::new(config).unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type, its classification and result alias
pub use crate::error::{AppError, BboxResult, ErrorKind};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// Router client and scoped helper
pub use crate::application::client::{BboxClient, with_client};

/// Session owning the transport and credential
pub use crate::application::auth::Session;

/// Session credential
pub use crate::model::auth::Credential;

/// Router endpoints
pub use crate::model::requests::Endpoint;

/// Router service trait
pub use crate::application::interfaces::router::RouterService;

// ============================================================================
// MODELS
// ============================================================================

/// Router information
pub use crate::presentation::router::{RouterDisplay, RouterInfo, RouterUsing, RouterVersion};

/// Hosts
pub use crate::presentation::host::{
    DeviceInfo, EthernetInfo, Host, HostList, Ip6Address, ParentalControl, PingInfo, PlcInfo,
    ScanInfo, WirelessByBand, WirelessInfo,
};

/// WAN statistics
pub use crate::presentation::wan::{WanIpStats, WanStats};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, FixedOffset, Utc};
