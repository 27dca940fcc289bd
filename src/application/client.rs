/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the Bbox router API
//!
//! # Example
//! ```ignore
//! use bbox_client::prelude::*;
//!
//! let client = BboxClient::connect(Config::with_password("secret")).await?;
//! let router = client.get_router_info().await?;
//! println!("{} running {:?}", router.modelname, router.firmware_version());
//! client.close().await;
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::router::RouterService;
use crate::error::AppError;
use crate::model::auth::Credential;
use crate::model::requests::Endpoint;
use crate::model::responses::extract;
use crate::presentation::{HostList, RouterInfo, WanIpStats};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for one router
///
/// Every endpoint call reuses the session cookie obtained at login. Dropping
/// the client releases the underlying connection pool.
pub struct BboxClient {
    session: Session,
    config: Arc<Config>,
}

impl BboxClient {
    /// Creates a client without logging in
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - The base URL is not a valid http(s) URL
    pub fn new(config: Config) -> Result<Self, AppError> {
        let url = Url::parse(&config.rest_api.base_url).map_err(|e| {
            AppError::InvalidInput(format!("invalid base url {}: {e}", config.rest_api.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::InvalidInput(format!(
                "unsupported scheme {}",
                url.scheme()
            )));
        }

        let config = Arc::new(config);
        Ok(Self {
            session: Session::new(config.clone()),
            config,
        })
    }

    /// Creates a client and logs in
    ///
    /// # Returns
    /// * `Ok(BboxClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the configuration is invalid or login fails
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        client.login().await?;
        Ok(client)
    }

    /// Logs in with the configured password
    pub async fn login(&self) -> Result<Credential, AppError> {
        self.session.login().await
    }

    /// Logs in with an explicit password
    pub async fn login_with_password(&self, password: &str) -> Result<Credential, AppError> {
        self.session.login_with_password(password).await
    }

    /// Forgets the session cookie
    pub async fn logout(&self) {
        self.session.logout().await
    }

    /// Forgets the session cookie and releases the transport
    pub async fn close(&self) {
        self.session.close().await
    }

    /// True once logged in and until logout, close or session expiry
    pub async fn is_authenticated(&self) -> bool {
        self.session.is_authenticated().await
    }

    /// Underlying session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Configuration of this client
    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, AppError> {
        let value = self.session.request(endpoint, &[]).await?;
        extract(value, endpoint.envelope())
    }
}

#[async_trait]
impl RouterService for BboxClient {
    async fn get_router_info(&self) -> Result<RouterInfo, AppError> {
        let router: RouterInfo = self.fetch(Endpoint::Device).await?;
        debug!("Router information obtained: {}", router.modelname);
        Ok(router)
    }

    async fn get_hosts(&self) -> Result<HostList, AppError> {
        let hosts: HostList = self.fetch(Endpoint::Hosts).await?;
        debug!("Hosts obtained: {} hosts", hosts.len());
        Ok(hosts)
    }

    async fn get_wan_ip_stats(&self) -> Result<WanIpStats, AppError> {
        let stats: WanIpStats = self.fetch(Endpoint::WanIpStats).await?;
        debug!(
            "WAN stats obtained: rx {} kbit/s, tx {} kbit/s",
            stats.rx.bandwidth, stats.tx.bandwidth
        );
        Ok(stats)
    }
}

/// Runs `f` with a logged-in client and closes it afterwards
///
/// The client is closed whether `f` succeeds or fails. If the returned future
/// is dropped early, dropping the client releases the transport.
///
/// # Example
/// ```ignore
/// let hosts = with_client(Config::new(), |client| async move {
///     client.get_hosts().await
/// })
/// .await?;
/// ```
pub async fn with_client<F, Fut, T>(config: Config, f: F) -> Result<T, AppError>
where
    F: FnOnce(Arc<BboxClient>) -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let client = Arc::new(BboxClient::connect(config).await?);
    let result = f(client.clone()).await;
    client.close().await;
    info!("Client released");
    result
}
