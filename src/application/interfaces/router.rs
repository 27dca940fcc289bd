use crate::error::AppError;
use crate::presentation::{HostList, RouterInfo, WanIpStats};
use async_trait::async_trait;

/// Interface for the read-only router endpoints
#[async_trait]
pub trait RouterService: Send + Sync {
    /// Gets router information from `/device`
    async fn get_router_info(&self) -> Result<RouterInfo, AppError>;

    /// Gets the hosts known to the router from `/hosts`
    async fn get_hosts(&self) -> Result<HostList, AppError>;

    /// Gets WAN IP traffic statistics from `/wan/ip/stats`
    async fn get_wan_ip_stats(&self) -> Result<WanIpStats, AppError>;
}
