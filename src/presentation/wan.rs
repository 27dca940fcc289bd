use crate::presentation::serialization::lenient_int;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Traffic counters for one direction of the WAN link
///
/// Only `bandwidth` is mandatory; some firmware omits the other counters,
/// which then read as 0.
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WanStats {
    /// Packets transferred
    #[serde(default, with = "lenient_int")]
    pub packets: u64,
    /// Bytes transferred
    #[serde(default, with = "lenient_int")]
    pub bytes: u64,
    /// Packets in error
    #[serde(default, with = "lenient_int")]
    pub packetserrors: u64,
    /// Packets discarded
    #[serde(default, with = "lenient_int")]
    pub packetsdiscards: u64,
    /// Link occupation in percent
    #[serde(default, with = "lenient_int")]
    pub occupation: u64,
    /// Current bandwidth, in kbit/s
    #[serde(with = "lenient_int")]
    pub bandwidth: u64,
    /// Maximum bandwidth observed, in kbit/s
    #[serde(rename = "maxBandwidth", default, with = "lenient_int")]
    pub max_bandwidth: u64,
    /// Contractual bandwidth, in kbit/s
    #[serde(rename = "contractualBandwidth", default, with = "lenient_int")]
    pub contractual_bandwidth: u64,
}

impl WanStats {
    /// Current bandwidth as a fraction of the contractual one, if known
    #[must_use]
    pub fn usage_ratio(&self) -> Option<f64> {
        (self.contractual_bandwidth > 0)
            .then(|| self.bandwidth as f64 / self.contractual_bandwidth as f64)
    }
}

/// WAN IP statistics returned by `/wan/ip/stats`
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WanIpStats {
    /// Download direction
    pub rx: WanStats,
    /// Upload direction
    pub tx: WanStats,
}
