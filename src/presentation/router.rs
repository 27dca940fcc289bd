use crate::presentation::serialization::{
    empty_string_as_none, flexible_datetime, flexible_datetime_opt, lenient_bool,
    lenient_bool_opt, lenient_int, lenient_string,
};
use chrono::{DateTime, FixedOffset};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Front panel display settings
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterDisplay {
    /// Display luminosity level
    #[serde(with = "lenient_int")]
    pub luminosity: i64,
    /// Luminosity of the attached extender, in percent
    #[serde(with = "lenient_int")]
    pub luminosity_extender: i64,
    /// Text currently shown on the display
    #[serde(with = "lenient_string")]
    pub state: String,
}

/// Version and build date of one firmware slot
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RouterVersion {
    /// Version string, `None` when the slot is empty
    #[serde(default, with = "empty_string_as_none")]
    pub version: Option<String>,
    /// Build date
    #[serde(default, with = "flexible_datetime_opt")]
    pub date: Option<DateTime<FixedOffset>>,
}

/// Access technologies currently in use
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterUsing {
    /// IPv4 connectivity
    #[serde(with = "lenient_bool")]
    pub ipv4: bool,
    /// IPv6 connectivity
    #[serde(with = "lenient_bool")]
    pub ipv6: bool,
    /// Fiber access
    #[serde(with = "lenient_bool")]
    pub ftth: bool,
    /// ADSL access
    #[serde(with = "lenient_bool")]
    pub adsl: bool,
    /// VDSL access
    #[serde(with = "lenient_bool")]
    pub vdsl: bool,
}

/// Router information returned by `/device`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterInfo {
    /// Router clock at the time of the request
    #[serde(with = "flexible_datetime")]
    pub now: DateTime<FixedOffset>,
    /// Device status, 1 when up
    #[serde(with = "lenient_int")]
    pub status: i64,
    /// Number of boots since first use
    #[serde(with = "lenient_int")]
    pub numberofboots: u64,
    /// Commercial model name
    #[serde(with = "lenient_string")]
    pub modelname: String,
    /// Hardware class
    #[serde(with = "lenient_string")]
    pub modelclass: String,
    /// Whether the automatic line optimisation is enabled
    #[serde(with = "lenient_bool")]
    pub optimisation: bool,
    /// Whether the first-run setup was completed
    #[serde(with = "lenient_bool")]
    pub user_configured: bool,
    /// Serial number
    #[serde(with = "lenient_string")]
    pub serialnumber: String,
    /// Front panel display
    #[serde(default)]
    pub display: Option<RouterDisplay>,
    /// Main firmware slot
    pub main: RouterVersion,
    /// Recovery firmware slot
    pub reco: RouterVersion,
    /// Firmware currently running
    pub running: RouterVersion,
    /// SPL bootloader
    pub spl: RouterVersion,
    /// TPL bootloader
    pub tpl: RouterVersion,
    /// First loader
    pub ldr1: RouterVersion,
    /// Second loader
    pub ldr2: RouterVersion,
    /// Date of first use
    #[serde(with = "flexible_datetime")]
    pub firstusedate: DateTime<FixedOffset>,
    /// Uptime in seconds
    #[serde(with = "lenient_int")]
    pub uptime: u64,
    /// Timestamp of the last factory reset, 0 if never
    #[serde(rename = "lastFactoryReset", with = "lenient_int")]
    pub last_factory_reset: i64,
    /// Access technologies in use
    pub using: RouterUsing,
    /// Whether the 4G backup is enabled (missing on older firmware)
    #[serde(rename = "isCellularEnable", default, with = "lenient_bool_opt")]
    pub is_cellular_enable: Option<bool>,
    /// Whether the new web UI is enabled
    #[serde(default, with = "lenient_bool_opt")]
    pub newihm: Option<bool>,
    /// Whether the new web UI is enabled for customer care
    #[serde(rename = "newihmCdc", default, with = "lenient_bool_opt")]
    pub newihm_cdc: Option<bool>,
}

impl RouterInfo {
    /// True when the router reports itself as up
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status == 1
    }

    /// Version of the firmware currently running
    #[must_use]
    pub fn firmware_version(&self) -> Option<&str> {
        self.running.version.as_deref()
    }
}
