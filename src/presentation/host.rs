use crate::presentation::serialization::{
    empty_string_as_none, flexible_datetime, lenient_bool, lenient_int, lenient_int_opt,
    lenient_string, mojibake_string,
};
use chrono::{DateTime, FixedOffset};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// IPv6 address leased to a host
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ip6Address {
    /// The address
    #[serde(with = "lenient_string")]
    pub ipaddress: String,
    /// Address state (e.g. `Preferred`)
    #[serde(with = "lenient_string")]
    pub status: String,
    /// Last time the address was seen
    #[serde(with = "flexible_datetime")]
    pub lastseen: DateTime<FixedOffset>,
    /// Last time the address was scanned
    #[serde(with = "flexible_datetime")]
    pub lastscan: DateTime<FixedOffset>,
}

/// Wired link details
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct EthernetInfo {
    /// Physical switch port
    #[serde(with = "lenient_int")]
    pub physicalport: i64,
    /// Logical port
    #[serde(with = "lenient_int")]
    pub logicalport: i64,
    /// Negotiated speed in Mbit/s
    #[serde(with = "lenient_int")]
    pub speed: i64,
    /// Duplex mode
    #[serde(default, with = "empty_string_as_none")]
    pub mode: Option<String>,
}

/// Wireless link details
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct WirelessInfo {
    /// Wireless extender index
    #[serde(with = "lenient_int")]
    pub wexindex: i64,
    /// Static association flag
    #[serde(rename = "static", with = "lenient_int")]
    pub static_assoc: i64,
    /// Band (`2.4`, `5`, `6`)
    #[serde(default, with = "empty_string_as_none")]
    pub band: Option<String>,
    /// Transmit usage
    #[serde(rename = "txUsage", with = "lenient_int")]
    pub tx_usage: i64,
    /// Receive usage
    #[serde(rename = "rxUsage", with = "lenient_int")]
    pub rx_usage: i64,
    /// Estimated rate in Mbit/s
    #[serde(rename = "estimatedRate", with = "lenient_int")]
    pub estimated_rate: i64,
    /// Signal strength in dBm
    #[serde(with = "lenient_int")]
    pub rssi0: i64,
    /// Modulation and coding scheme
    #[serde(with = "lenient_int")]
    pub mcs: i64,
    /// PHY rate in Mbit/s
    #[serde(with = "lenient_int")]
    pub rate: i64,
}

/// Wireless link details for one band
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct WirelessByBand {
    /// Band (`2.4`, `5`, `6`)
    #[serde(with = "lenient_string")]
    pub band: String,
    /// Transmit usage
    #[serde(rename = "txUsage", with = "lenient_int")]
    pub tx_usage: i64,
    /// Receive usage
    #[serde(rename = "rxUsage", with = "lenient_int")]
    pub rx_usage: i64,
    /// Estimated rate in Mbit/s
    #[serde(rename = "estimatedRate", with = "lenient_int")]
    pub estimated_rate: i64,
    /// Signal strength in dBm
    #[serde(with = "lenient_int")]
    pub rssi0: i64,
    /// Modulation and coding scheme
    #[serde(with = "lenient_int")]
    pub mcs: i64,
    /// PHY rate in Mbit/s
    #[serde(with = "lenient_int")]
    pub rate: i64,
}

/// Powerline link details
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlcInfo {
    /// Receive PHY rate
    #[serde(default, with = "empty_string_as_none")]
    pub rxphyrate: Option<String>,
    /// Transmit PHY rate
    #[serde(default, with = "empty_string_as_none")]
    pub txphyrate: Option<String>,
    /// Associated powerline device
    #[serde(with = "lenient_int")]
    pub associateddevice: i64,
    /// Powerline interface
    #[serde(with = "lenient_int")]
    pub interface: i64,
    /// Ethernet speed behind the adapter
    #[serde(with = "lenient_int")]
    pub ethernetspeed: i64,
}

/// Device fingerprint computed by the router
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceInfo {
    /// Device category, localized by the router
    #[serde(rename = "type", with = "mojibake_string")]
    pub kind: String,
    /// Manufacturer
    #[serde(default, with = "empty_string_as_none")]
    pub manufacturer: Option<String>,
    /// Model
    #[serde(default, with = "empty_string_as_none")]
    pub model: Option<String>,
    /// Icon name used by the web UI
    #[serde(with = "lenient_string")]
    pub icon: String,
    /// Operating system
    #[serde(rename = "operatingSystem", default, with = "empty_string_as_none")]
    pub operating_system: Option<String>,
    /// Operating system version
    #[serde(default, with = "empty_string_as_none")]
    pub version: Option<String>,
}

/// Parental control state of a host
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParentalControl {
    /// Whether a schedule applies
    #[serde(with = "lenient_bool")]
    pub enable: bool,
    /// Current state (e.g. `Allowed`)
    #[serde(with = "lenient_string")]
    pub status: String,
    /// Seconds remaining in the current state
    #[serde(rename = "statusRemaining", with = "lenient_int")]
    pub status_remaining: i64,
    /// End of the current state
    #[serde(rename = "statusUntil", default, with = "lenient_int_opt")]
    pub status_until: Option<i64>,
}

/// Ping statistics
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingInfo {
    /// Average round-trip time in ms
    #[serde(with = "lenient_int")]
    pub average: i64,
}

/// Service scan results
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScanInfo {
    /// Services detected on the host
    #[serde(default)]
    pub services: Option<Vec<String>>,
}

/// A host known to the router, returned by `/hosts`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Host {
    /// Router-assigned identifier
    #[serde(with = "lenient_int")]
    pub id: i64,
    /// Whether the host is currently connected
    #[serde(with = "lenient_bool")]
    pub active: bool,
    /// Device type reported by the router
    #[serde(with = "lenient_string")]
    pub devicetype: String,
    /// DHCPv6 unique identifier
    #[serde(default, with = "empty_string_as_none")]
    pub duid: Option<String>,
    /// Whether the host is on the guest network
    #[serde(with = "lenient_bool")]
    pub guest: bool,
    /// Host name
    #[serde(default, with = "empty_string_as_none")]
    pub hostname: Option<String>,
    /// IPv4 address
    #[serde(with = "lenient_string")]
    pub ipaddress: String,
    /// Remaining DHCP lease in seconds
    #[serde(with = "lenient_int")]
    pub lease: i64,
    /// Link type (`Ethernet`, `Wifi 5`, ...)
    #[serde(with = "lenient_string")]
    pub link: String,
    /// MAC address
    #[serde(with = "lenient_string")]
    pub macaddress: String,
    /// Addressing type (`DHCP`, `Static`)
    #[serde(rename = "type", with = "lenient_string")]
    pub address_type: String,
    /// First time the host was seen
    #[serde(with = "flexible_datetime")]
    pub firstseen: DateTime<FixedOffset>,
    /// Seconds since the host was last seen, 0 while active
    #[serde(with = "lenient_int")]
    pub lastseen: i64,
    /// Serial number
    #[serde(rename = "serialNumber", default, with = "empty_string_as_none")]
    pub serial_number: Option<String>,
    /// IPv6 addresses
    #[serde(default)]
    pub ip6address: Option<Vec<Ip6Address>>,
    /// Wired link details
    pub ethernet: EthernetInfo,
    /// Wireless link details
    pub wireless: WirelessInfo,
    /// Wireless link details per band
    #[serde(rename = "wirelessByBand")]
    pub wireless_by_band: Vec<WirelessByBand>,
    /// Powerline link details
    pub plc: PlcInfo,
    /// Device fingerprint
    pub informations: DeviceInfo,
    /// Parental control state
    pub parentalcontrol: ParentalControl,
    /// Ping statistics
    pub ping: PingInfo,
    /// Service scan results
    pub scan: ScanInfo,
}

impl Host {
    /// Display name: host name when set, else the IPv4 address
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.hostname.as_deref().unwrap_or(&self.ipaddress)
    }
}

/// Hosts returned by `/hosts`, in router order
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct HostList {
    /// The hosts
    pub hosts: Vec<Host>,
}

impl HostList {
    /// Number of hosts
    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// True when the router knows no host
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Iterates over the hosts
    pub fn iter(&self) -> std::slice::Iter<'_, Host> {
        self.hosts.iter()
    }

    /// Hosts currently connected
    pub fn active(&self) -> impl Iterator<Item = &Host> {
        self.hosts.iter().filter(|h| h.active)
    }

    /// Finds a host by MAC address, ignoring case
    #[must_use]
    pub fn find_by_mac(&self, mac: &str) -> Option<&Host> {
        self.hosts
            .iter()
            .find(|h| h.macaddress.eq_ignore_ascii_case(mac))
    }
}

impl From<Vec<Host>> for HostList {
    fn from(hosts: Vec<Host>) -> Self {
        Self { hosts }
    }
}

impl IntoIterator for HostList {
    type Item = Host;
    type IntoIter = std::vec::IntoIter<Host>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.into_iter()
    }
}

impl<'a> IntoIterator for &'a HostList {
    type Item = &'a Host;
    type IntoIter = std::slice::Iter<'a, Host>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}
