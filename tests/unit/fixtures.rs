// Sample router payloads shared by the unit tests

use serde_json::{Value, json};

pub fn device_record() -> Value {
    json!({
        "now": "2025-10-27T21:14:33+0100",
        "status": 1,
        "numberofboots": 10,
        "modelname": "F@st5696b",
        "modelclass": "F5696b",
        "optimisation": 1,
        "user_configured": 1,
        "serialnumber": "123456789012345",
        "display": {
            "luminosity": 2,
            "luminosity_extender": 100,
            "state": "."
        },
        "main": {"version": "25.5.28", "date": "2025-09-25T14:38:50Z"},
        "reco": {"version": "25.5.28", "date": "2025-09-25T14:29:16Z"},
        "running": {"version": "25.5.28", "date": "2025-09-25T14:38:16+0000"},
        "spl": {"version": ""},
        "tpl": {"version": ""},
        "ldr1": {"version": "4.4.20"},
        "ldr2": {"version": "4.4.20"},
        "firstusedate": "2025-07-23T06:30:42Z",
        "uptime": 404347,
        "lastFactoryReset": 0,
        "using": {"ipv4": 1, "ipv6": 1, "ftth": 1, "adsl": 0, "vdsl": 0},
        "isCellularEnable": 1,
        "newihm": 1,
        "newihmCdc": 1
    })
}

/// `/device` body as the router sends it
pub fn device_body() -> String {
    json!([{"device": device_record()}]).to_string()
}

pub fn inactive_host() -> Value {
    json!({
        "id": 1,
        "active": 0,
        "hostname": "",
        "ipaddress": "192.168.1.100",
        "macaddress": "aa:bb:cc:dd:ee:01",
        "type": "Static",
        "link": "Wifi 5",
        "lease": 0,
        "firstseen": "2024-06-15T10:00:00+0200",
        "lastseen": 3131260,
        "devicetype": "Device",
        "duid": "",
        "guest": 0,
        "serialNumber": "",
        "ip6address": [],
        "ethernet": {"physicalport": 0, "logicalport": 0, "speed": 0, "mode": ""},
        "wireless": {
            "wexindex": 0, "static": 0, "band": "", "txUsage": 0, "rxUsage": 0,
            "estimatedRate": 0, "rssi0": 0, "mcs": 0, "rate": 0
        },
        "wirelessByBand": [],
        "plc": {
            "rxphyrate": "", "txphyrate": "", "associateddevice": 0,
            "interface": 0, "ethernetspeed": 0
        },
        "informations": {
            "type": "GÃ©nÃ©rique",
            "manufacturer": "GenericCorp",
            "model": "Device",
            "icon": "generic",
            "operatingSystem": "Unknown OS",
            "version": ""
        },
        "parentalcontrol": {
            "enable": 0, "status": "Allowed", "statusRemaining": 0, "statusUntil": ""
        },
        "ping": {"average": 0},
        "scan": {"services": []}
    })
}

pub fn active_dhcp_host() -> Value {
    json!({
        "id": 5,
        "active": 1,
        "hostname": "office-printer",
        "ipaddress": "192.168.1.110",
        "macaddress": "aa:bb:cc:dd:ee:05",
        "type": "DHCP",
        "link": "Wifi 2.4",
        "lease": 67189,
        "firstseen": "2024-06-01T12:30:00+0200",
        "lastseen": 0,
        "devicetype": "Device",
        "duid": "02:00:00:00:00:03:00:01:aa:bb:cc:dd:ee:05",
        "guest": 0,
        "serialNumber": "",
        "ip6address": [
            {
                "ipaddress": "fe80::aabb:ccff:fedd:ee05",
                "status": "Preferred",
                "lastseen": "2025-11-07T07:17:15+0100",
                "lastscan": "2025-10-31T10:16:40+0100"
            },
            {
                "ipaddress": "2001:db8:85a3::8a2e:370:7334",
                "status": "Preferred",
                "lastseen": "2025-11-01T20:13:42+0100",
                "lastscan": "1970-01-16T07:15:14+0100"
            }
        ],
        "ethernet": {"physicalport": 10, "logicalport": 11, "speed": 0, "mode": ""},
        "wireless": {
            "wexindex": 0, "static": 0, "band": "2.4", "txUsage": 0, "rxUsage": 0,
            "estimatedRate": 30, "rssi0": "-52", "mcs": 7, "rate": 72
        },
        "wirelessByBand": [
            {
                "band": "2.4", "txUsage": 0, "rxUsage": 0, "estimatedRate": 30,
                "rssi0": "-52", "mcs": 7, "rate": 72
            }
        ],
        "plc": {
            "rxphyrate": "", "txphyrate": "", "associateddevice": 0,
            "interface": 0, "ethernetspeed": 0
        },
        "informations": {
            "type": "Printer",
            "manufacturer": "PrinterVendor",
            "model": "OfficeNet 5000",
            "icon": "printer",
            "operatingSystem": "Embedded OS",
            "version": ""
        },
        "parentalcontrol": {
            "enable": 0, "status": "Allowed", "statusRemaining": 0, "statusUntil": ""
        },
        "ping": {"average": 0},
        "scan": {"services": []}
    })
}

pub fn ethernet_host() -> Value {
    json!({
        "id": 10,
        "me": 1,
        "active": 1,
        "hostname": "home-server",
        "ipaddress": "192.168.1.50",
        "macaddress": "AA:BB:CC:DD:EE:10",
        "type": "DHCP",
        "link": "Ethernet",
        "lease": 61613,
        "firstseen": "2024-08-10T14:20:00+0200",
        "lastseen": 0,
        "devicetype": "Device",
        "duid": "e3:a1:b5:37:00:02:00:00:ab:11:6d:a8:bb:63:72:7d:94:e4",
        "guest": 0,
        "serialNumber": "",
        "ethernet": {"physicalport": 2, "logicalport": 3, "speed": 2500, "mode": "Full"},
        "wireless": {
            "wexindex": 0, "static": 0, "band": "", "txUsage": 0, "rxUsage": 0,
            "estimatedRate": 0, "rssi0": 0, "mcs": 0, "rate": 0
        },
        "wirelessByBand": [],
        "plc": {
            "rxphyrate": "", "txphyrate": "", "associateddevice": 0,
            "interface": 0, "ethernetspeed": 0
        },
        "informations": {
            "type": "Generic Device",
            "manufacturer": "ServerVendor",
            "model": "EdgeNode Pro",
            "icon": "generic",
            "operatingSystem": "Linux",
            "version": ""
        },
        "parentalcontrol": {
            "enable": 0, "status": "Allowed", "statusRemaining": 0, "statusUntil": 1730052873
        },
        "ping": {"average": 3},
        "scan": {"services": ["ssh", "http"]}
    })
}

/// `/hosts` body with the three sample hosts
pub fn hosts_body() -> String {
    json!([{"hosts": {"list": [inactive_host(), active_dhcp_host(), ethernet_host()]}}]).to_string()
}

pub fn wan_record() -> Value {
    json!({
        "rx": {
            "packets": 104522008,
            "bytes": 130580798930u64,
            "packetserrors": 0,
            "packetsdiscards": 0,
            "occupation": 0,
            "bandwidth": 29,
            "maxBandwidth": 1000000,
            "contractualBandwidth": 8000000
        },
        "tx": {
            "packets": 11135558,
            "bytes": 5471690248u64,
            "packetserrors": 0,
            "packetsdiscards": 0,
            "occupation": 0,
            "bandwidth": 10,
            "maxBandwidth": 1000000,
            "contractualBandwidth": 1000000
        }
    })
}

/// `/wan/ip/stats` body wrapping `stats`
pub fn wan_body(stats: Value) -> String {
    json!([{"wan": {"ip": {"stats": stats}}}]).to_string()
}
