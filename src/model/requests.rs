/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::LOGIN_REMEMBER;
use reqwest::Method;
use serde::Serialize;
use std::fmt;

/// Endpoints of the router API used by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST /login`
    Login,
    /// `GET /device`
    Device,
    /// `GET /hosts`
    Hosts,
    /// `GET /wan/ip/stats`
    WanIpStats,
}

impl Endpoint {
    /// Path relative to the API base URL
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::Device => "device",
            Endpoint::Hosts => "hosts",
            Endpoint::WanIpStats => "wan/ip/stats",
        }
    }

    /// HTTP method
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login => Method::POST,
            _ => Method::GET,
        }
    }

    /// Keys leading from the response root to the record
    #[must_use]
    pub fn envelope(&self) -> &'static [&'static str] {
        match self {
            Endpoint::Login => &[],
            Endpoint::Device => &["device"],
            Endpoint::Hosts => &["hosts", "list"],
            Endpoint::WanIpStats => &["wan", "ip", "stats"],
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method(), self.path())
    }
}

/// Form body of `POST /login`
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    /// Router admin password
    pub password: &'a str,
    /// Asks the router for a long-lived session cookie
    pub remember: &'a str,
}

impl<'a> LoginRequest<'a> {
    /// Creates a login form for `password`
    pub fn new(password: &'a str) -> Self {
        Self {
            password,
            remember: LOGIN_REMEMBER,
        }
    }
}
