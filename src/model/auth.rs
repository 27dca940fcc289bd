/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use std::fmt;

/// Session credential obtained from `/login`
///
/// Holds the `name=value` cookie pairs the router set on login, joined the
/// way they are sent back in a `Cookie` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    cookie: String,
    obtained_at: DateTime<Utc>,
}

impl Credential {
    /// Creates a credential from a ready-made `Cookie` header value
    pub fn new(cookie: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            obtained_at: Utc::now(),
        }
    }

    /// Builds a credential from the `Set-Cookie` header values of a response
    ///
    /// Attributes (`Path`, `Expires`, ...) are dropped, cookies with an empty
    /// value (deletions) are ignored and a repeated name keeps its last value.
    /// Returns `None` when no usable cookie remains.
    pub fn from_set_cookie<'a, I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for raw in values {
            let Some(pair) = raw.split(';').next() else {
                continue;
            };
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let (name, value) = (name.trim(), value.trim());
            if name.is_empty() {
                continue;
            }
            pairs.retain(|(n, _)| n != name);
            if !value.is_empty() {
                pairs.push((name.to_string(), value.to_string()));
            }
        }

        if pairs.is_empty() {
            return None;
        }

        let cookie = pairs
            .iter()
            .map(|(n, v)| format!("{n}={v}"))
            .collect::<Vec<_>>()
            .join("; ");
        Some(Self::new(cookie))
    }

    /// Value for the `Cookie` request header
    #[must_use]
    pub fn cookie_header(&self) -> &str {
        &self.cookie
    }

    /// When the credential was obtained
    #[must_use]
    pub fn obtained_at(&self) -> DateTime<Utc> {
        self.obtained_at
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("cookie", &"<redacted>")
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}
