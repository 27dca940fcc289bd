/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
//! Typed reads of `BBOX_*` settings from the process environment
//!
//! A variable that is unset or only whitespace counts as missing. Values are
//! trimmed before parsing, so `BBOX_TIMEOUT=" 15 "` reads as `15`.

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Parses `env_var`, falling back to `default` when it is missing or malformed
///
/// Malformed values are logged at error level.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if val.trim().is_empty() => default,
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}, using default", env_var);
            default
        }),
        Err(_) => default,
    }
}

/// Parses `env_var` when present; malformed values are dropped silently
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if val.trim().is_empty() => None,
        Ok(val) => val.trim().parse::<T>().ok(),
        Err(_) => None,
    }
}
