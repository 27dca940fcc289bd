/// Session and login handling
pub mod auth;
/// Router client and endpoint mapping
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
