/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Session credential model
pub mod auth;
/// HTTP request utilities
pub mod http;
/// Endpoints and request bodies
pub mod requests;
/// Response envelope and error bodies
pub mod responses;
