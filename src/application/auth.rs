/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Session management for the router API
//!
//! This module owns the HTTP transport and the login cookie:
//! - Login with the admin password (`POST /login`)
//! - Cookie attachment on every endpoint call
//! - Invalidation when the router answers 401/403
//! - Deterministic teardown of the transport on close

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::Credential;
use crate::model::http::{make_http_request, read_json};
use crate::model::requests::{Endpoint, LoginRequest};
use crate::model::responses::ApiErrorResponse;
use reqwest::header::SET_COOKIE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

#[derive(Default)]
struct SessionState {
    transport: Option<Client>,
    credential: Option<Credential>,
}

/// Authenticated session with one router
///
/// The transport is opened by the first login and released by [`Session::close`]
/// or when the session is dropped. No endpoint can be called before a login
/// succeeds.
pub struct Session {
    config: Arc<Config>,
    state: RwLock<SessionState>,
}

impl Session {
    /// Creates a session; no connection is made until [`Session::login`]
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Configuration used by this session
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True once a login succeeded and until logout, close or session expiry
    pub async fn is_authenticated(&self) -> bool {
        let state = self.state.read().await;
        state.transport.is_some() && state.credential.is_some()
    }

    /// True while the transport is open
    pub async fn is_open(&self) -> bool {
        self.state.read().await.transport.is_some()
    }

    /// Current credential
    ///
    /// # Returns
    /// * `Ok(Credential)` - The stored credential
    /// * `Err(AppError::NotAuthenticated)` - No login succeeded yet
    pub async fn credential(&self) -> Result<Credential, AppError> {
        self.state
            .read()
            .await
            .credential
            .clone()
            .ok_or(AppError::NotAuthenticated)
    }

    /// Logs in with the configured password
    pub async fn login(&self) -> Result<Credential, AppError> {
        let password = self.config.credentials.password.clone();
        self.login_with_password(&password).await
    }

    /// Logs in with `password`
    ///
    /// A no-op returning the current credential when already authenticated.
    ///
    /// # Returns
    /// * `Ok(Credential)` - The session cookie, now attached to every request
    /// * `Err(AppError::InvalidCredentials)` - Wrong password
    /// * `Err(AppError::RateLimitExceeded)` - Too many login attempts
    /// * `Err(AppError::LoginFailed)` - Router unreachable, timed out or unexpected answer;
    ///   the transport error is kept as the source
    pub async fn login_with_password(&self, password: &str) -> Result<Credential, AppError> {
        let transport = {
            let mut state = self.state.write().await;
            if let (Some(_), Some(credential)) = (&state.transport, &state.credential) {
                debug!("Already authenticated");
                return Ok(credential.clone());
            }
            match &state.transport {
                Some(client) => client.clone(),
                None => {
                    let client = Client::builder().user_agent(USER_AGENT).build()?;
                    state.transport = Some(client.clone());
                    client
                }
            }
        };

        let url = self.config.url(Endpoint::Login.path());
        let origin = self.config.origin();
        let headers = vec![
            ("Referer", url.as_str()),
            ("Origin", origin.as_str()),
        ];

        debug!("Sending login request to: {}", url);

        let response = make_http_request(
            &transport,
            Endpoint::Login.method(),
            &url,
            headers,
            &[],
            Some(&LoginRequest::new(password)),
            self.config.rest_api.timeout,
        )
        .await
        .map_err(|e| match e {
            AppError::Timeout(_) | AppError::Network(_) => AppError::LoginFailed {
                reason: e.to_string(),
                source: Some(Box::new(e)),
            },
            other => other,
        })?;

        let status = response.status();

        if status.is_success() {
            let credential = Credential::from_set_cookie(
                response
                    .headers()
                    .get_all(SET_COOKIE)
                    .iter()
                    .filter_map(|v| v.to_str().ok()),
            )
            .ok_or_else(|| {
                error!("Login answered {} without a session cookie", status);
                AppError::Protocol("login response carried no session cookie".to_string())
            })?;

            let mut state = self.state.write().await;
            if state.transport.is_none() {
                warn!("Session closed while logging in");
                return Err(AppError::NotAuthenticated);
            }
            state.credential = Some(credential.clone());

            info!("✓ Login successful");
            return Ok(credential);
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => {
                error!("Login rejected: invalid credentials");
                Err(AppError::InvalidCredentials)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let reason = ApiErrorResponse::parse(&body)
                    .and_then(|r| r.reason().map(String::from))
                    .unwrap_or_else(|| "too many login attempts".to_string());
                warn!("Login rate limited: {}", reason);
                Err(AppError::RateLimitExceeded(reason))
            }
            _ => {
                error!("Login failed with status {}: {}", status, body);
                Err(AppError::login_failed(format!("unexpected status {status}")))
            }
        }
    }

    /// Sends an authenticated request and returns the unwrapped JSON body
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint to call
    /// * `params` - Query string parameters
    ///
    /// # Returns
    /// * `Ok(Value)` - Response JSON, single-element array envelope removed
    /// * `Err(AppError::NotAuthenticated)` - Called before login
    /// * `Err(AppError::SessionExpired)` - Router answered 401/403; the credential is dropped
    /// * `Err(AppError::Network | AppError::Timeout)` - Transport failure
    /// * `Err(AppError::Protocol)` - Body is not JSON
    pub async fn request(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> Result<Value, AppError> {
        let (transport, credential) = {
            let state = self.state.read().await;
            match (&state.transport, &state.credential) {
                (Some(t), Some(c)) => (t.clone(), c.clone()),
                _ => {
                    warn!("{} called before login", endpoint);
                    return Err(AppError::NotAuthenticated);
                }
            }
        };

        let url = self.config.url(endpoint.path());
        let referer = self.config.referer();
        let origin = self.config.origin();
        let headers = vec![
            ("Referer", referer.as_str()),
            ("Origin", origin.as_str()),
            ("Accept", "application/json"),
            ("Cookie", credential.cookie_header()),
        ];

        let response = make_http_request(
            &transport,
            endpoint.method(),
            &url,
            headers,
            params,
            None::<&()>,
            self.config.rest_api.timeout,
        )
        .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("{} answered {}, session expired", endpoint, status);
            let mut state = self.state.write().await;
            if state.credential.as_ref() == Some(&credential) {
                state.credential = None;
            }
            return Err(AppError::SessionExpired);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} failed with status {}: {}", endpoint, status, body);
            return Err(AppError::Unexpected(status));
        }

        read_json(response, self.config.rest_api.timeout)
            .await
            .inspect_err(|e| {
                error!("{} returned an unusable body: {}", endpoint, e);
            })
    }

    /// Forgets the credential, keeping the transport open
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        if state.credential.take().is_some() {
            info!("✓ Logged out");
        }
    }

    /// Drops the credential and releases the transport
    ///
    /// Idempotent. A later login opens a new transport.
    pub async fn close(&self) {
        let mut state = self.state.write().await;
        let had_transport = state.transport.take().is_some();
        state.credential = None;
        if had_transport {
            info!("✓ Session closed");
        }
    }
}
