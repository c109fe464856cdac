//! Admin auth gate
//!
//! Holds the HTTP client and the token store. Logging in stores the token,
//! re-initialising verifies a stored token with the backend, and any failed
//! verification clears it. An [`AdminSession`] can only be created while a
//! token is held.

use shared::client::{LoginRequest, LoginResponse};

use crate::http::{HttpClient, NetworkHttpClient};
use crate::session::AdminSession;
use crate::token::{FileTokenStore, TokenStore};
use crate::{ClientConfig, ClientError, ClientResult};

pub(crate) const LOGIN_PATH: &str = "/api/admin/login";
pub(crate) const VERIFY_PATH: &str = "/api/admin/verify";

/// Message shown when the backend rejects a login without saying why
pub const LOGIN_FAILED: &str = "Login failed";

/// Token-based login gate for the admin view
#[derive(Debug)]
pub struct AuthGate<H = NetworkHttpClient, S = FileTokenStore> {
    http: H,
    store: S,
}

impl AuthGate {
    /// Gate using the network client and file token store from `config`
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?, config.token_store()))
    }
}

impl<H: HttpClient, S: TokenStore> AuthGate<H, S> {
    pub fn new(http: H, store: S) -> Self {
        Self { http, store }
    }

    /// Whether a token is currently held
    pub fn is_authenticated(&self) -> bool {
        self.http.token().is_some()
    }

    /// Currently held token
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored token, if any, and verify it with the backend.
    ///
    /// Returns whether the gate ended up authenticated.
    pub async fn init(&mut self) -> bool {
        match self.store.load() {
            Some(token) => self.verify(&token).await,
            None => {
                tracing::debug!("No stored admin token");
                false
            }
        }
    }

    /// Submit credentials; on success the token is stored and held.
    ///
    /// Errors carry the message to show: the server's `error` text when it
    /// sent one, the transport error on network failure, or
    /// [`LOGIN_FAILED`].
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<String> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = match self.http.post(LOGIN_PATH, &request).await {
            Ok(response) => response,
            Err(ClientError::Api { message, .. }) => {
                tracing::warn!(username, "Login rejected: {}", message);
                return Err(ClientError::Auth(message));
            }
            Err(ClientError::Http(e)) => {
                tracing::warn!(username, "Login request failed: {}", e);
                return Err(ClientError::Http(e));
            }
            Err(e) => {
                tracing::warn!(username, "Login failed: {}", e);
                return Err(ClientError::Auth(LOGIN_FAILED.to_string()));
            }
        };

        let token = match response.token {
            Some(token) if !token.is_empty() => token,
            _ => {
                let message = response.error.unwrap_or_else(|| LOGIN_FAILED.to_string());
                tracing::warn!(username, "Login rejected: {}", message);
                return Err(ClientError::Auth(message));
            }
        };

        self.store.save(&token)?;
        self.http.set_token(Some(token.clone()));
        tracing::info!(username, "Admin logged in");
        Ok(token)
    }

    /// Check `token` with the backend.
    ///
    /// A valid token becomes the held token. Anything else, transport
    /// failures included, clears the stored and held token.
    pub async fn verify(&mut self, token: &str) -> bool {
        self.http.set_token(Some(token.to_string()));
        match self.http.post_empty(VERIFY_PATH).await {
            Ok(()) => {
                tracing::debug!("Admin token verified");
                true
            }
            Err(e) => {
                tracing::warn!("Admin token rejected: {}", e);
                self.forget();
                false
            }
        }
    }

    /// Clear the stored and held token
    pub fn logout(&mut self) -> ClientResult<()> {
        self.http.set_token(None);
        self.store.clear()?;
        tracing::info!("Admin logged out");
        Ok(())
    }

    /// Session over a copy of the authenticated client
    pub fn session(&self) -> ClientResult<AdminSession<H>>
    where
        H: Clone,
    {
        if !self.is_authenticated() {
            return Err(ClientError::Unauthorized);
        }
        Ok(AdminSession::new(self.http.clone()))
    }

    fn forget(&mut self) {
        self.http.set_token(None);
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear stored admin token: {}", e);
        }
    }
}
