//! Optional remote cart sync: best-effort one-shot pull and push.
//!
//! Never invoked automatically and never blocking local command
//! processing. Local state is authoritative regardless of the outcome:
//! failures are logged, never retried, never rolled back.

use red_lantern_core::{CartState, RemotePayload};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use super::store::CartStore;
use crate::config::SyncConfig;

/// Remote cart sync failure.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    /// The response body was not a well-formed payload.
    #[error("Malformed payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for a caller-supplied remote cart endpoint.
#[derive(Clone)]
pub struct CartSync {
    client: reqwest::Client,
    endpoint: Url,
    token: Option<SecretString>,
}

impl CartSync {
    /// Create a sync client from configuration.
    #[must_use]
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        }
    }

    /// Pull the remote state and apply it to the local store.
    ///
    /// On success with a well-formed payload, dispatches an
    /// `UpdateFromApi` with whatever of `items`/`wishlist` is present. Any
    /// failure is logged and leaves local state untouched.
    ///
    /// # Errors
    ///
    /// Returns `SyncError` so a caller may surface it; nothing in the
    /// store requires handling it.
    #[instrument(skip(self, store))]
    pub async fn pull(&self, store: &CartStore) -> Result<(), SyncError> {
        let mut request = self.client.get(self.endpoint.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.inspect_err(|e| {
            warn!(error = %e, "Cart pull failed");
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "Cart pull returned non-success status");
            return Err(SyncError::Status(status));
        }

        // Read the body as text first for better diagnostics on parse failure
        let body = response.text().await.inspect_err(|e| {
            warn!(error = %e, "Failed to read cart pull response body");
        })?;

        let payload: RemotePayload = serde_json::from_str(&body).map_err(|e| {
            warn!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "Malformed cart pull payload"
            );
            SyncError::Parse(e)
        })?;

        debug!(
            items = payload.items.as_ref().map(Vec::len),
            wishlist = payload.wishlist.as_ref().map(Vec::len),
            "Applying pulled cart payload"
        );
        store.update_from_api(payload);
        Ok(())
    }

    /// Push the full state to the remote endpoint.
    ///
    /// Any 2xx status is success. Failures are logged and never retried;
    /// local state is authoritative either way.
    ///
    /// # Errors
    ///
    /// Returns `SyncError` so a caller may surface it.
    #[instrument(skip(self, state))]
    pub async fn push(&self, state: &CartState) -> Result<(), SyncError> {
        let mut request = self.client.post(self.endpoint.clone()).json(state);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.inspect_err(|e| {
            warn!(error = %e, "Cart push failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Cart push returned non-success status");
            return Err(SyncError::Status(status));
        }

        debug!("Cart state pushed");
        Ok(())
    }
}

impl std::fmt::Debug for CartSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartSync")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}
