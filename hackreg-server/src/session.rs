//! Wallet session collaborator
//!
//! Which wallet is "current" for a request is decided outside this crate
//! (wallet connect, signed message, auth proxy...). Handlers only depend on
//! `WalletSession`; the default `HeaderWalletSession` trusts a header set
//! by whatever fronts the server.

use async_trait::async_trait;
use axum::http::header::{HeaderMap, HeaderName};

use hackreg_core::models::WalletAddress;

/// Session resolution failure
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The request carried a session value that cannot be read
    #[error("malformed session: {0}")]
    Malformed(String),

    /// The session backend could not answer
    #[error("session backend unavailable: {0}")]
    Unavailable(String),
}

/// Resolves the wallet address bound to a request, if any
#[async_trait]
pub trait WalletSession: Send + Sync {
    async fn current_wallet(&self, headers: &HeaderMap)
        -> Result<Option<WalletAddress>, SessionError>;
}

/// Reads the session wallet from a request header
#[derive(Debug, Clone)]
pub struct HeaderWalletSession {
    header: HeaderName,
}

impl HeaderWalletSession {
    pub fn new(header: &str) -> Result<Self, SessionError> {
        let header = HeaderName::from_bytes(header.trim().as_bytes())
            .map_err(|_| SessionError::Malformed(format!("invalid header name '{}'", header)))?;
        Ok(Self { header })
    }
}

#[async_trait]
impl WalletSession for HeaderWalletSession {
    async fn current_wallet(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<WalletAddress>, SessionError> {
        let Some(value) = headers.get(&self.header) else {
            return Ok(None);
        };

        let raw = value.to_str().map_err(|_| {
            SessionError::Malformed(format!("{} is not valid UTF-8", self.header))
        })?;

        Ok(WalletAddress::new(raw).ok())
    }
}
