use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::WalletError;
use crate::wallet::{AccountId, WalletProvider, WalletSession};

/// The one shared wallet-authorization sub-protocol.
///
/// Every surface that needs a wallet (the draft wizard, the `wallet` CLI
/// command) goes through this type; none of them talk to the provider
/// directly. Availability is checked once per [`WalletConnector::initial_session`]
/// call — there is no polling, re-checks happen only on explicit
/// re-initialization.
#[derive(Clone)]
pub struct WalletConnector {
    provider: Arc<dyn WalletProvider>,
    request_timeout: Option<Duration>,
}

impl WalletConnector {
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            provider,
            request_timeout: None,
        }
    }

    /// Bound authorization requests to `timeout`; expiry maps to
    /// [`WalletError::TimedOut`] in the same retryable class as
    /// [`WalletError::ConnectionFailed`].
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Reconstruct the session from the provider's current state: one
    /// availability check, then a non-suspending query for an existing
    /// authorization.
    pub async fn initial_session(&self) -> WalletSession {
        if !self.provider.is_available() {
            debug!("no wallet provider in the environment");
            return WalletSession::Unavailable;
        }
        match self.provider.authorized_account().await {
            Ok(Some(account)) => {
                debug!(account = %account.short(), "existing wallet authorization found");
                WalletSession::Connected(account)
            }
            Ok(None) => WalletSession::Disconnected,
            Err(err) => {
                warn!(error = %err, "wallet authorization query failed");
                WalletSession::Disconnected
            }
        }
    }

    /// Ask the provider for a fresh authorization, under the configured
    /// bounded wait when one is set.
    pub async fn request_authorization(&self) -> Result<AccountId, WalletError> {
        match self.request_timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.provider.request_authorization()).await {
                    Ok(result) => result,
                    Err(_) => Err(WalletError::TimedOut {
                        secs: limit.as_secs(),
                    }),
                }
            }
            None => self.provider.request_authorization().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::SimulatedWallet;

    #[tokio::test]
    async fn initial_session_unavailable_without_provider() {
        let connector = WalletConnector::new(Arc::new(SimulatedWallet::unavailable()));
        assert_eq!(connector.initial_session().await, WalletSession::Unavailable);
    }

    #[tokio::test]
    async fn initial_session_restores_existing_authorization() {
        let wallet = SimulatedWallet::available().with_authorized(AccountId::new("0xFEED"));
        let connector = WalletConnector::new(Arc::new(wallet));
        assert_eq!(
            connector.initial_session().await,
            WalletSession::Connected(AccountId::new("0xFEED"))
        );
    }

    #[tokio::test]
    async fn initial_session_disconnected_without_authorization() {
        let connector = WalletConnector::new(Arc::new(SimulatedWallet::available()));
        assert_eq!(
            connector.initial_session().await,
            WalletSession::Disconnected
        );
    }

    #[tokio::test(start_paused = true)]
    async fn bounded_wait_maps_to_timed_out() {
        let wallet = SimulatedWallet::available().with_request_delay(Duration::from_secs(60));
        let connector = WalletConnector::new(Arc::new(wallet))
            .with_request_timeout(Duration::from_secs(5));
        let err = connector.request_authorization().await.unwrap_err();
        assert_eq!(err, WalletError::TimedOut { secs: 5 });
    }
}
