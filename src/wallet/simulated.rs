use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::WalletError;
use crate::wallet::{AccountId, WalletProvider};

/// Default account handed out by the simulator when no outcome is scripted.
const DEMO_ACCOUNT: &str = "0xDEC0DE0000000000000000000000000000000017";

/// Scriptable in-memory wallet provider.
///
/// Stands in for a browser-injected provider in the demo CLI and in tests:
/// availability, pre-authorized account, per-request outcomes and request
/// latency are all controllable. Outcomes are consumed in FIFO order; when
/// the queue is empty a request succeeds with a fixed demo account.
pub struct SimulatedWallet {
    available: bool,
    authorized: Mutex<Option<AccountId>>,
    outcomes: Mutex<VecDeque<Result<AccountId, WalletError>>>,
    request_delay: Duration,
    requests_seen: AtomicUsize,
}

impl SimulatedWallet {
    pub fn available() -> Self {
        Self {
            available: true,
            authorized: Mutex::new(None),
            outcomes: Mutex::new(VecDeque::new()),
            request_delay: Duration::ZERO,
            requests_seen: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::available()
        }
    }

    /// Start with an account already authorized, as after a previous session.
    pub fn with_authorized(self, account: AccountId) -> Self {
        *self.authorized.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(account);
        self
    }

    /// Queue the outcome of the next authorization request.
    pub fn push_outcome(self, outcome: Result<AccountId, WalletError>) -> Self {
        self.outcomes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(outcome);
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// How many authorization requests reached the provider.
    pub fn request_count(&self) -> usize {
        self.requests_seen.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for SimulatedWallet {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn authorized_account(&self) -> Result<Option<AccountId>, WalletError> {
        if !self.available {
            return Err(WalletError::Unavailable);
        }
        Ok(self
            .authorized
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    async fn request_authorization(&self) -> Result<AccountId, WalletError> {
        if !self.available {
            return Err(WalletError::Unavailable);
        }
        self.requests_seen.fetch_add(1, Ordering::SeqCst);
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
        let scripted = self
            .outcomes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front();
        let outcome = scripted.unwrap_or_else(|| Ok(AccountId::new(DEMO_ACCOUNT)));
        if let Ok(account) = &outcome {
            *self
                .authorized
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(account.clone());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_outcomes_are_consumed_in_order() {
        let wallet = SimulatedWallet::available()
            .push_outcome(Err(WalletError::UserRejected))
            .push_outcome(Ok(AccountId::new("0xAAA")));

        assert_eq!(
            wallet.request_authorization().await,
            Err(WalletError::UserRejected)
        );
        assert_eq!(
            wallet.request_authorization().await,
            Ok(AccountId::new("0xAAA"))
        );
        assert_eq!(wallet.request_count(), 2);
    }

    #[tokio::test]
    async fn successful_request_records_the_authorization() {
        let wallet = SimulatedWallet::available();
        let account = wallet.request_authorization().await.unwrap();
        assert_eq!(wallet.authorized_account().await.unwrap(), Some(account));
    }

    #[tokio::test]
    async fn unavailable_wallet_refuses_requests() {
        let wallet = SimulatedWallet::unavailable();
        assert_eq!(
            wallet.request_authorization().await,
            Err(WalletError::Unavailable)
        );
        assert_eq!(wallet.request_count(), 0);
    }
}
