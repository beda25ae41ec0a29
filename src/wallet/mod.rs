pub mod connector;
pub mod simulated;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

pub use connector::WalletConnector;
pub use simulated::SimulatedWallet;

/// An account identifier held by the external wallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Truncated display form for status badges (`0xAB…CDEF` style).
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}…{tail}")
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authorization state with the external wallet for the current session.
///
/// Reconstructed from the provider at every wizard initialization; never
/// cached across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletSession {
    /// No provider present. Terminal until an explicit re-initialization.
    Unavailable,
    /// Provider present, no authorized account.
    Disconnected,
    /// Authorization requested, awaiting the provider's response.
    Connecting,
    /// An account is authorized for this session.
    Connected(AccountId),
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    pub fn account(&self) -> Option<&AccountId> {
        match self {
            Self::Connected(account) => Some(account),
            _ => None,
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected(_) => "connected",
        }
    }
}

/// External wallet boundary — implement for any account-holding provider.
///
/// The wizard consumes this trait exclusively through constructor injection
/// so tests and the demo CLI can substitute a scripted double.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether a provider is installed in the environment at all.
    fn is_available(&self) -> bool;

    /// Non-suspending query for an already-authorized account, if any.
    async fn authorized_account(&self) -> Result<Option<AccountId>, WalletError>;

    /// Request authorization from the user. Suspends until the provider
    /// resolves; fails with one of the [`WalletError`] classes.
    async fn request_authorization(&self) -> Result<AccountId, WalletError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_keeps_prefix_and_suffix() {
        let account = AccountId::new("0x1234567890abcdef1234567890abcdef12345678");
        assert_eq!(account.short(), "0x1234…5678");
    }

    #[test]
    fn short_form_leaves_small_ids_alone() {
        assert_eq!(AccountId::new("0xABCD").short(), "0xABCD");
    }

    #[test]
    fn session_account_only_for_connected() {
        let account = AccountId::new("0xABC");
        assert_eq!(
            WalletSession::Connected(account.clone()).account(),
            Some(&account)
        );
        assert_eq!(WalletSession::Disconnected.account(), None);
        assert!(!WalletSession::Connecting.is_connected());
    }
}
