use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use crate::draft::PetitionDraft;
use crate::error::PublishError;
use crate::publish::{ConfirmationId, PublishEndpoint};
use crate::wallet::AccountId;

/// Simulated verification ledger.
///
/// Reproduces the visible behavior of a chain write without one: a fixed
/// latency, then a fabricated `0x`-prefixed 64-hex confirmation identifier.
/// Failures can be scripted up front for demos and tests.
pub struct SimulatedLedger {
    latency: Duration,
    failures: Mutex<VecDeque<PublishError>>,
    publishes_seen: AtomicUsize,
}

impl SimulatedLedger {
    pub fn new() -> Self {
        Self {
            // The latency a user would see on a real chain write.
            latency: Duration::from_secs(3),
            failures: Mutex::new(VecDeque::new()),
            publishes_seen: AtomicUsize::new(0),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Queue a failure for the next publish; later publishes succeed again.
    pub fn fail_next(self, error: PublishError) -> Self {
        self.failures
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(error);
        self
    }

    /// How many publish calls reached the ledger.
    pub fn publish_count(&self) -> usize {
        self.publishes_seen.load(Ordering::SeqCst)
    }

    fn fabricate_confirmation() -> ConfirmationId {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes[..]);
        ConfirmationId::new(format!("0x{}", hex::encode(bytes)))
    }
}

impl Default for SimulatedLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PublishEndpoint for SimulatedLedger {
    async fn publish(
        &self,
        draft: &PetitionDraft,
        account: &AccountId,
    ) -> Result<ConfirmationId, PublishError> {
        self.publishes_seen.fetch_add(1, Ordering::SeqCst);

        let record = draft
            .to_record(account)
            .map_err(|err| PublishError::Failed(err.to_string()))?;
        if let Ok(payload) = serde_json::to_string(&record) {
            debug!(%payload, "simulated ledger accepted record");
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let scripted = self
            .failures
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front();
        match scripted {
            Some(error) => Err(error),
            None => Ok(Self::fabricate_confirmation()),
        }
    }
}
