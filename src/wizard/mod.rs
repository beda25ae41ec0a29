pub mod step;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::draft::{DraftField, PetitionDraft};
use crate::error::{PublishError, WalletError, WizardError};
use crate::publish::{PublishAttempt, PublishEndpoint};
use crate::wallet::{WalletConnector, WalletProvider, WalletSession};

pub use step::WizardStep;

/// Bounded waits applied to the two suspension points. `None` waits
/// indefinitely, matching the collaborator contracts.
#[derive(Debug, Clone, Copy, Default)]
pub struct WizardTimeouts {
    pub wallet_request: Option<Duration>,
    pub publish: Option<Duration>,
}

/// Client-side, single-user controller for authoring one petition.
///
/// Collects draft fields across ordered steps, tracks the wallet
/// authorization session, and publishes the finalized draft through the
/// injected endpoint. All collaborator failures are folded into recorded
/// state — the wizard never discards the in-progress draft because a
/// collaborator failed.
///
/// Rendering layers read the snapshot accessors; the operation methods are
/// the only mutation entry points.
pub struct PetitionDraftWizard {
    step: WizardStep,
    draft: PetitionDraft,
    session: WalletSession,
    attempt: PublishAttempt,
    last_wallet_error: Option<WalletError>,
    connector: WalletConnector,
    endpoint: Arc<dyn PublishEndpoint>,
    publish_timeout: Option<Duration>,
}

impl PetitionDraftWizard {
    /// Open a wizard session: checks provider availability once and restores
    /// any existing authorization. The draft starts empty, the publish
    /// attempt idle.
    pub async fn open(
        provider: Arc<dyn WalletProvider>,
        endpoint: Arc<dyn PublishEndpoint>,
    ) -> Self {
        Self::open_with_timeouts(provider, endpoint, WizardTimeouts::default()).await
    }

    pub async fn open_with_timeouts(
        provider: Arc<dyn WalletProvider>,
        endpoint: Arc<dyn PublishEndpoint>,
        timeouts: WizardTimeouts,
    ) -> Self {
        let mut connector = WalletConnector::new(provider);
        if let Some(limit) = timeouts.wallet_request {
            connector = connector.with_request_timeout(limit);
        }
        let session = connector.initial_session().await;
        info!(session = session.status_label(), "petition wizard opened");
        Self {
            step: WizardStep::first(),
            draft: PetitionDraft::new(),
            session,
            attempt: PublishAttempt::Idle,
            last_wallet_error: None,
            connector,
            endpoint,
            publish_timeout: timeouts.publish,
        }
    }

    // ── Step navigation ─────────────────────────────────────────────────

    /// Move to the next step. Returns whether the step changed; a no-op at
    /// the last step and while a publish is in flight. Field completeness is
    /// not checked — steps may be revisited.
    pub fn advance(&mut self) -> bool {
        if self.attempt.is_publishing() {
            debug!("navigation ignored while publishing");
            return false;
        }
        match self.step.next() {
            Some(next) => {
                debug!(from = self.step.number(), to = next.number(), "step advanced");
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move to the previous step. Returns whether the step changed; a no-op
    /// at the first step and while a publish is in flight.
    pub fn retreat(&mut self) -> bool {
        if self.attempt.is_publishing() {
            debug!("navigation ignored while publishing");
            return false;
        }
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Completed share of the step sequence, in `[0, 1]`. Display only.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        self.step.number() as f64 / WizardStep::total() as f64
    }

    // ── Draft editing ───────────────────────────────────────────────────

    /// Write one draft field from raw text. Coercion failures surface as
    /// [`crate::error::ValidationError`]; the previous value is kept. The
    /// draft is frozen while a publish is in flight and once published.
    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<(), WizardError> {
        if self.attempt.is_publishing() {
            return Err(WizardError::Frozen("a publish attempt is in flight"));
        }
        if self.attempt.is_published() {
            return Err(WizardError::Frozen("the petition is already published"));
        }
        self.draft.set(field, value)?;
        Ok(())
    }

    // ── Wallet sub-protocol ─────────────────────────────────────────────

    /// Request wallet authorization.
    ///
    /// `Disconnected → Connecting → Connected` on success; on failure the
    /// session returns to `Disconnected` with the classified error recorded
    /// for [`Self::wallet_advisory`]. Ignored while a request is already
    /// outstanding, when already connected, and when no provider exists —
    /// `Unavailable` clears only on explicit re-initialization.
    pub async fn request_wallet_connection(&mut self) -> WalletSession {
        match &self.session {
            WalletSession::Unavailable => {
                self.last_wallet_error = Some(WalletError::Unavailable);
                return self.session.clone();
            }
            WalletSession::Connecting => {
                debug!("authorization request already outstanding");
                return self.session.clone();
            }
            WalletSession::Connected(_) => return self.session.clone(),
            WalletSession::Disconnected => {}
        }

        self.session = WalletSession::Connecting;
        self.last_wallet_error = None;
        match self.connector.request_authorization().await {
            Ok(account) => {
                info!(account = %account.short(), "wallet connected");
                self.session = WalletSession::Connected(account);
            }
            Err(err) => {
                warn!(error = %err, "wallet authorization failed");
                self.session = WalletSession::Disconnected;
                self.last_wallet_error = Some(err);
            }
        }
        self.session.clone()
    }

    // ── Publication ─────────────────────────────────────────────────────

    /// Publish the finalized draft.
    ///
    /// Preconditions: the wallet session is `Connected` and the draft
    /// satisfies the publishable invariant; violations fail with
    /// [`WizardError::NotReady`] or a validation error and change nothing.
    /// At most one attempt is in flight; once `Published`, further calls are
    /// no-ops returning the recorded confirmation. An endpoint failure is
    /// recorded as `Failed` with the draft intact, ready for retry.
    pub async fn confirm_and_publish(&mut self) -> Result<PublishAttempt, WizardError> {
        match &self.attempt {
            PublishAttempt::Publishing => {
                return Err(WizardError::NotReady("a publish attempt is already in flight"));
            }
            PublishAttempt::Published(_) => {
                debug!("petition already published, ignoring repeat confirmation");
                return Ok(self.attempt.clone());
            }
            PublishAttempt::Idle | PublishAttempt::Failed(_) => {}
        }

        let WalletSession::Connected(account) = &self.session else {
            return Err(WizardError::NotReady("wallet must be connected before publishing"));
        };
        let account = account.clone();
        self.draft.validate_publishable().map_err(WizardError::from)?;

        self.attempt = PublishAttempt::Publishing;
        info!(title = self.draft.title(), "publishing petition");

        let outcome = match self.publish_timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.endpoint.publish(&self.draft, &account))
                    .await
                {
                    Ok(result) => result,
                    Err(_) => Err(PublishError::TimedOut {
                        secs: limit.as_secs(),
                    }),
                }
            }
            None => self.endpoint.publish(&self.draft, &account).await,
        };

        match outcome {
            Ok(confirmation) => {
                info!(confirmation = %confirmation, "petition published");
                self.attempt = PublishAttempt::Published(confirmation);
            }
            Err(err) => {
                warn!(error = %err, "publication failed, draft preserved");
                self.attempt = PublishAttempt::Failed(err.advisory().to_string());
            }
        }
        Ok(self.attempt.clone())
    }

    // ── Snapshots (read-only display surface) ───────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &PetitionDraft {
        &self.draft
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    pub fn attempt(&self) -> &PublishAttempt {
        &self.attempt
    }

    /// The recorded wallet failure, if the last authorization attempt failed.
    pub fn last_wallet_error(&self) -> Option<&WalletError> {
        self.last_wallet_error.as_ref()
    }

    /// User-facing advisory for the recorded wallet failure.
    pub fn wallet_advisory(&self) -> Option<&'static str> {
        self.last_wallet_error.as_ref().map(WalletError::advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::SimulatedLedger;
    use crate::wallet::{AccountId, SimulatedWallet};

    async fn wizard_with(wallet: SimulatedWallet) -> PetitionDraftWizard {
        let ledger = SimulatedLedger::new().with_latency(Duration::ZERO);
        PetitionDraftWizard::open(Arc::new(wallet), Arc::new(ledger)).await
    }

    #[tokio::test]
    async fn step_stays_within_bounds_under_any_sequence() {
        let mut wizard = wizard_with(SimulatedWallet::available()).await;
        // A deliberately abusive navigation sequence.
        for _ in 0..3 {
            wizard.retreat();
        }
        assert_eq!(wizard.step(), WizardStep::Basics);
        for _ in 0..10 {
            wizard.advance();
        }
        assert_eq!(wizard.step(), WizardStep::Review);
        assert!(wizard.progress() <= 1.0);
        wizard.retreat();
        wizard.retreat();
        wizard.advance();
        assert_eq!(wizard.step(), WizardStep::Settings);
        assert!(wizard.progress() >= 0.25);
    }

    #[tokio::test]
    async fn progress_is_a_fraction_of_steps() {
        let mut wizard = wizard_with(SimulatedWallet::available()).await;
        assert!((wizard.progress() - 0.25).abs() < f64::EPSILON);
        wizard.advance();
        assert!((wizard.progress() - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn connecting_guard_blocks_a_second_request() {
        let mut wizard = wizard_with(SimulatedWallet::available()).await;
        wizard.session = WalletSession::Connecting;

        let session = wizard.request_wallet_connection().await;

        assert_eq!(session, WalletSession::Connecting);
        assert!(wizard.last_wallet_error().is_none());
    }

    #[tokio::test]
    async fn connected_session_ignores_reconnect() {
        let wallet =
            SimulatedWallet::available().with_authorized(AccountId::new("0xFEED00000000"));
        let mut wizard = wizard_with(wallet).await;

        let session = wizard.request_wallet_connection().await;

        assert_eq!(
            session.account().map(AccountId::as_str),
            Some("0xFEED00000000")
        );
    }

    #[tokio::test]
    async fn navigation_is_pinned_while_publishing() {
        let mut wizard = wizard_with(SimulatedWallet::available()).await;
        wizard.advance();
        wizard.attempt = PublishAttempt::Publishing;

        assert!(!wizard.advance());
        assert!(!wizard.retreat());
        assert_eq!(wizard.step(), WizardStep::Details);
    }

    #[tokio::test]
    async fn draft_is_frozen_while_publishing_and_after_publish() {
        let mut wizard = wizard_with(SimulatedWallet::available()).await;
        wizard.attempt = PublishAttempt::Publishing;
        assert!(matches!(
            wizard.update_field(DraftField::Title, "x"),
            Err(WizardError::Frozen(_))
        ));

        wizard.attempt = PublishAttempt::Published(crate::publish::ConfirmationId::new("0xfeed"));
        assert!(matches!(
            wizard.update_field(DraftField::Title, "x"),
            Err(WizardError::Frozen(_))
        ));
    }

    #[tokio::test]
    async fn publish_while_in_flight_is_not_ready() {
        let mut wizard = wizard_with(SimulatedWallet::available()).await;
        wizard.attempt = PublishAttempt::Publishing;
        let err = wizard.confirm_and_publish().await.unwrap_err();
        assert!(matches!(err, WizardError::NotReady(_)));
        assert!(wizard.attempt().is_publishing());
    }
}
