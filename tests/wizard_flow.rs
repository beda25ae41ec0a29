use std::sync::Arc;
use std::time::Duration;

use decentralizeit::{
    AccountId, DraftField, PetitionDraftWizard, PublishError, SimulatedLedger, SimulatedWallet,
    ValidationError, WizardError, WizardTimeouts,
};

fn connected_wallet() -> SimulatedWallet {
    SimulatedWallet::available()
        .with_authorized(AccountId::new("0xABCDEF0123456789ABCDEF0123456789ABCDEF01"))
}

fn instant_ledger() -> Arc<SimulatedLedger> {
    Arc::new(SimulatedLedger::new().with_latency(Duration::ZERO))
}

fn fill_clean_air_act(wizard: &mut PetitionDraftWizard) {
    wizard.update_field(DraftField::Title, "Clean Air Act").unwrap();
    wizard
        .update_field(DraftField::Category, "Environment & Climate")
        .unwrap();
    wizard.update_field(DraftField::Recipient, "City Council").unwrap();
    wizard.update_field(DraftField::Target, "5000").unwrap();
}

#[tokio::test]
async fn connected_wallet_and_complete_draft_publish() {
    let ledger = instant_ledger();
    let mut wizard =
        PetitionDraftWizard::open(Arc::new(connected_wallet()), ledger.clone()).await;
    fill_clean_air_act(&mut wizard);

    let attempt = wizard.confirm_and_publish().await.unwrap();

    let confirmation = attempt.confirmation_id().expect("should be published");
    assert!(confirmation.as_str().starts_with("0x"));
    assert!(!confirmation.as_str().is_empty());
    assert_eq!(ledger.publish_count(), 1);
}

#[tokio::test]
async fn disconnected_wallet_is_not_ready_and_nothing_reaches_the_ledger() {
    let ledger = instant_ledger();
    let mut wizard =
        PetitionDraftWizard::open(Arc::new(SimulatedWallet::available()), ledger.clone()).await;
    fill_clean_air_act(&mut wizard);

    let err = wizard.confirm_and_publish().await.unwrap_err();

    assert!(matches!(err, WizardError::NotReady(_)));
    assert_eq!(wizard.attempt().status_label(), "idle");
    assert_eq!(ledger.publish_count(), 0);
}

#[tokio::test]
async fn missing_recipient_fails_validation_with_attempt_untouched() {
    let ledger = instant_ledger();
    let mut wizard =
        PetitionDraftWizard::open(Arc::new(connected_wallet()), ledger.clone()).await;
    fill_clean_air_act(&mut wizard);
    wizard.update_field(DraftField::Recipient, "").unwrap();

    let err = wizard.confirm_and_publish().await.unwrap_err();

    assert_eq!(
        err,
        WizardError::Validation(ValidationError::MissingField { field: "recipient" })
    );
    assert_eq!(wizard.attempt().status_label(), "idle");
    assert_eq!(ledger.publish_count(), 0);
}

#[tokio::test]
async fn repeat_confirmation_after_publish_is_a_no_op() {
    let ledger = instant_ledger();
    let mut wizard =
        PetitionDraftWizard::open(Arc::new(connected_wallet()), ledger.clone()).await;
    fill_clean_air_act(&mut wizard);

    let first = wizard.confirm_and_publish().await.unwrap();
    let second = wizard.confirm_and_publish().await.unwrap();

    assert_eq!(first.confirmation_id(), second.confirmation_id());
    assert_eq!(ledger.publish_count(), 1, "must not re-publish");
}

#[tokio::test]
async fn failed_publish_preserves_the_draft_and_retries_to_success() {
    let ledger = Arc::new(
        SimulatedLedger::new()
            .with_latency(Duration::ZERO)
            .fail_next(PublishError::Failed("node unreachable".into())),
    );
    let mut wizard =
        PetitionDraftWizard::open(Arc::new(connected_wallet()), ledger.clone()).await;
    fill_clean_air_act(&mut wizard);
    let draft_before = wizard.draft().clone();

    let failed = wizard.confirm_and_publish().await.unwrap();
    assert_eq!(failed.status_label(), "failed");
    assert!(failed.error_message().unwrap().contains("try again"));
    assert_eq!(wizard.draft(), &draft_before, "draft must survive a failure");

    let retried = wizard.confirm_and_publish().await.unwrap();
    assert!(retried.is_published());
    assert_eq!(wizard.draft(), &draft_before);
    assert_eq!(ledger.publish_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn slow_ledger_hits_the_bounded_wait_and_stays_retryable() {
    let ledger = Arc::new(SimulatedLedger::new().with_latency(Duration::from_secs(60)));
    let mut wizard = PetitionDraftWizard::open_with_timeouts(
        Arc::new(connected_wallet()),
        ledger.clone(),
        WizardTimeouts {
            wallet_request: None,
            publish: Some(Duration::from_secs(5)),
        },
    )
    .await;
    fill_clean_air_act(&mut wizard);

    let attempt = wizard.confirm_and_publish().await.unwrap();

    assert_eq!(attempt.status_label(), "failed");
    assert!(attempt.error_message().unwrap().contains("try again"));
    // The failed attempt may be retried; nothing is frozen.
    assert!(wizard.update_field(DraftField::Title, "Clean Air Act II").is_ok());
}

#[tokio::test]
async fn editing_is_rejected_once_published() {
    let mut wizard =
        PetitionDraftWizard::open(Arc::new(connected_wallet()), instant_ledger()).await;
    fill_clean_air_act(&mut wizard);
    wizard.confirm_and_publish().await.unwrap();

    let err = wizard
        .update_field(DraftField::Title, "Rewritten")
        .unwrap_err();
    assert!(matches!(err, WizardError::Frozen(_)));
    assert_eq!(wizard.draft().title(), "Clean Air Act");
}
