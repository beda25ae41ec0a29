#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod publish;
pub mod wallet;
pub mod wizard;

pub use config::Config;
pub use draft::{Category, DraftField, PetitionDraft, PublishRecord};
pub use error::{
    PlatformError, PublishError, Result, ValidationError, WalletError, WizardError,
};
pub use publish::{ConfirmationId, PublishAttempt, PublishEndpoint, SimulatedLedger};
pub use wallet::{AccountId, SimulatedWallet, WalletConnector, WalletProvider, WalletSession};
pub use wizard::{PetitionDraftWizard, WizardStep, WizardTimeouts};
