use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `DecentralizeIt`.
///
/// Each subsystem defines its own error enum. Library callers can match on
/// these to decide recovery strategy; the binary continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum PlatformError {
    // ── Draft / field validation ────────────────────────────────────────
    #[error("draft: {0}")]
    Draft(#[from] ValidationError),

    // ── Wallet authorization ────────────────────────────────────────────
    #[error("wallet: {0}")]
    Wallet(#[from] WalletError),

    // ── Publication ─────────────────────────────────────────────────────
    #[error("publish: {0}")]
    Publish(#[from] PublishError),

    // ── Wizard protocol ─────────────────────────────────────────────────
    #[error("wizard: {0}")]
    Wizard(#[from] WizardError),

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Draft validation errors ─────────────────────────────────────────────────

/// A draft field is missing or a raw value failed coercion. Always recovered
/// locally and surfaced as a field-level message, never fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("signature target must be a positive whole number, got {raw:?}")]
    InvalidTarget { raw: String },

    #[error("unknown category {raw:?}")]
    UnknownCategory { raw: String },

    #[error("deadline must be a calendar date (YYYY-MM-DD), got {raw:?}")]
    InvalidDeadline { raw: String },
}

// ─── Wallet errors ──────────────────────────────────────────────────────────

/// Classification of wallet-authorization failures. All variants except
/// `Unavailable` are retryable by re-requesting the connection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("no wallet provider is available")]
    Unavailable,

    #[error("authorization rejected by the user")]
    UserRejected,

    #[error("an authorization request is already pending in the wallet")]
    RequestAlreadyPending,

    #[error("wallet connection failed: {0}")]
    ConnectionFailed(String),

    #[error("wallet request timed out after {secs}s")]
    TimedOut { secs: u64 },
}

impl WalletError {
    /// User-facing advisory for this failure class, suitable for a dismissible
    /// banner next to the connect action.
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Unavailable => {
                "No wallet provider detected. Please install a wallet to continue."
            }
            Self::UserRejected => "Connection rejected. Please approve the connection request.",
            Self::RequestAlreadyPending => {
                "Connection request pending. Please check your wallet."
            }
            Self::ConnectionFailed(_) | Self::TimedOut { .. } => {
                "Failed to connect wallet. Please try again."
            }
        }
    }
}

// ─── Publish errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("publication failed: {0}")]
    Failed(String),

    #[error("publication timed out after {secs}s")]
    TimedOut { secs: u64 },
}

impl PublishError {
    /// User-facing advisory; the draft is preserved and the attempt may be
    /// retried.
    pub fn advisory(&self) -> &'static str {
        "Failed to publish to the blockchain. Please try again."
    }
}

// ─── Wizard protocol errors ─────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// A publish was requested before its preconditions held. No state change.
    #[error("not ready to publish: {0}")]
    NotReady(&'static str),

    /// The draft is not editable in the current publish state.
    #[error("draft is frozen: {0}")]
    Frozen(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

// ─── Config errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, PlatformError>;
