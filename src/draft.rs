use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::ValidationError;
use crate::wallet::AccountId;

/// Fixed category set offered to petition authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Category {
    #[strum(serialize = "Environment & Climate")]
    #[serde(rename = "Environment & Climate")]
    EnvironmentClimate,
    #[strum(serialize = "Human Rights")]
    #[serde(rename = "Human Rights")]
    HumanRights,
    #[strum(serialize = "Education")]
    Education,
    #[strum(serialize = "Healthcare")]
    Healthcare,
    #[strum(serialize = "Technology & Privacy")]
    #[serde(rename = "Technology & Privacy")]
    TechnologyPrivacy,
    #[strum(serialize = "Politics & Government")]
    #[serde(rename = "Politics & Government")]
    PoliticsGovernment,
    #[strum(serialize = "Social Justice")]
    #[serde(rename = "Social Justice")]
    SocialJustice,
    #[strum(serialize = "Animal Rights")]
    #[serde(rename = "Animal Rights")]
    AnimalRights,
    #[strum(serialize = "Economic Policy")]
    #[serde(rename = "Economic Policy")]
    EconomicPolicy,
    #[strum(serialize = "Community Development")]
    #[serde(rename = "Community Development")]
    CommunityDevelopment,
}

impl Category {
    pub const ALL: [Self; 10] = [
        Self::EnvironmentClimate,
        Self::HumanRights,
        Self::Education,
        Self::Healthcare,
        Self::TechnologyPrivacy,
        Self::PoliticsGovernment,
        Self::SocialJustice,
        Self::AnimalRights,
        Self::EconomicPolicy,
        Self::CommunityDevelopment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::EnvironmentClimate => "Environment & Climate",
            Self::HumanRights => "Human Rights",
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
            Self::TechnologyPrivacy => "Technology & Privacy",
            Self::PoliticsGovernment => "Politics & Government",
            Self::SocialJustice => "Social Justice",
            Self::AnimalRights => "Animal Rights",
            Self::EconomicPolicy => "Economic Policy",
            Self::CommunityDevelopment => "Community Development",
        }
    }

    pub fn from_name(raw: &str) -> Option<Self> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
    }
}

/// Addressable draft fields. Writes are routed through
/// [`PetitionDraft::set`] so coercion happens in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DraftField {
    Title,
    Description,
    Category,
    Recipient,
    Location,
    Target,
    Deadline,
    Tags,
}

/// The in-progress petition being authored. Lives only for the duration of a
/// wizard session; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetitionDraft {
    title: String,
    description: String,
    category: Option<Category>,
    recipient: String,
    location: Option<String>,
    target: Option<u32>,
    deadline: Option<NaiveDate>,
    tags: Option<String>,
}

impl PetitionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one field from its raw textual form.
    ///
    /// Coercion only: numeric and date fields must parse, the category must
    /// belong to the fixed set. Completeness is not checked here — steps may
    /// be revisited in any order — but a value that cannot be represented is
    /// rejected rather than silently defaulted. An empty value clears
    /// optional fields.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<(), ValidationError> {
        match field {
            DraftField::Title => self.title = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::Recipient => self.recipient = value.to_string(),
            DraftField::Category => {
                self.category = if value.trim().is_empty() {
                    None
                } else {
                    Some(Category::from_name(value).ok_or_else(|| {
                        ValidationError::UnknownCategory {
                            raw: value.trim().to_string(),
                        }
                    })?)
                };
            }
            DraftField::Target => {
                let raw = value.trim();
                self.target = if raw.is_empty() {
                    None
                } else {
                    let parsed = raw
                        .parse::<u32>()
                        .ok()
                        .filter(|t| *t > 0)
                        .ok_or_else(|| ValidationError::InvalidTarget {
                            raw: raw.to_string(),
                        })?;
                    Some(parsed)
                };
            }
            DraftField::Deadline => {
                let raw = value.trim();
                self.deadline = if raw.is_empty() {
                    None
                } else {
                    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                        ValidationError::InvalidDeadline {
                            raw: raw.to_string(),
                        }
                    })?;
                    Some(parsed)
                };
            }
            DraftField::Location => {
                self.location = non_empty(value);
            }
            DraftField::Tags => {
                self.tags = non_empty(value);
            }
        }
        Ok(())
    }

    /// The publishable invariant: `title`, `category`, `recipient` and a
    /// positive `target` must all be present. Reports the first missing
    /// field so the UI can anchor the message.
    pub fn validate_publishable(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "title" });
        }
        if self.category.is_none() {
            return Err(ValidationError::MissingField { field: "category" });
        }
        if self.recipient.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "recipient" });
        }
        if !self.target.is_some_and(|t| t > 0) {
            return Err(ValidationError::MissingField { field: "target" });
        }
        Ok(())
    }

    pub fn is_publishable(&self) -> bool {
        self.validate_publishable().is_ok()
    }

    /// Finalize the draft into the record handed to a publish endpoint.
    pub fn to_record(&self, creator: &AccountId) -> Result<PublishRecord, ValidationError> {
        self.validate_publishable()?;
        let category = self
            .category
            .ok_or(ValidationError::MissingField { field: "category" })?;
        let target = self
            .target
            .ok_or(ValidationError::MissingField { field: "target" })?;
        Ok(PublishRecord {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            category,
            recipient: self.recipient.trim().to_string(),
            target,
            deadline: self.deadline,
            location: self.location.clone(),
            tags: self.tag_list(),
            creator: creator.to_string(),
            created_at: Utc::now(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }

    /// The comma-separated tags field split into trimmed, non-empty entries.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Finalized, serializable form of a draft as submitted for publication.
#[derive(Debug, Clone, Serialize)]
pub struct PublishRecord {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub recipient: String,
    pub target: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}
