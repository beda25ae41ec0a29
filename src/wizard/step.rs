/// Ordered steps of the petition draft wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Basics,
    Details,
    Settings,
    Review,
}

impl WizardStep {
    pub const ALL: [Self; 4] = [Self::Basics, Self::Details, Self::Settings, Self::Review];

    pub fn first() -> Self {
        Self::ALL[0]
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// One-based position for display (`step 2 of 4`).
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn total() -> usize {
        Self::ALL.len()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Basics => "Basic Information",
            Self::Details => "Petition Details",
            Self::Settings => "Campaign Settings",
            Self::Review => "Review & Publish",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Basics => "Start with the basics - title, category and recipient",
            Self::Details => "Tell your story and explain why this matters",
            Self::Settings => "Set your goals and campaign parameters",
            Self::Review => "Review everything before publishing",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() + 1 == Self::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_ordered_and_bounded() {
        assert_eq!(WizardStep::first(), WizardStep::Basics);
        assert_eq!(WizardStep::Basics.next(), Some(WizardStep::Details));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::Basics.previous(), None);
        assert_eq!(WizardStep::Review.previous(), Some(WizardStep::Settings));
        assert!(WizardStep::Review.is_last());
    }

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(WizardStep::Basics.number(), 1);
        assert_eq!(WizardStep::Review.number(), WizardStep::total());
    }
}
