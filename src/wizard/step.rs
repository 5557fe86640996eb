//! Wizard steps.

use serde::{Deserialize, Serialize};

/// One page of the three-step quote form.
///
/// # Example
///
/// ```
/// use tuition_engine::wizard::WizardStep;
///
/// assert_eq!(WizardStep::BasicInfo.number(), 1);
/// assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::AdditionalOptions));
/// assert_eq!(WizardStep::FinalDetails.next(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Admit year, academic program and admit type.
    #[default]
    BasicInfo,
    /// LYS scholarship, waiver and sibling discount.
    AdditionalOptions,
    /// Citizenship and payment method.
    FinalDetails,
}

impl WizardStep {
    /// The number of steps in the wizard.
    pub const MAX_STEPS: u8 = 3;

    /// All steps in order.
    pub const ALL: [WizardStep; 3] = [
        WizardStep::BasicInfo,
        WizardStep::AdditionalOptions,
        WizardStep::FinalDetails,
    ];

    /// Returns the 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::AdditionalOptions => 2,
            WizardStep::FinalDetails => 3,
        }
    }

    /// Returns the step with the given 1-based number.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    /// Returns the following step, if any.
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Returns the preceding step, if any.
    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Returns true for the first step.
    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    /// Returns true for the last step.
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Returns the translation key of the step title.
    pub fn title_key(&self) -> String {
        format!("steps.step{}.title", self.number())
    }
}
