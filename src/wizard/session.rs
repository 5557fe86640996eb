//! The quote form session.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::compute_result;
use crate::catalog::Catalog;
use crate::error::{QuoteError, QuoteResult};
use crate::models::{
    CatalogField, FieldValue, LysScholarship, PaymentMethod, QuoteOutcome, Selection,
    SiblingDiscount, Waiver, parse_admit_year,
};

use super::step::WizardStep;

/// A user's progress through the quote form.
///
/// Catalog-derived fields only accept values the catalog currently offers.
/// Changing an earlier field clears any later field whose value is no longer
/// offered, and choosing a non-LYS admit type clears the LYS scholarship.
///
/// # Example
///
/// ```
/// use tuition_engine::catalog::Catalog;
/// use tuition_engine::models::{PaymentMethod, SiblingDiscount, Waiver};
/// use tuition_engine::wizard::{WizardSession, WizardStep};
///
/// let catalog = Catalog::fallback();
/// let mut session = WizardSession::new();
///
/// session.select_admit_year(&catalog, 2024)?;
/// session.select_academic_program(&catalog, "Other")?;
/// session.select_admit_type(&catalog, "International")?;
/// assert!(session.next_step());
///
/// session.select_waiver(Waiver::None);
/// session.select_sibling_discount(SiblingDiscount::Yes);
/// assert!(session.next_step());
///
/// session.select_citizenship(&catalog, "Other")?;
/// session.select_payment_method(PaymentMethod::SinglePayment);
/// assert_eq!(session.step(), WizardStep::FinalDetails);
/// assert!(session.quote(&catalog).result().is_some());
/// # Ok::<(), tuition_engine::error::QuoteError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSession {
    selection: Selection,
    step: WizardStep,
}

impl WizardSession {
    /// Starts a new session on the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Chooses the admit year.
    pub fn select_admit_year(&mut self, catalog: &Catalog, year: i32) -> QuoteResult<()> {
        self.select_catalog_value(catalog, CatalogField::AdmitYear, FieldValue::Year(year))
    }

    /// Chooses the admit year from its textual form.
    pub fn select_admit_year_text(&mut self, catalog: &Catalog, text: &str) -> QuoteResult<()> {
        self.select_admit_year(catalog, parse_admit_year(text)?)
    }

    /// Chooses the academic program.
    pub fn select_academic_program(
        &mut self,
        catalog: &Catalog,
        program: impl Into<String>,
    ) -> QuoteResult<()> {
        self.select_catalog_value(
            catalog,
            CatalogField::AcademicProgram,
            FieldValue::Text(program.into()),
        )
    }

    /// Chooses the admit type.
    pub fn select_admit_type(
        &mut self,
        catalog: &Catalog,
        admit_type: impl Into<String>,
    ) -> QuoteResult<()> {
        self.select_catalog_value(
            catalog,
            CatalogField::AdmitType,
            FieldValue::Text(admit_type.into()),
        )
    }

    /// Chooses the citizenship category.
    pub fn select_citizenship(
        &mut self,
        catalog: &Catalog,
        citizenship: impl Into<String>,
    ) -> QuoteResult<()> {
        self.select_catalog_value(
            catalog,
            CatalogField::Citizenship,
            FieldValue::Text(citizenship.into()),
        )
    }

    /// Chooses the LYS scholarship tier.
    ///
    /// Ignored unless the admit type is LYS.
    pub fn select_lys_scholarship(&mut self, tier: LysScholarship) {
        if self.selection.is_lys_admission() {
            self.selection.lys_scholarship = Some(tier);
        }
    }

    /// Chooses the waiver.
    pub fn select_waiver(&mut self, waiver: Waiver) {
        self.selection.waiver = Some(waiver);
    }

    /// Answers the sibling discount question.
    pub fn select_sibling_discount(&mut self, sibling: SiblingDiscount) {
        self.selection.sibling_discount = Some(sibling);
    }

    /// Chooses the payment method.
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.selection.payment_method = Some(method);
    }

    /// Returns the options currently offered for a catalog field.
    pub fn options(&self, catalog: &Catalog, field: CatalogField) -> Vec<FieldValue> {
        catalog.options_for(field, &self.selection)
    }

    /// Returns true if the current step is complete.
    pub fn can_advance(&self) -> bool {
        self.is_step_complete(self.step)
    }

    /// Returns true if every step is complete.
    pub fn is_complete(&self) -> bool {
        WizardStep::ALL
            .into_iter()
            .all(|step| self.is_step_complete(step))
    }

    /// Moves to the next step if the current one is complete.
    ///
    /// Returns true if the step changed.
    pub fn next_step(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Moves back one step. Returns true if the step changed.
    pub fn prev_step(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Discards every choice and returns to the first step.
    pub fn start_over(&mut self) {
        *self = Self::new();
    }

    /// Looks up the matching record and prices it.
    pub fn quote(&self, catalog: &Catalog) -> QuoteOutcome {
        match catalog.find_match(&self.selection) {
            Some(record) => QuoteOutcome::Quoted(compute_result(record, &self.selection)),
            None => QuoteOutcome::NoMatch,
        }
    }

    fn is_step_complete(&self, step: WizardStep) -> bool {
        let selection = &self.selection;
        match step {
            WizardStep::BasicInfo => {
                selection.admit_year.is_some()
                    && selection.academic_program.is_some()
                    && selection.admit_type.is_some()
            }
            WizardStep::AdditionalOptions => {
                selection.waiver.is_some()
                    && selection.sibling_discount.is_some()
                    && (!selection.is_lys_admission() || selection.lys_scholarship.is_some())
            }
            WizardStep::FinalDetails => {
                selection.citizenship.is_some() && selection.payment_method.is_some()
            }
        }
    }

    fn select_catalog_value(
        &mut self,
        catalog: &Catalog,
        field: CatalogField,
        value: FieldValue,
    ) -> QuoteResult<()> {
        if !catalog.offers(field, &self.selection, &value) {
            return Err(QuoteError::InvalidOption {
                field: field.key().to_string(),
                value: value.to_string(),
            });
        }

        match value {
            FieldValue::Year(year) => self.selection.admit_year = Some(year),
            FieldValue::Text(text) => match field {
                CatalogField::AcademicProgram => self.selection.academic_program = Some(text),
                CatalogField::AdmitType => self.selection.admit_type = Some(text),
                CatalogField::Citizenship => self.selection.citizenship = Some(text),
                CatalogField::AdmitYear => {}
            },
        }
        self.reconcile(catalog);
        Ok(())
    }

    /// Clears dependent choices invalidated by an earlier change.
    fn reconcile(&mut self, catalog: &Catalog) {
        for field in CatalogField::ALL {
            let Some(value) = self.selection.catalog_value(field) else {
                continue;
            };
            if !catalog.offers(field, &self.selection, &value) {
                debug!(field = field.key(), value = %value, "Clearing choice no longer offered");
                self.selection.clear_catalog_value(field);
            }
        }

        if !self.selection.is_lys_admission() {
            self.selection.lys_scholarship = None;
        }
    }
}
