//! The calculator facade.
//!
//! Ties the catalog, the translations and form sessions together for a
//! front end that only needs to collect choices and show results.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;
use uuid::Uuid;

use crate::catalog::{Catalog, CatalogLoader};
use crate::config::CalculatorConfig;
use crate::i18n::{Language, Translations};
use crate::models::QuoteOutcome;
use crate::report::{QuoteReport, render_quote};
use crate::wizard::WizardSession;

/// Shared calculator state.
///
/// Cloning is cheap; the catalog and translations are shared and never
/// mutated.
///
/// # Example
///
/// ```
/// use tuition_engine::calculator::TuitionCalculator;
/// use tuition_engine::catalog::Catalog;
/// use tuition_engine::i18n::{Language, Translations};
/// use tuition_engine::models::{PaymentMethod, SiblingDiscount, Waiver};
///
/// let calculator = TuitionCalculator::new(Catalog::fallback(), Translations::fallback());
/// let catalog = calculator.catalog();
///
/// let mut session = calculator.new_session();
/// session.select_admit_year(catalog, 2024)?;
/// session.select_academic_program(catalog, "Other")?;
/// session.select_admit_type(catalog, "International")?;
/// session.select_waiver(Waiver::None);
/// session.select_sibling_discount(SiblingDiscount::No);
/// session.select_citizenship(catalog, "Other")?;
/// session.select_payment_method(PaymentMethod::SinglePayment);
///
/// assert!(calculator.quote(&session).result().is_some());
/// println!("{}", calculator.render(&session, Language::English));
/// # Ok::<(), tuition_engine::error::QuoteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TuitionCalculator {
    catalog: Arc<Catalog>,
    translations: Arc<Translations>,
    default_language: Language,
}

impl TuitionCalculator {
    /// Creates a calculator over a catalog and translations.
    pub fn new(catalog: Catalog, translations: Translations) -> Self {
        Self {
            catalog: Arc::new(catalog),
            translations: Arc::new(translations),
            default_language: Language::default(),
        }
    }

    /// Creates a calculator from loaded configuration.
    ///
    /// An unreadable or invalid data file falls back to the built-in
    /// sample records.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        let catalog = CatalogLoader::load_or_fallback(config.data_path());
        Self::new(catalog, config.translations().clone())
            .with_default_language(config.default_language())
    }

    /// Sets the language used when none is requested.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Returns the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the translations.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Returns the default language.
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Starts a new form session.
    pub fn new_session(&self) -> WizardSession {
        WizardSession::new()
    }

    /// Prices the session's current selection.
    pub fn quote(&self, session: &WizardSession) -> QuoteOutcome {
        let quote_id = Uuid::new_v4();
        let start_time = Instant::now();
        let outcome = session.quote(&self.catalog);
        let duration = start_time.elapsed();

        match &outcome {
            QuoteOutcome::Quoted(result) => info!(
                quote_id = %quote_id,
                final_tuition_fee = %result.final_tuition_fee,
                total_discount_percentage = %result.total_discount_percentage,
                currency = %result.currency,
                duration_us = duration.as_micros(),
                "Quote calculated"
            ),
            QuoteOutcome::NoMatch => info!(
                quote_id = %quote_id,
                duration_us = duration.as_micros(),
                "No tuition record matches the selection"
            ),
        }

        outcome
    }

    /// Prices the session and renders the result in `language`.
    pub fn render(&self, session: &WizardSession, language: Language) -> QuoteReport {
        let outcome = self.quote(session);
        render_quote(session.selection(), &outcome, &self.translations, language)
    }
}
