//! Localized result breakdown.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::i18n::{Language, Translations, format_amount};
use crate::models::{
    Currency, DiscountResult, DiscountStage, PaymentOutcome, QuoteOutcome, Selection,
};

/// One label/value row of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    /// The translated label.
    pub label: String,
    /// The displayed value.
    pub value: String,
}

impl ReportLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A rendered quote, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteReport {
    /// The translated results title.
    pub title: String,
    /// The translated results subtitle.
    pub subtitle: String,
    /// Rows in display order.
    pub lines: Vec<ReportLine>,
}

impl QuoteReport {
    /// Returns the value of the first line with the given label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

/// Renders a quote outcome as translated rows.
///
/// A quote echoes the selection, then shows the discount breakdown when any
/// discount applies, then the payable amounts for the payment method. A
/// missing match renders as a single warning row.
///
/// # Example
///
/// ```
/// use tuition_engine::i18n::{Language, Translations};
/// use tuition_engine::models::{QuoteOutcome, Selection};
/// use tuition_engine::report::render_quote;
///
/// let report = render_quote(
///     &Selection::new(),
///     &QuoteOutcome::NoMatch,
///     &Translations::fallback(),
///     Language::English,
/// );
/// assert_eq!(report.lines.len(), 1);
/// ```
pub fn render_quote(
    selection: &Selection,
    outcome: &QuoteOutcome,
    translations: &Translations,
    language: Language,
) -> QuoteReport {
    let lines = match outcome {
        QuoteOutcome::Quoted(result) => {
            let mut lines = Vec::new();
            let renderer = LineRenderer {
                translations,
                language,
                currency: &result.currency,
            };
            renderer.push_selection(&mut lines, selection);
            if result.has_discount() {
                renderer.push_discounts(&mut lines, result);
            }
            renderer.push_payment(&mut lines, &result.payment);
            lines
        }
        QuoteOutcome::NoMatch => vec![ReportLine::new(
            translations.translate(language, "results.warning", &[]),
            translations.translate(language, "results.noDataFound", &[]),
        )],
    };

    QuoteReport {
        title: translations.translate(language, "results.title", &[]),
        subtitle: translations.translate(language, "results.subtitle", &[]),
        lines,
    }
}

struct LineRenderer<'a> {
    translations: &'a Translations,
    language: Language,
    currency: &'a Currency,
}

impl LineRenderer<'_> {
    fn label(&self, field: &str) -> String {
        self.translations
            .translate(self.language, &format!("results.fields.{}", field), &[])
    }

    fn option(&self, field: &str, value: &str) -> String {
        self.translations.option_label(self.language, field, value)
    }

    fn money(&self, amount: Decimal) -> String {
        let formatted = format_amount(amount, self.language);
        match self.currency.code() {
            "" => formatted,
            code => format!("{} {}", formatted, code),
        }
    }

    fn push_selection(&self, lines: &mut Vec<ReportLine>, selection: &Selection) {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let admit_year = selection
            .admit_year
            .map(|year| year.to_string())
            .unwrap_or_default();

        lines.push(ReportLine::new(self.label("admitYear"), admit_year));
        lines.push(ReportLine::new(
            self.label("academicProgram"),
            self.option("academicProgram", &text(&selection.academic_program)),
        ));
        lines.push(ReportLine::new(
            self.label("admitType"),
            self.option("admitType", &text(&selection.admit_type)),
        ));
        if selection.is_lys_admission() {
            lines.push(ReportLine::new(
                self.label("lysScholarship"),
                self.option(
                    "lysScholarship",
                    selection.effective_lys_scholarship().as_str(),
                ),
            ));
        }
        lines.push(ReportLine::new(
            self.label("waivers"),
            self.option("waivers", selection.effective_waiver().as_str()),
        ));
        lines.push(ReportLine::new(
            self.label("siblingDiscount"),
            self.option(
                "siblingDiscount",
                selection.effective_sibling_discount().as_str(),
            ),
        ));
        lines.push(ReportLine::new(
            self.label("citizenship"),
            self.option("citizenship", &text(&selection.citizenship)),
        ));
        lines.push(ReportLine::new(
            self.label("paymentMethods"),
            self.option(
                "paymentMethods",
                selection.effective_payment_method().as_str(),
            ),
        ));
    }

    fn push_discounts(&self, lines: &mut Vec<ReportLine>, result: &DiscountResult) {
        lines.push(ReportLine::new(
            self.label("originalFee"),
            self.money(result.base_tuition_fee),
        ));

        for stage in result.stages().into_iter().filter(|stage| stage.is_applied()) {
            let key = match stage.stage {
                DiscountStage::LysScholarship => "lysDiscount",
                DiscountStage::Waiver => "waiverDiscount",
                DiscountStage::Sibling => "siblingDiscountLabel",
            };
            lines.push(ReportLine::new(
                format!("{} ({}%)", self.label(key), stage.percentage.normalize()),
                format!("-{}", self.money(stage.amount)),
            ));
        }

        lines.push(ReportLine::new(
            format!(
                "{} ({}%)",
                self.label("totalDiscount"),
                result.total_discount_percentage.normalize()
            ),
            format!("-{}", self.money(result.total_discount_amount)),
        ));
    }

    fn push_payment(&self, lines: &mut Vec<ReportLine>, payment: &PaymentOutcome) {
        match payment {
            PaymentOutcome::SinglePayment { total } => {
                lines.push(ReportLine::new(
                    self.label("totalTuitionFee"),
                    self.money(*total),
                ));
            }
            PaymentOutcome::Installment {
                fall,
                spring,
                total_annual,
            } => {
                lines.push(ReportLine::new(
                    self.label("fallSemesterFee"),
                    self.money(fall.final_fee),
                ));
                lines.push(ReportLine::new(
                    self.label("springSemesterFee"),
                    self.money(spring.final_fee),
                ));
                lines.push(ReportLine::new(
                    self.label("totalAnnualFee"),
                    self.money(*total_annual),
                ));
            }
            PaymentOutcome::InstallmentUnavailable { total } => {
                lines.push(ReportLine::new(
                    self.label("totalTuitionFee"),
                    self.money(*total),
                ));
                lines.push(ReportLine::new(
                    self.label("note"),
                    self.label("installmentNotAvailable"),
                ));
            }
        }
    }
}
