//! The three-step quote form.
//!
//! A [`WizardSession`] replaces loose form state with a typed selection and
//! current step. Catalog-derived choices are checked against the catalog as
//! they are made, and dependent choices are cleared when an earlier one
//! changes.

mod session;
mod step;

pub use session::WizardSession;
pub use step::WizardStep;
