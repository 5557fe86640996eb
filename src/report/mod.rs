//! Rendering of quote outcomes into translated label/value rows.

mod breakdown;
mod progress;

pub use breakdown::{QuoteReport, ReportLine, render_quote};
pub use progress::step_counter;
