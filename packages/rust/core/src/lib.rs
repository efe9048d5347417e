//! Employee query pipeline and the fixed report built on top of it.
//!
//! `query` holds the pure list operations, `report` runs them in order over a
//! roster, and `render` turns the result into console text or JSON.

pub mod query;
pub mod render;
pub mod report;
pub mod sample;

pub use report::{Report, ReportPlan, Section, SectionBody, run_report};
pub use sample::{load_roster, sample_roster};
