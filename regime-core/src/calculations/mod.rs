//! Tax computation for both regimes.
//!
//! [`schedule`] holds the fixed bracket tables and the peel-from-the-top walk;
//! [`engine`] ties the schedules to a deduction catalog and compares regimes.

pub mod common;
pub mod engine;
pub mod schedule;

pub use engine::TaxEngine;
pub use schedule::{SlabCharge, TaxBreakdown, TaxSchedule};
