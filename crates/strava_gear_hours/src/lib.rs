//! Total up the moving time recorded on one piece of Strava gear.
//!
//! The pipeline is: resolve the gear by name, list every activity, keep the
//! ones that used that gear since a cutoff, then sum their moving time.

pub mod activities;
pub mod aggregate;
pub mod error;
pub mod filter;
pub mod format;
pub mod gear;
pub mod report;

#[cfg(test)]
pub(crate) mod test_utils;

pub use activities::{DEFAULT_PAGE_SIZE, list_all_activities};
pub use aggregate::sum_moving_time;
pub use error::{GearHoursError, GearHoursResult};
pub use filter::{ActivityFilter, apply_filters, filter_activities};
pub use gear::resolve_gear_by_name;
pub use report::{GearHoursReport, ReportQuery, build_report};
