//! Diagnostic report rendering.
//!
//! When resolution fails the caller dumps every declared variable as a
//! fixed-width table so the operator can see what is missing.
//!
//! - [`wrap`] - Width-aware line wrapping for a single cell
//! - [`table`] - The bordered four-column table

pub mod table;
pub mod wrap;

pub use table::{EnvTable, ReportOptions, TableRow};
pub use wrap::{display_width, wrap_lines};
