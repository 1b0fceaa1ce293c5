//! Result presentation: radar chart series and assessment reports.

mod chart;
mod summary;

pub use chart::*;
pub use summary::*;
