pub mod chart;
pub mod reporting;
