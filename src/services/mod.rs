pub mod aggregation;
pub mod dashboard;
pub mod money_format;
pub mod projection;
pub mod projection_export;
pub mod projection_plot;
pub mod projection_types;
pub mod report_config;
pub mod rounding;
