pub mod aggregation;
pub mod campaign_yaml;
pub mod projection;
pub mod projection_plot;
pub mod projection_types;
pub mod projection_yaml;
pub mod range_filter;
