pub mod metrics;
pub mod properties;
