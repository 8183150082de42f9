mod metrics;

pub use metrics::MetricsRecord;
