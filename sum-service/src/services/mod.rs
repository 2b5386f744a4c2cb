pub mod metrics;

pub use metrics::{get_metrics, init_metrics, record_sum, SumOutcome};
