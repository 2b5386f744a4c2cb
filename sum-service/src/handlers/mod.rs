//! HTTP handlers for sum-service.

pub mod health;
pub mod metrics;
pub mod sums;

pub use health::{health_check, not_found, readiness_check};
pub use sums::{sum_path_variable, sum_request_body, sum_request_param};
