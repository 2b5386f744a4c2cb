use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of adding two integers, serialized as `{"sum": N}`.
///
/// Operands are 32-bit; the sum is widened to 64 bits so every pair of
/// operands has an exact result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumResult {
    pub sum: i64,
}

impl SumResult {
    pub fn of(number_one: i32, number_two: i32) -> Self {
        Self {
            sum: i64::from(number_one) + i64::from(number_two),
        }
    }
}

/// How the two operands reached the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    RequestParam,
    PathVariable,
    RequestBody,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::RequestParam => "request_param",
            Transport::PathVariable => "path_variable",
            Transport::RequestBody => "request_body",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
