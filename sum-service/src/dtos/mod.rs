pub mod sums;

pub use sums::{SumParams, SumRequest};
