pub mod sum;

pub use sum::{SumResult, Transport};
