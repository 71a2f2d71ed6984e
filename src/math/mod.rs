pub mod stats;

pub use stats::StatsKernel;
