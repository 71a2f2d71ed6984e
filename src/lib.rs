//! Sum-of-squares reduction core for host statistical environments.
//!
//! The host constructs a finite sequence of doubles, calls through the
//! `host` boundary, and consumes a single scalar. Argument marshaling and
//! environment registration stay on the host side of that boundary.

pub mod host;
pub mod math;
pub mod telemetry;

pub use host::{HostBridge, ReductionRecord};
pub use math::StatsKernel;
