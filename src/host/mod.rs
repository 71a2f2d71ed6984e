pub mod bridge;
pub mod record;

pub use bridge::HostBridge;
pub use record::ReductionRecord;
