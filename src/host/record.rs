use serde::{Deserialize, Serialize};

/// Structured reply handed back across the host boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductionRecord {
    pub len: usize,
    pub value: f64,
}

impl ReductionRecord {
    pub fn new(len: usize, value: f64) -> Self {
        Self { len, value }
    }
}
