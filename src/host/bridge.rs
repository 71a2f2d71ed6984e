use crate::host::record::ReductionRecord;
use crate::math::stats::StatsKernel;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;

/// Callable surface held by the embedding layer.
///
/// The host owns one bridge and invokes it with borrowed sample slices;
/// the bridge never mutates the input and never fails, so the call site
/// needs no error plumbing.
pub struct HostBridge {
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl HostBridge {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Reduce a sequence to its sum of squares.
    pub fn call(&self, samples: &[f64]) -> f64 {
        let value = StatsKernel::sumsq(samples);
        self.metrics.record_call(samples.len());
        self.logger.record(&format!(
            "sumsq over {} samples -> {:.6}",
            samples.len(),
            value
        ));
        value
    }

    /// Same reduction, packaged with the element count for hosts that
    /// want a structured reply instead of a bare scalar.
    pub fn call_recorded(&self, samples: &[f64]) -> ReductionRecord {
        ReductionRecord::new(samples.len(), self.call(samples))
    }

    pub fn metrics_snapshot(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}

impl Default for HostBridge {
    fn default() -> Self {
        Self::new()
    }
}
