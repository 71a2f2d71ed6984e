use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    calls: usize,
    samples: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                calls: 0,
                samples: 0,
            }),
        }
    }

    pub fn record_call(&self, sample_count: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.calls += 1;
            metrics.samples += sample_count;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.calls, metrics.samples)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
