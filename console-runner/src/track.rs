use std::collections::BTreeMap;
use std::sync::Mutex;

use console_transport::RawRequest;

/// Fire-and-forget usage reporting for sent requests.
pub trait UsageTracker: Send + Sync {
    fn track(&self, requests: &[RawRequest]);
}

/// Metric name for a request: method plus the first `_` endpoint segment
/// of its path, e.g. `GET__search`.
pub fn metric_name(request: &RawRequest) -> String {
    let path = request.url.split(['?', '#']).next().unwrap_or_default();
    let endpoint = path
        .split('/')
        .find(|segment| segment.starts_with('_'))
        .unwrap_or("unknown");
    format!("{}_{}", request.method, endpoint)
}

/// Counts requests per metric name.
#[derive(Debug, Default)]
pub struct MetricCounter {
    counts: Mutex<BTreeMap<String, u64>>,
}

impl MetricCounter {
    pub fn counts(&self) -> BTreeMap<String, u64> {
        self.counts
            .lock()
            .map(|counts| counts.clone())
            .unwrap_or_default()
    }
}

impl UsageTracker for MetricCounter {
    fn track(&self, requests: &[RawRequest]) {
        let Ok(mut counts) = self.counts.lock() else {
            tracing::warn!("usage counter poisoned; dropping metrics");
            return;
        };
        for request in requests {
            *counts.entry(metric_name(request)).or_default() += 1;
        }
    }
}
