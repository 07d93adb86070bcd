// Fan out over pod addresses and sum the counters that came back.

use super::CounterSampler;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::debug;

pub struct TrafficCollector {
    sampler: Arc<dyn CounterSampler>,
}

impl TrafficCollector {
    pub fn new(sampler: Arc<dyn CounterSampler>) -> Self {
        Self { sampler }
    }

    /// Cluster-wide cumulative total. Failed pods are left out of the sum;
    /// an empty address list sums to 0.
    pub async fn collect<S: AsRef<str>>(&self, addresses: &[S]) -> u64 {
        let samples = join_all(
            addresses
                .iter()
                .map(|addr| self.sampler.sample(addr.as_ref())),
        )
        .await;

        let sampled = samples.iter().filter(|s| s.is_some()).count();
        let total = samples
            .into_iter()
            .flatten()
            .fold(0u64, |acc, n| acc.saturating_add(n));
        debug!(
            operation = "collect_traffic",
            pods = addresses.len(),
            sampled,
            failed = addresses.len() - sampled,
            total,
            "traffic counters collected"
        );
        total
    }
}
