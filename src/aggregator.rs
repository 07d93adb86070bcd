// One snapshot cycle: cluster metadata, then traffic under the rate lock.

use crate::error::ClusterError;
use crate::kube_repo::ClusterSource;
use crate::models::{PodFact, StatusSnapshot};
use crate::traffic::{RateEstimator, TrafficCollector};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::instrument;

pub struct StatusAggregator {
    cluster: Arc<dyn ClusterSource>,
    collector: TrafficCollector,
    estimator: RateEstimator,
}

impl StatusAggregator {
    pub fn new(
        cluster: Arc<dyn ClusterSource>,
        collector: TrafficCollector,
        estimator: RateEstimator,
    ) -> Self {
        Self {
            cluster,
            collector,
            estimator,
        }
    }

    pub fn estimator(&self) -> &RateEstimator {
        &self.estimator
    }

    /// Fails only when autoscaler or pod metadata cannot be read; no pod is
    /// sampled in that case. Pods without an address are listed but not sampled.
    #[instrument(skip(self), fields(operation = "snapshot"))]
    pub async fn snapshot(&self) -> Result<StatusSnapshot, ClusterError> {
        let (autoscaler, pods) =
            tokio::try_join!(self.cluster.fetch_autoscaler(), self.cluster.list_pods())?;

        let addresses: Vec<&str> = pods.iter().filter_map(PodFact::sample_address).collect();

        // Sampling runs inside the lock so overlapping requests observe in order.
        let traffic = {
            let mut rate = self.estimator.lock().await;
            let now = Instant::now();
            let total = self.collector.collect(&addresses).await;
            rate.observe(total, now)
        };
        tracing::debug!(
            pods = pods.len(),
            sampled_pods = addresses.len(),
            rps = traffic.rps,
            total_hits = traffic.total_hits,
            "snapshot assembled"
        );

        Ok(StatusSnapshot::assemble(autoscaler, pods, traffic))
    }
}
