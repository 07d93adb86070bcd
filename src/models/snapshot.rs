// Snapshot returned by GET /status

use serde::{Deserialize, Serialize};

use super::{AutoscalerFact, PodFact};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficStats {
    /// Requests per second since the previous observation, one decimal place.
    pub rps: f64,
    /// Cluster-wide cumulative request counter at the last observation.
    pub total_hits: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub current_replicas: i32,
    pub desired_replicas: i32,
    pub min_replicas: i32,
    pub max_replicas: i32,
    pub cpu_utilization: i32,
    pub cpu_target: i32,
    pub pods: Vec<PodFact>,
    pub total_pods: usize,
    pub traffic: TrafficStats,
}

impl StatusSnapshot {
    /// Missing cpu utilization is reported as 0.
    pub fn assemble(autoscaler: AutoscalerFact, pods: Vec<PodFact>, traffic: TrafficStats) -> Self {
        Self {
            current_replicas: autoscaler.current_replicas,
            desired_replicas: autoscaler.desired_replicas,
            min_replicas: autoscaler.min_replicas,
            max_replicas: autoscaler.max_replicas,
            cpu_utilization: autoscaler.cpu_utilization.unwrap_or(0),
            cpu_target: autoscaler.cpu_target,
            total_pods: pods.len(),
            pods,
            traffic,
        }
    }
}

/// Static watch target exposed via GET /api/info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchTarget {
    pub namespace: String,
    pub deployment: String,
    pub autoscaler: String,
    pub pod_selector: String,
}
