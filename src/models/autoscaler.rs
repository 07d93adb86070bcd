// Autoscaler facts read once per snapshot cycle

use serde::{Deserialize, Serialize};

/// Used when the autoscaler spec has no CPU utilization target.
pub const DEFAULT_CPU_TARGET: i32 = 50;
pub const DEFAULT_MIN_REPLICAS: i32 = 2;
pub const DEFAULT_MAX_REPLICAS: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoscalerFact {
    pub current_replicas: i32,
    pub desired_replicas: i32,
    pub min_replicas: i32,
    pub max_replicas: i32,
    /// Observed average CPU utilization (percent); `None` when the autoscaler reports no cpu metric.
    pub cpu_utilization: Option<i32>,
    pub cpu_target: i32,
}
