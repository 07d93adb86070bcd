// Snapshot domain models

mod autoscaler;
mod pod;
mod snapshot;

pub use autoscaler::{
    AutoscalerFact, DEFAULT_CPU_TARGET, DEFAULT_MAX_REPLICAS, DEFAULT_MIN_REPLICAS,
};
pub use pod::PodFact;
pub use snapshot::{StatusSnapshot, TrafficStats, WatchTarget};
