// Convert Kubernetes API objects into snapshot facts.

use crate::models::{
    AutoscalerFact, DEFAULT_CPU_TARGET, DEFAULT_MAX_REPLICAS, DEFAULT_MIN_REPLICAS, PodFact,
};
use k8s_openapi::api::autoscaling::v2::HorizontalPodAutoscaler;
use k8s_openapi::api::core::v1::Pod;

const RESOURCE_METRIC: &str = "Resource";
const CPU: &str = "cpu";

/// Returns `None` when the autoscaler has no spec. Missing status fields read as 0.
pub fn autoscaler_fact(hpa: &HorizontalPodAutoscaler) -> Option<AutoscalerFact> {
    let spec = hpa.spec.as_ref()?;
    let status = hpa.status.as_ref();

    let current_replicas = status.and_then(|s| s.current_replicas).unwrap_or(0);
    let desired_replicas = status.map(|s| s.desired_replicas).unwrap_or(0);
    let min_replicas = spec
        .min_replicas
        .filter(|n| *n != 0)
        .unwrap_or(DEFAULT_MIN_REPLICAS);
    let max_replicas = if spec.max_replicas != 0 {
        spec.max_replicas
    } else {
        DEFAULT_MAX_REPLICAS
    };

    // Last matching metric wins.
    let cpu_utilization = status
        .and_then(|s| s.current_metrics.as_ref())
        .into_iter()
        .flatten()
        .filter(|m| m.type_ == RESOURCE_METRIC)
        .filter_map(|m| m.resource.as_ref())
        .filter(|r| r.name == CPU)
        .filter_map(|r| r.current.average_utilization)
        .last();

    let cpu_target = spec
        .metrics
        .iter()
        .flatten()
        .filter(|m| m.type_ == RESOURCE_METRIC)
        .filter_map(|m| m.resource.as_ref())
        .filter(|r| r.name == CPU)
        .filter_map(|r| r.target.average_utilization)
        .filter(|u| *u != 0)
        .last()
        .unwrap_or(DEFAULT_CPU_TARGET);

    Some(AutoscalerFact {
        current_replicas,
        desired_replicas,
        min_replicas,
        max_replicas,
        cpu_utilization,
        cpu_target,
    })
}

pub fn pod_fact(pod: &Pod) -> PodFact {
    let status = pod.status.as_ref();
    let ready = PodFact::derive_ready(
        status
            .and_then(|s| s.container_statuses.as_ref())
            .into_iter()
            .flatten()
            .map(|cs| cs.ready),
    );
    PodFact {
        name: pod.metadata.name.clone().unwrap_or_default(),
        phase: status.and_then(|s| s.phase.clone()),
        ip: status
            .and_then(|s| s.pod_ip.clone())
            .filter(|ip| !ip.is_empty()),
        ready,
    }
}
