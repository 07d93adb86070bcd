// Request-level failures (cluster metadata unavailable)

use thiserror::Error;

/// Failure to obtain authoritative autoscaler or pod data. Fatal to one
/// snapshot request, never to the process.
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("kubernetes client unavailable: {0}")]
    Client(#[source] kube::Error),

    #[error("failed to read autoscaler {name}: {source}")]
    Autoscaler {
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("failed to list pods with selector {selector}: {source}")]
    Pods {
        selector: String,
        #[source]
        source: kube::Error,
    },

    #[error("autoscaler {0} has no spec")]
    MissingSpec(String),
}
