// Autoscaler and pod metadata via the Kubernetes API (kube)

mod convert;

pub use convert::{autoscaler_fact, pod_fact};

use crate::config::ClusterConfig;
use crate::error::ClusterError;
use crate::models::{AutoscalerFact, PodFact};
use async_trait::async_trait;
use k8s_openapi::api::autoscaling::v2::HorizontalPodAutoscaler;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, ListParams};
use kube::Client;
use tokio::sync::OnceCell;
use tracing::instrument;

/// Source of authoritative autoscaler and pod facts for one snapshot cycle.
#[async_trait]
pub trait ClusterSource: Send + Sync {
    async fn fetch_autoscaler(&self) -> Result<AutoscalerFact, ClusterError>;
    async fn list_pods(&self) -> Result<Vec<PodFact>, ClusterError>;
}

pub struct KubeRepo {
    client: OnceCell<Client>,
    namespace: String,
    hpa_name: String,
    pod_selector: String,
}

impl KubeRepo {
    /// The client is created on first use so missing credentials fail a
    /// request instead of the process.
    pub fn new(config: &ClusterConfig) -> Self {
        Self {
            client: OnceCell::new(),
            namespace: config.namespace.clone(),
            hpa_name: config.hpa_name.clone(),
            pod_selector: config.pod_selector.clone(),
        }
    }

    async fn client(&self) -> Result<Client, ClusterError> {
        self.client
            .get_or_try_init(|| async {
                let client = Client::try_default().await?;
                tracing::info!(namespace = %self.namespace, "kubernetes client initialised");
                Ok::<_, kube::Error>(client)
            })
            .await
            .cloned()
            .map_err(ClusterError::Client)
    }
}

#[async_trait]
impl ClusterSource for KubeRepo {
    #[instrument(skip(self), fields(repo = "kube", operation = "fetch_autoscaler", hpa = %self.hpa_name))]
    async fn fetch_autoscaler(&self) -> Result<AutoscalerFact, ClusterError> {
        let api: Api<HorizontalPodAutoscaler> = Api::namespaced(self.client().await?, &self.namespace);
        let hpa = api
            .get(&self.hpa_name)
            .await
            .map_err(|source| ClusterError::Autoscaler {
                name: self.hpa_name.clone(),
                source,
            })?;
        autoscaler_fact(&hpa).ok_or_else(|| ClusterError::MissingSpec(self.hpa_name.clone()))
    }

    #[instrument(skip(self), fields(repo = "kube", operation = "list_pods", selector = %self.pod_selector))]
    async fn list_pods(&self) -> Result<Vec<PodFact>, ClusterError> {
        let api: Api<Pod> = Api::namespaced(self.client().await?, &self.namespace);
        let pods = api
            .list(&ListParams::default().labels(&self.pod_selector))
            .await
            .map_err(|source| ClusterError::Pods {
                selector: self.pod_selector.clone(),
                source,
            })?;
        Ok(pods.items.iter().map(pod_fact).collect())
    }
}
