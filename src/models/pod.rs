// Pod facts as reported in a snapshot

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodFact {
    pub name: String,
    /// Lifecycle phase as reported by the API server ("Running", "Pending", ...).
    pub phase: Option<String>,
    pub ip: Option<String>,
    pub ready: bool,
}

impl PodFact {
    /// Ready only when at least one container status exists and every one is ready.
    pub fn derive_ready<I>(container_ready: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        let mut seen = false;
        for ready in container_ready {
            if !ready {
                return false;
            }
            seen = true;
        }
        seen
    }

    /// Address usable for traffic sampling, if one has been assigned.
    pub fn sample_address(&self) -> Option<&str> {
        self.ip.as_deref().filter(|ip| !ip.is_empty())
    }
}
