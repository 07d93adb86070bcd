// Shared test helpers: in-memory cluster and counter sampler

#![allow(dead_code)]

use async_trait::async_trait;
use hpa_monitor::error::ClusterError;
use hpa_monitor::kube_repo::ClusterSource;
use hpa_monitor::models::{AutoscalerFact, PodFact};
use hpa_monitor::traffic::CounterSampler;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn autoscaler() -> AutoscalerFact {
    AutoscalerFact {
        current_replicas: 3,
        desired_replicas: 4,
        min_replicas: 2,
        max_replicas: 10,
        cpu_utilization: Some(72),
        cpu_target: 50,
    }
}

pub fn pod(name: &str, ip: Option<&str>, ready: bool) -> PodFact {
    PodFact {
        name: name.into(),
        phase: Some(if ip.is_some() { "Running" } else { "Pending" }.into()),
        ip: ip.map(String::from),
        ready,
    }
}

/// Cluster returning fixed facts, or failing every call when `available` is false.
pub struct FakeCluster {
    pub autoscaler: AutoscalerFact,
    pub pods: Vec<PodFact>,
    pub available: bool,
}

impl FakeCluster {
    pub fn new(pods: Vec<PodFact>) -> Self {
        Self {
            autoscaler: autoscaler(),
            pods,
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            autoscaler: autoscaler(),
            pods: vec![],
            available: false,
        }
    }
}

#[async_trait]
impl ClusterSource for FakeCluster {
    async fn fetch_autoscaler(&self) -> Result<AutoscalerFact, ClusterError> {
        if !self.available {
            return Err(ClusterError::MissingSpec("web-autoscaler".into()));
        }
        Ok(self.autoscaler.clone())
    }

    async fn list_pods(&self) -> Result<Vec<PodFact>, ClusterError> {
        if !self.available {
            return Err(ClusterError::MissingSpec("web-autoscaler".into()));
        }
        Ok(self.pods.clone())
    }
}

/// Per-address counters; addresses not in the map (or mapped to `None`) fail.
#[derive(Default)]
pub struct FakeSampler {
    counters: Mutex<HashMap<String, Option<u64>>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: AtomicUsize,
}

impl FakeSampler {
    pub fn with(entries: &[(&str, Option<u64>)]) -> Self {
        let s = Self::default();
        for (addr, value) in entries {
            s.set(addr, *value);
        }
        s
    }

    pub fn set(&self, address: &str, value: Option<u64>) {
        self.counters
            .lock()
            .unwrap()
            .insert(address.to_string(), value);
    }

    pub fn delay(&self, address: &str, d: Duration) {
        self.delays.lock().unwrap().insert(address.to_string(), d);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CounterSampler for FakeSampler {
    async fn sample(&self, address: &str) -> Option<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delays.lock().unwrap().get(address).copied();
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
        self.counters.lock().unwrap().get(address).copied().flatten()
    }
}
