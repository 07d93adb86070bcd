// Read one pod's cumulative request counter from its stub_status page.

use crate::config::SamplingConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::warn;

/// Fetches one replica's cumulative request counter. `None` means the sample
/// failed (unreachable, non-200, malformed); callers never see an error.
#[async_trait]
pub trait CounterSampler: Send + Sync {
    async fn sample(&self, address: &str) -> Option<u64>;
}

/// Parses nginx `stub_status` output:
///
/// ```text
/// Active connections: 1
/// server accepts handled requests
///  10 10 10
/// Reading: 0 Writing: 1 Waiting: 0
/// ```
///
/// Returns the third field of the third line (total requests).
pub fn parse_stub_status(body: &str) -> Option<u64> {
    body.lines()
        .nth(2)?
        .split_whitespace()
        .nth(2)?
        .parse()
        .ok()
}

pub struct HttpCounterSampler {
    client: reqwest::Client,
    port: u16,
    path: String,
}

impl HttpCounterSampler {
    /// One shared client; the timeout bounds the whole request and there is no retry.
    pub fn new(config: &SamplingConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            port: config.port,
            path: config.status_path.clone(),
        })
    }

    pub(crate) fn url(&self, address: &str) -> String {
        if address.contains(':') {
            format!("http://[{}]:{}{}", address, self.port, self.path)
        } else {
            format!("http://{}:{}{}", address, self.port, self.path)
        }
    }
}

#[async_trait]
impl CounterSampler for HttpCounterSampler {
    async fn sample(&self, address: &str) -> Option<u64> {
        let url = self.url(address);
        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(pod = %address, error = %e, operation = "sample_counter", "pod status request failed");
                return None;
            }
        };
        if response.status() != StatusCode::OK {
            warn!(pod = %address, status = %response.status(), operation = "sample_counter", "pod status returned non-200");
            return None;
        }
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                warn!(pod = %address, error = %e, operation = "sample_counter", "pod status body unreadable");
                return None;
            }
        };
        let total = parse_stub_status(&body);
        if total.is_none() {
            warn!(pod = %address, operation = "sample_counter", "pod status payload malformed");
        }
        total
    }
}
