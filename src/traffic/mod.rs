// Live request rate from per-pod nginx counters

mod collector;
mod rate;
mod sampler;

pub use collector::TrafficCollector;
pub use rate::{RateEstimator, RateGuard, RateState};
pub use sampler::{CounterSampler, HttpCounterSampler, parse_stub_status};
