// Library for tests to access modules

pub mod aggregator;
pub mod config;
pub mod error;
pub mod kube_repo;
pub mod models;
pub mod routes;
pub mod traffic;
pub mod version;
