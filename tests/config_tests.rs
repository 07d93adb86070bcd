// Config loading, defaults, env overrides and validation

use hpa_monitor::config::AppConfig;
use std::collections::HashMap;
use std::io::Write;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "127.0.0.1"

[cluster]
namespace = "shop"
deployment_name = "storefront"
hpa_name = "storefront-hpa"
pod_selector = "app=storefront"

[sampling]
status_path = "/stub_status"
port = 8080
timeout_ms = 750
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.cluster.namespace, "shop");
    assert_eq!(config.cluster.deployment_name, "storefront");
    assert_eq!(config.cluster.hpa_name, "storefront-hpa");
    assert_eq!(config.cluster.pod_selector, "app=storefront");
    assert_eq!(config.sampling.status_path, "/stub_status");
    assert_eq!(config.sampling.port, 8080);
    assert_eq!(config.sampling.timeout_ms, 750);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = AppConfig::load_from_str("").expect("defaults");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.cluster.namespace, "default");
    assert_eq!(config.cluster.deployment_name, "azure-k8s-site");
    assert_eq!(config.cluster.hpa_name, "web-autoscaler");
    assert_eq!(config.cluster.pod_selector, "app=web-server");
    assert_eq!(config.sampling.status_path, "/nginx_status");
    assert_eq!(config.sampling.port, 80);
    assert_eq!(config.sampling.timeout_ms, 1000);
}

#[test]
fn test_partial_section_fills_defaults() {
    let config = AppConfig::load_from_str("[cluster]\nnamespace = \"prod\"\n").unwrap();
    assert_eq!(config.cluster.namespace, "prod");
    assert_eq!(config.cluster.hpa_name, "web-autoscaler");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = AppConfig::load_from_path(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.cluster.namespace, "default");
}

#[test]
fn test_config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID_CONFIG.as_bytes()).unwrap();
    let config = AppConfig::load_from_path(file.path()).unwrap();
    assert_eq!(config.cluster.hpa_name, "storefront-hpa");
}

#[test]
fn test_env_overrides_cluster_names() {
    let mut config = AppConfig::load_from_str(VALID_CONFIG).unwrap();
    let env: HashMap<&str, &str> = [
        ("NAMESPACE", "staging"),
        ("DEPLOYMENT_NAME", "web"),
        ("HPA_NAME", ""),
    ]
    .into_iter()
    .collect();
    config.apply_env_overrides(|k| env.get(k).map(|v| v.to_string()));
    assert_eq!(config.cluster.namespace, "staging");
    assert_eq!(config.cluster.deployment_name, "web");
    // Empty values leave the file setting in place.
    assert_eq!(config.cluster.hpa_name, "storefront-hpa");
}

#[test]
fn test_watch_target_mirrors_cluster_config() {
    let config = AppConfig::load_from_str(VALID_CONFIG).unwrap();
    let target = config.watch_target();
    assert_eq!(target.namespace, "shop");
    assert_eq!(target.deployment, "storefront");
    assert_eq!(target.autoscaler, "storefront-hpa");
    assert_eq!(target.pod_selector, "app=storefront");
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_namespace() {
    let bad = VALID_CONFIG.replace("namespace = \"shop\"", "namespace = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("cluster.namespace"));
}

#[test]
fn test_config_validation_rejects_empty_hpa_name() {
    let bad = VALID_CONFIG.replace("hpa_name = \"storefront-hpa\"", "hpa_name = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("cluster.hpa_name"));
}

#[test]
fn test_config_validation_rejects_empty_selector() {
    let bad = VALID_CONFIG.replace("pod_selector = \"app=storefront\"", "pod_selector = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("pod_selector"));
}

#[test]
fn test_config_validation_rejects_relative_status_path() {
    let bad = VALID_CONFIG.replace("\"/stub_status\"", "\"stub_status\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("status_path"));
}

#[test]
fn test_config_validation_rejects_sampling_port_zero() {
    let bad = VALID_CONFIG.replace("port = 8080", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("sampling.port"));
}

#[test]
fn test_config_validation_rejects_timeout_zero() {
    let bad = VALID_CONFIG.replace("timeout_ms = 750", "timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("timeout_ms"));
}
