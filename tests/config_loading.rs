//! Configuration file loading and environment fallbacks.

mod support;

use std::io::Write;

use support::with_scoped_env;
use uem_rust::provider::{MonitorConfig, ProviderKind};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_backend_config_from_file() {
    let file = write_config(
        r#"
[provider]
source = "backend"

[backend]
base_url = "http://stations.example:8080"
timeout_secs = 3
"#,
    );

    let config = MonitorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.provider_kind().unwrap(), ProviderKind::Backend);
    assert_eq!(config.backend.base_url, "http://stations.example:8080");
    assert_eq!(config.backend.timeout_secs, 3);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let file = write_config("");

    let config = MonitorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.provider_kind().unwrap(), ProviderKind::Mock);
    assert_eq!(config.backend.base_url, "http://localhost:8000");
    assert_eq!(config.backend.timeout_secs, 10);
}

#[test]
fn rejects_unknown_provider_source() {
    let file = write_config(
        r#"
[provider]
source = "telepathy"
"#,
    );
    assert!(MonitorConfig::from_file(file.path()).is_err());
}

#[test]
fn rejects_unreadable_file() {
    assert!(MonitorConfig::from_file("/nonexistent/monitor.toml").is_err());
}

#[test]
fn env_overrides_replace_file_values() {
    let config = with_scoped_env(
        &[
            ("UEM_PROVIDER", Some("backend")),
            ("UEM_BACKEND_URL", Some("http://override:9999")),
        ],
        || MonitorConfig::default().with_env_overrides(),
    );

    assert_eq!(config.provider_kind().unwrap(), ProviderKind::Backend);
    assert_eq!(config.backend.base_url, "http://override:9999");
}

#[test]
fn provider_kind_env_fallback_order() {
    // Explicit UEM_PROVIDER wins
    let kind = with_scoped_env(
        &[
            ("UEM_PROVIDER", Some("mock")),
            ("UEM_BACKEND_URL", Some("http://ignored")),
        ],
        ProviderKind::from_env,
    );
    assert_eq!(kind, ProviderKind::Mock);

    // A backend URL alone selects the backend
    let kind = with_scoped_env(
        &[
            ("UEM_PROVIDER", None),
            ("UEM_BACKEND_URL", Some("http://stations.example")),
        ],
        ProviderKind::from_env,
    );
    assert_eq!(kind, ProviderKind::Backend);

    // Nothing set defaults to mock
    let kind = with_scoped_env(
        &[("UEM_PROVIDER", None), ("UEM_BACKEND_URL", None)],
        ProviderKind::from_env,
    );
    assert_eq!(kind, ProviderKind::Mock);

    // An unparsable selection falls back to mock rather than failing startup
    let kind = with_scoped_env(
        &[("UEM_PROVIDER", Some("telepathy"))],
        ProviderKind::from_env,
    );
    assert_eq!(kind, ProviderKind::Mock);
}
