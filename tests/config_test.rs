use std::path::Path;

use shiftdeck::config::AppConfig;

#[test]
fn test_defaults_without_file() {
    let config = AppConfig::load(Some(Path::new("/definitely/not/here.toml")))
        .expect("defaults should load");

    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.fetch_latency_ms, 500);
    assert_eq!(config.search.radius_miles, 23);
    assert_eq!(config.search.total_results, 223);
    assert!(!config.profile.name.is_empty());
}

#[test]
fn test_toml_file_overrides() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
tick_rate_ms = 40
fetch_latency_ms = 10

[search]
address = "10 Main St, Provo, Utah"
radius_miles = 50
total_results = 12

[profile]
name = "Avery Park"
email = "avery@example.com"
"#,
    )
    .expect("write config");

    let config = AppConfig::load(Some(&path)).expect("config should load");
    assert_eq!(config.tick_rate_ms, 40);
    assert_eq!(config.fetch_latency_ms, 10);
    assert_eq!(config.search.address, "10 Main St, Provo, Utah");
    assert_eq!(config.search.radius_miles, 50);
    assert_eq!(config.profile.name, "Avery Park");
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "fetch_latency_ms = 5\n").expect("write config");

    let config = AppConfig::load(Some(&path)).expect("config should load");
    assert_eq!(config.fetch_latency_ms, 5);
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.search.radius_miles, 23);
}

#[test]
fn test_latency_duration_conversion() {
    let mut config = AppConfig::default();
    config.fetch_latency_ms = 250;
    assert_eq!(config.fetch_latency().num_milliseconds(), 250);
}
