// Model serialization tests (JSON camelCase, wallet widening, redaction)

use balancer_status::config::{AppConfig, REDACTED};
use balancer_status::models::*;

#[test]
fn test_service_stats_serialization_camel_case() {
    let svc = ServiceStats {
        port: 9000,
        pid: 1234,
        args: vec!["--wallet".into()],
        process_state: ProcessState::Running,
    };
    let json = serde_json::to_string(&svc).unwrap();
    assert!(json.contains("\"processState\""));
    assert!(json.contains("\"running\""));
    let back: ServiceStats = serde_json::from_str(&json).unwrap();
    assert_eq!(back, svc);
}

#[test]
fn test_process_state_exited_roundtrip() {
    let state = ProcessState::Exited { code: 137 };
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"kind\":\"exited\""));
    assert!(json.contains("\"code\":137"));
    let back: ProcessState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn test_wallet_stats_flattens_service_fields() {
    let wallet = WalletStats {
        service: ServiceStats {
            port: 9001,
            pid: 77,
            args: vec![],
            process_state: ProcessState::Running,
        },
        endpoints_cnt: 2,
        clients_cnt: 3,
    };
    let json: serde_json::Value = serde_json::to_value(&wallet).unwrap();
    // Widened entry keeps the base fields at the top level.
    assert_eq!(json.get("port").and_then(|v| v.as_u64()), Some(9001));
    assert_eq!(json.get("endpointsCnt").and_then(|v| v.as_u64()), Some(2));
    assert_eq!(json.get("clientsCnt").and_then(|v| v.as_u64()), Some(3));
    assert!(json.get("service").is_none());
}

#[test]
fn test_disk_status_serialization() {
    let disk = DiskStatus {
        all_gb: 100.0,
        used_gb: 40.0,
        free_gb: 60.0,
        avail_gb: 55.0,
    };
    let json = serde_json::to_string(&disk).unwrap();
    assert!(json.contains("\"allGb\""));
    assert!(json.contains("\"availGb\""));
    let back: DiskStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(back, disk);
}

#[test]
fn test_config_redaction_masks_private_key_only() {
    let config = AppConfig::load_from_str(
        r#"
[server]
port = 8080
host = "127.0.0.1"

[api]
secret = "s"

[database]
path = "data"

[push]
vapid_public = "public-key"
vapid_private = "private-key"
"#,
    )
    .unwrap();
    let redacted = config.redacted();
    assert_eq!(redacted.push.vapid_private, REDACTED);
    assert_eq!(redacted.push.vapid_public, "public-key");
    assert_eq!(redacted.api.secret, "s");
    // Original untouched.
    assert_eq!(config.push.vapid_private, "private-key");
}

#[test]
fn test_config_rejects_empty_database_path() {
    let result = AppConfig::load_from_str(
        r#"
[server]
port = 8080
host = "127.0.0.1"

[api]

[database]
path = ""

[push]
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_config_defaults_secret_and_debug() {
    let config = AppConfig::load_from_str(
        r#"
[server]
port = 8080
host = "127.0.0.1"

[api]

[database]
path = "data"

[push]
"#,
    )
    .unwrap();
    assert!(config.api.secret.is_empty());
    assert!(!config.api.debug);
    assert!(config.push.vapid_private.is_empty());
}
