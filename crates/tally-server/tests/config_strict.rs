#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
limits:
  max_name_bytez: 123 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.limits.max_name_bytes, 256);
    assert!(cfg.ops.metrics_enabled);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
limits:
  max_name_bytes: 64
ops:
  metrics_enabled: false
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen, "127.0.0.1:9000");
    assert_eq!(cfg.limits.max_name_bytes, 64);
    assert!(!cfg.ops.metrics_enabled);
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn bad_listen_rejected() {
    let bad = "version: 1\nserver:\n  listen: \"not-an-addr\"\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn name_limit_out_of_range_rejected() {
    let bad = "version: 1\nlimits:\n  max_name_bytes: 0\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn default_config_is_valid() {
    config::TallyConfig::default().validate().expect("defaults must validate");
}

#[test]
fn drain_grace_out_of_range_rejected() {
    let bad = "version: 1\nserver:\n  drain_grace_ms: 60001\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    let cfg = config::load_from_path_or_default(None, "does/not/exist/tally.yaml")
        .expect("missing default must fall back");
    let dflt = config::TallyConfig::default();
    assert_eq!(cfg.version, dflt.version);
    assert_eq!(cfg.server.listen, dflt.server.listen);
    assert_eq!(cfg.server.drain_grace_ms, dflt.server.drain_grace_ms);
    assert_eq!(cfg.limits.max_name_bytes, dflt.limits.max_name_bytes);
    assert_eq!(cfg.ops.metrics_enabled, dflt.ops.metrics_enabled);
}

#[test]
fn missing_explicit_file_is_internal() {
    let err = config::load_from_path_or_default(Some("does/not/exist/tally.yaml"), "unused.yaml")
        .expect_err("explicit path must exist");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn unreadable_default_is_reported() {
    // A directory exists but cannot be read as a file.
    let err = config::load_from_path_or_default(None, env!("CARGO_MANIFEST_DIR"))
        .expect_err("non-NotFound read error must surface");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn existing_default_file_is_parsed() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tally.yaml");
    let cfg = config::load_from_path_or_default(None, path).expect("repo config must load");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.limits.max_name_bytes, 256);
}
