use std::path::PathBuf;

use dispatch::config::{Config, LISTEN_ENV};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.zip_input_path(), PathBuf::from("./sample.txt"));
    assert_eq!(cfg.zip_output_path(), PathBuf::from("./sample.gz"));
    assert_eq!(cfg.read_chunk_size, 64 * 1024);
    assert_eq!(cfg.marker, "Fusce");
    assert_eq!(cfg.log_level(), tracing::Level::INFO);
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml("root_dir: /srv/data\nread_chunk_size: 16\n").unwrap();

    assert_eq!(cfg.root_dir, PathBuf::from("/srv/data"));
    assert_eq!(cfg.read_chunk_size, 16);
    assert_eq!(cfg.zip_output_path(), PathBuf::from("/srv/data/sample.gz"));
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
}

#[test]
fn test_config_rejects_zero_chunk_size() {
    assert!(Config::from_yaml("read_chunk_size: 0\n").is_err());
}

#[test]
fn test_config_rejects_unknown_log_level() {
    assert!(Config::from_yaml("log_level: loud\n").is_err());
    assert!(Config::from_yaml("log_level: debug\n").is_ok());
}

#[test]
fn test_config_timeouts() {
    let cfg = Config::from_yaml(
        "upstream_connect_timeout_ms: 250\nupstream_request_timeout_ms: 1500\n",
    )
    .unwrap();

    assert_eq!(cfg.upstream_connect_timeout().as_millis(), 250);
    assert_eq!(cfg.upstream_request_timeout().as_millis(), 1500);
}

#[test]
fn test_config_from_missing_file_fails() {
    assert!(Config::from_file(std::path::Path::new("/definitely/not/here.yaml")).is_err());
}

// The only test touching process environment, so no other test races it.
#[test]
fn test_config_listen_from_env() {
    unsafe {
        std::env::set_var(LISTEN_ENV, "127.0.0.1:8000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8000");
    unsafe {
        std::env::remove_var(LISTEN_ENV);
    }
}
