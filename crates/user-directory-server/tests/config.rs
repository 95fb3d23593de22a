use std::net::SocketAddr;

use clap::Parser;
use user_directory_server::config::DEFAULT_PORT;
use user_directory_server::logging::LogFormat;
use user_directory_server::{ServerConfig, ServerError};

#[test]
fn defaults_listen_on_4999_with_builtin_users() {
    let config = ServerConfig::try_parse_from(["user-directory"]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.users.is_none());
    assert!(!config.print_schema);
    assert_eq!(
        config.bind_addr().unwrap(),
        "0.0.0.0:4999".parse::<SocketAddr>().unwrap()
    );

    let store = config.load_store().unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn flags_override_defaults() {
    let config = ServerConfig::try_parse_from([
        "user-directory",
        "--host",
        "127.0.0.1",
        "--port",
        "8080",
        "--log-format",
        "json",
        "--print-schema",
    ])
    .unwrap();
    assert_eq!(
        config.bind_addr().unwrap(),
        "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
    );
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.print_schema);
}

#[test]
fn non_ip_host_is_rejected() {
    let config = ServerConfig::try_parse_from(["user-directory", "--host", "not a host"]).unwrap();
    assert!(matches!(
        config.bind_addr(),
        Err(ServerError::InvalidAddress(ref host)) if host == "not a host"
    ));
}

#[test]
fn unknown_log_format_fails_to_parse() {
    assert!(ServerConfig::try_parse_from(["user-directory", "--log-format", "xml"]).is_err());
}

#[test]
fn users_flag_loads_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    std::fs::write(
        &path,
        r#"[{"id": "42", "name": "Ada", "email": "ada@example.com", "age": 36}]"#,
    )
    .unwrap();

    let config = ServerConfig::try_parse_from([
        "user-directory",
        "--users",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let store = config.load_store().unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id("42").unwrap().name, "Ada");
}

#[test]
fn duplicate_ids_in_seed_file_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "1", "name": "A", "email": "a@example.com"},
            {"id": "1", "name": "B", "email": "b@example.com"}
        ]"#,
    )
    .unwrap();

    let config = ServerConfig {
        users: Some(path),
        ..ServerConfig::try_parse_from(["user-directory"]).unwrap()
    };
    assert!(config.load_store().is_err());
}
