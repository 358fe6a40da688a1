use super::*;

#[test]
fn catalog_url_defaults_when_unset() {
    assert_eq!(resolve_catalog_url(None), DEFAULT_CATALOG_URL);
}

#[test]
fn catalog_url_defaults_when_blank() {
    assert_eq!(resolve_catalog_url(Some("   ")), DEFAULT_CATALOG_URL);
}

#[test]
fn catalog_url_override_is_trimmed() {
    assert_eq!(resolve_catalog_url(Some(" http://localhost:8080/api/list.json ")), "http://localhost:8080/api/list.json");
}

#[test]
fn client_config_default_points_at_wandbox() {
    assert_eq!(ClientConfig::default().catalog_url, "https://wandbox.org/api/list.json");
}

#[test]
fn parse_port_defaults() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn server_config_defaults_host() {
    let config = ServerConfig::from_values(None, Some("4000")).unwrap();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.addr(), "0.0.0.0:4000");
}

#[test]
fn server_config_uses_explicit_host() {
    let config = ServerConfig::from_values(Some("127.0.0.1"), None).unwrap();
    assert_eq!(config.addr(), "127.0.0.1:3000");
}
