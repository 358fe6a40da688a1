use super::*;

#[test]
fn parse_catalog_reads_compiler_array() {
    let catalog = parse_catalog(
        r#"[
            { "name": "gcc-12", "language": "C++" },
            { "name": "clang-15", "language": "C++" }
        ]"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.find("clang-15").is_some());
}

#[test]
fn parse_catalog_accepts_empty_list() {
    assert!(parse_catalog("[]").unwrap().is_empty());
}

#[test]
fn parse_catalog_rejects_non_array() {
    let err = parse_catalog(r#"{ "toolchains": ["gcc-12"] }"#).unwrap_err();
    assert!(matches!(err, CatalogError::Malformed(_)));
}

#[test]
fn parse_catalog_rejects_truncated_json() {
    assert!(matches!(parse_catalog(r#"[{ "name": "gcc"#), Err(CatalogError::Malformed(_))));
}

#[test]
fn parse_catalog_rejects_entry_without_name() {
    assert!(matches!(parse_catalog(r#"[{ "language": "C" }]"#), Err(CatalogError::Malformed(_))));
}

#[test]
fn check_status_accepts_success_range() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
}

#[test]
fn check_status_rejects_non_success() {
    assert_eq!(check_status(304), Err(CatalogError::Status(304)));
    assert_eq!(check_status(503), Err(CatalogError::Status(503)));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(CatalogError::Status(502).to_string(), "request failed with status 502");
    assert_eq!(CatalogError::Network("timed out".to_owned()).to_string(), "network error: timed out");
}

#[test]
fn catalog_error_converts_to_report() {
    let report = ErrorReport::from(CatalogError::Status(500));
    assert_eq!(report.origin, CATALOG_ERROR_ORIGIN);
    assert_eq!(report.summary(), "compiler list: request failed with status 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_outside_browser_is_unavailable() {
    let result = futures::executor::block_on(fetch_catalog("https://example.invalid/list.json"));
    assert_eq!(result.unwrap_err(), CatalogError::Unavailable);
}
