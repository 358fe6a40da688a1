use super::*;

fn compiler(name: &str, language: &str) -> CompilerInfo {
    CompilerInfo {
        name: name.to_owned(),
        version: String::new(),
        language: language.to_owned(),
        display_name: String::new(),
        display_compile_command: String::new(),
        compiler_option_raw: false,
        runtime_option_raw: false,
        provider: None,
        templates: Vec::new(),
        switches: Vec::new(),
    }
}

fn sample() -> CompilerCatalog {
    CompilerCatalog::new(vec![
        compiler("gcc-12", "C++"),
        compiler("cpython-3.11", "Python"),
        compiler("clang-15", "C++"),
        compiler("mystery", ""),
    ])
}

// =============================================================
// Identity
// =============================================================

#[test]
fn clones_share_the_same_instance() {
    let catalog = sample();
    let copy = catalog.clone();
    assert!(catalog.same_instance(&copy));
    assert_eq!(catalog, copy);
}

#[test]
fn equal_content_is_not_the_same_instance() {
    let a = sample();
    let b = sample();
    assert_eq!(a, b);
    assert!(!a.same_instance(&b));
}

#[test]
fn default_catalog_is_empty() {
    let catalog = CompilerCatalog::default();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert!(catalog.languages().is_empty());
}

// =============================================================
// Derived views
// =============================================================

#[test]
fn languages_are_sorted_and_distinct() {
    assert_eq!(sample().languages(), vec!["C++".to_owned(), "Python".to_owned()]);
}

#[test]
fn compilers_for_keeps_catalog_order() {
    let catalog = sample();
    let names: Vec<&str> = catalog.compilers_for("C++").map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["gcc-12", "clang-15"]);
}

#[test]
fn compilers_for_unknown_language_is_empty() {
    assert_eq!(sample().compilers_for("COBOL").count(), 0);
}

#[test]
fn find_by_name() {
    let catalog = sample();
    assert_eq!(catalog.find("clang-15").map(|c| c.language.as_str()), Some("C++"));
    assert!(catalog.find("rustc-nightly").is_none());
}

#[test]
fn iter_and_len_cover_every_entry() {
    let catalog = sample();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.iter().count(), 4);
}
