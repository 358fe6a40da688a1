use super::*;

const GCC_ENTRY: &str = r#"{
    "name": "gcc-12.1.0",
    "version": "12.1.0",
    "language": "C++",
    "display-name": "gcc",
    "display-compile-command": "g++ prog.cc",
    "compiler-option-raw": true,
    "runtime-option-raw": false,
    "provider": 0,
    "templates": ["gcc"],
    "switches": [
        {
            "type": "single",
            "name": "warning",
            "display-name": "Warnings",
            "display-flags": "-Wall -Wextra",
            "default": true
        },
        {
            "type": "select",
            "default": "boost-nothing-gcc-12.1.0",
            "options": [
                { "name": "boost-nothing-gcc-12.1.0", "display-name": "Don't Use Boost", "display-flags": "" },
                { "name": "boost-1.80.0-gcc-12.1.0", "display-name": "Boost 1.80.0", "display-flags": "-I/opt/boost/include" }
            ]
        }
    ]
}"#;

#[test]
fn compiler_info_parses_kebab_case_fields() {
    let info: CompilerInfo = serde_json::from_str(GCC_ENTRY).unwrap();
    assert_eq!(info.name, "gcc-12.1.0");
    assert_eq!(info.language, "C++");
    assert_eq!(info.display_name, "gcc");
    assert_eq!(info.display_compile_command, "g++ prog.cc");
    assert!(info.compiler_option_raw);
    assert!(!info.runtime_option_raw);
    assert_eq!(info.provider, Some(0));
    assert_eq!(info.templates, vec!["gcc".to_owned()]);
}

#[test]
fn compiler_info_parses_tagged_switches() {
    let info: CompilerInfo = serde_json::from_str(GCC_ENTRY).unwrap();
    assert_eq!(info.switches.len(), 2);
    match &info.switches[0] {
        Switch::Single(single) => {
            assert_eq!(single.name, "warning");
            assert_eq!(single.display_flags, "-Wall -Wextra");
            assert!(single.default);
        }
        Switch::Select(_) => panic!("expected single switch"),
    }
    match &info.switches[1] {
        Switch::Select(select) => {
            assert_eq!(select.key(), "boost-nothing-gcc-12.1.0");
            assert_eq!(select.options.len(), 2);
            assert_eq!(
                select.option("boost-1.80.0-gcc-12.1.0").map(|o| o.display_flags.as_str()),
                Some("-I/opt/boost/include")
            );
        }
        Switch::Single(_) => panic!("expected select switch"),
    }
}

#[test]
fn compiler_info_defaults_missing_optional_fields() {
    let info: CompilerInfo = serde_json::from_str(r#"{ "name": "clang-15" }"#).unwrap();
    assert_eq!(info.name, "clang-15");
    assert!(info.language.is_empty());
    assert!(info.switches.is_empty());
    assert!(info.templates.is_empty());
    assert_eq!(info.provider, None);
}

#[test]
fn compiler_info_ignores_unknown_keys() {
    let info: CompilerInfo =
        serde_json::from_str(r#"{ "name": "ghc-9.4", "language": "Haskell", "future-field": [1, 2] }"#).unwrap();
    assert_eq!(info.language, "Haskell");
}

#[test]
fn label_falls_back_to_name() {
    let info: CompilerInfo = serde_json::from_str(r#"{ "name": "clang-15" }"#).unwrap();
    assert_eq!(info.label(), "clang-15");
    let named: CompilerInfo = serde_json::from_str(GCC_ENTRY).unwrap();
    assert_eq!(named.label(), "gcc");
}

#[test]
fn select_switch_unknown_option_is_none() {
    let select = SelectSwitch { default: "a".to_owned(), options: Vec::new() };
    assert!(select.option("a").is_none());
}
