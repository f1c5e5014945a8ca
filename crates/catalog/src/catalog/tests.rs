use std::io::Write;

use suggest_core::ComponentId;

use super::*;

const MINIMAL_HEADER: &str = r#"
packages: ["@acme/ui", "@acme/icons"]
icons: [StarIcon]
fallback: [Input, Button]
phrase_rules:
  Login Form: [EmailInput, PasswordInput]
word_rules:
  login: [EmailInput]
  LOGIN: [PasswordInput]
"#;

/// Build a YAML catalog with a trivial template for every component.
fn minimal_yaml(skip: Option<ComponentId>) -> String {
    let mut yaml = String::from(MINIMAL_HEADER);
    yaml.push_str("templates:\n");
    for id in ComponentId::ALL {
        if Some(id) == skip {
            continue;
        }
        yaml.push_str(&format!("  {id}: \"<{id} />\"\n"));
    }
    yaml
}

#[test]
fn builtin_catalog_compiles() {
    let catalog = ComponentCatalog::builtin().unwrap();
    assert_eq!(catalog.len(), ComponentId::COUNT);
    assert_eq!(catalog.phrase_rules().len(), 12);
    assert_eq!(catalog.word_rules().len(), 107);
    assert_eq!(catalog.fallback(), &[ComponentId::Input, ComponentId::Button]);
    assert_eq!(catalog.packages()[0], "@visa/nova-react");
    assert_eq!(catalog.icon_package(), "@visa/nova-icons-react");
    assert_eq!(catalog.icons().len(), 15);
}

#[test]
fn builtin_rule_order_is_preserved() {
    let catalog = ComponentCatalog::builtin().unwrap();
    let phrases: Vec<&str> = catalog
        .phrase_rules()
        .iter()
        .map(|r| r.key.as_str())
        .take(3)
        .collect();
    assert_eq!(phrases, vec!["login form", "registration form", "contact form"]);
    assert_eq!(catalog.word_rules()[0].key, "login");
    assert_eq!(catalog.word_rules().last().unwrap().key, "billing");
}

#[test]
fn every_component_has_a_template() {
    let catalog = ComponentCatalog::builtin().unwrap();
    for id in ComponentId::ALL {
        let snippet = catalog.snippet(id).unwrap();
        assert!(!snippet.trim().is_empty(), "{id} has an empty template");
    }
    assert_eq!(catalog.components().count(), ComponentId::COUNT);
}

#[test]
fn missing_template_is_rejected() {
    let yaml = minimal_yaml(Some(ComponentId::Slider));
    let err = ComponentCatalog::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, CatalogError::MissingTemplate(ComponentId::Slider)));
}

#[test]
fn unknown_component_name_is_rejected() {
    let yaml = minimal_yaml(None).replace("fallback: [Input, Button]", "fallback: [Carousel]");
    let err = ComponentCatalog::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, CatalogError::Yaml(_)));
}

#[test]
fn empty_fallback_is_rejected() {
    let yaml = minimal_yaml(None).replace("fallback: [Input, Button]", "fallback: []");
    let err = ComponentCatalog::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyFallback));
}

#[test]
fn rule_keys_are_lowercased_and_first_exact_key_wins() {
    let catalog = ComponentCatalog::from_yaml_str(&minimal_yaml(None)).unwrap();
    assert_eq!(catalog.phrase_rules()[0].key, "login form");

    // Both "login" and "LOGIN" survive for the linear scan...
    assert_eq!(catalog.word_rules().len(), 2);
    assert_eq!(catalog.word_rules()[1].key, "login");
    // ...but exact lookup resolves to the first definition.
    let rule = catalog.word_rule("login").unwrap();
    assert_eq!(rule.components, vec![ComponentId::EmailInput]);
}

#[test]
fn from_path_loads_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(minimal_yaml(None).as_bytes()).unwrap();

    let catalog = ComponentCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.icon_package(), "@acme/icons");
    assert_eq!(catalog.snippet(ComponentId::Badge), Some("<Badge />"));
}

#[test]
fn from_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ComponentCatalog::from_path(&dir.path().join("nope.yml")).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
}
