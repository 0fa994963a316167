use delivery_types::Configuration;
use serde_json::json;

#[test]
fn default_has_no_locale_and_snake_case() {
    let c = Configuration::default();
    assert_eq!(c.default_locale, None);
    assert!(!c.use_camel_case);
}

#[test]
fn builder_sets_fields() {
    let c = Configuration::new()
        .with_default_locale("en-US")
        .with_camel_case(true);
    assert_eq!(c.default_locale.as_deref(), Some("en-US"));
    assert!(c.use_camel_case);
}

#[test]
fn empty_object_deserializes_to_default() {
    let c: Configuration = serde_json::from_value(json!({})).unwrap();
    assert_eq!(c, Configuration::default());
}

#[test]
fn deserializes_known_options() {
    let c: Configuration =
        serde_json::from_value(json!({"default_locale": "de-DE", "use_camel_case": true}))
            .unwrap();
    assert_eq!(c.default_locale.as_deref(), Some("de-DE"));
    assert!(c.use_camel_case);
}
