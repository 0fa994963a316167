use delivery_types::{Link, ResourceKey};
use serde_json::json;

// ── Extraction ───────────────────────────────────────────────────

#[test]
fn from_wrapped_link_object() {
    let link = Link::from_value(&json!({
        "sys": {"type": "Link", "linkType": "Space", "id": "sp1"}
    }));
    assert_eq!(link.link_type(), "Space");
    assert_eq!(link.id(), "sp1");
}

#[test]
fn from_bare_sys_object() {
    let link = Link::from_value(&json!({"type": "Link", "linkType": "Environment", "id": "master"}));
    assert_eq!(link, Link::new("Environment", "master"));
}

#[test]
fn missing_members_are_empty() {
    let link = Link::from_value(&json!({"sys": {"type": "Link"}}));
    assert_eq!(link.id(), "");
    assert_eq!(link.link_type(), "");
}

#[test]
fn non_object_yields_empty_link() {
    let link = Link::from_value(&json!("sp1"));
    assert_eq!(link, Link::new("", ""));
}

// ── Identity ─────────────────────────────────────────────────────

#[test]
fn key_uses_link_type_and_id() {
    let link = Link::new("ContentType", "cat");
    assert_eq!(link.key(), ResourceKey::new("ContentType", "cat"));
    assert_eq!(link.key().to_string(), "ContentType:cat");
}

#[test]
fn display_format() {
    assert_eq!(
        Link::new("Space", "sp1").to_string(),
        "<Link linkType='Space' id='sp1'>"
    );
}

#[test]
fn serializes_camel_case() {
    let value = serde_json::to_value(Link::new("Space", "sp1")).unwrap();
    assert_eq!(value, json!({"id": "sp1", "linkType": "Space"}));
}
