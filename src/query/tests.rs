//! Tests for query module

use super::*;
use crate::types::{JsonObject, JsonValue};
use pretty_assertions::assert_eq;
use serde_json::json;

fn decode(params: &QueryParams, key: &str) -> JsonValue {
    serde_json::from_str(params.get(key).unwrap()).unwrap()
}

fn sections(value: JsonValue) -> JsonObject {
    match value {
        JsonValue::Object(map) => map,
        _ => panic!("Expected object"),
    }
}

// ============================================================================
// QueryParams Tests
// ============================================================================

#[test]
fn test_query_params_push_and_get() {
    let mut params = QueryParams::new();
    assert!(params.is_empty());

    params.push("a", "1");
    params.push("b", "2");

    assert_eq!(params.len(), 2);
    assert_eq!(params.get("a"), Some("1"));
    assert_eq!(params.get("missing"), None);
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(params.as_pairs()[1], ("b".to_string(), "2".to_string()));
}

// ============================================================================
// GraphqlQuery Tests
// ============================================================================

#[test]
fn test_likes_query_sections() {
    let query = GraphqlQuery::likes("123", 50);
    let keys: Vec<&str> = query.sections().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["variables", "features", "fieldToggles"]);

    let variables = &query.sections()["variables"];
    assert_eq!(variables["userId"], "123");
    assert_eq!(variables["count"], 50);
    assert_eq!(variables["withV2Timeline"], true);
    assert_eq!(query.sections()["fieldToggles"]["withArticlePlainText"], false);
}

#[test]
fn test_likes_features_are_fixed() {
    let features = likes_features();
    assert_eq!(features.len(), 24);
    assert_eq!(features["rweb_tipjar_consumption_enabled"], true);
    assert_eq!(features["responsive_web_enhance_cards_enabled"], false);
}

#[test]
fn test_to_params_without_cursor() {
    let query = GraphqlQuery::likes("123", 100);
    let params = query.to_params(None);

    assert_eq!(
        params.keys().collect::<Vec<_>>(),
        vec!["variables", "features", "fieldToggles"]
    );
    assert_eq!(decode(&params, "variables"), query.sections()["variables"]);
    assert_eq!(decode(&params, "features"), query.sections()["features"]);
    assert_eq!(
        decode(&params, "fieldToggles"),
        query.sections()["fieldToggles"]
    );
    assert!(decode(&params, "variables").get("cursor").is_none());
}

#[test]
fn test_to_params_is_compact() {
    let query = GraphqlQuery::from_sections(sections(json!({
        "fieldToggles": {"withArticlePlainText": false}
    })));
    let params = query.to_params(None);
    assert_eq!(
        params.get("fieldToggles"),
        Some(r#"{"withArticlePlainText":false}"#)
    );
}

#[test]
fn test_to_params_cursor_goes_into_variables_only() {
    let query = GraphqlQuery::likes("123", 100);
    let params = query.to_params(Some("DAABCgAB"));

    let variables = decode(&params, "variables");
    assert_eq!(variables["cursor"], "DAABCgAB");
    assert_eq!(variables["userId"], "123");

    assert!(decode(&params, "features").get("cursor").is_none());
    assert!(decode(&params, "fieldToggles").get("cursor").is_none());
    assert_eq!(decode(&params, "features"), query.sections()["features"]);
}

#[test]
fn test_to_params_cursor_is_first_variable() {
    let query = GraphqlQuery::from_sections(sections(json!({
        "variables": {"userId": "1", "count": 2}
    })));
    let params = query.to_params(Some("c1"));
    assert_eq!(
        params.get("variables"),
        Some(r#"{"cursor":"c1","userId":"1","count":2}"#)
    );
}

#[test]
fn test_to_params_existing_cursor_wins() {
    // A cursor baked into the variables overrides the pagination cursor
    let query = GraphqlQuery::from_sections(sections(json!({
        "variables": {"cursor": "pinned", "count": 5}
    })));
    let params = query.to_params(Some("from-page"));

    let variables = decode(&params, "variables");
    assert_eq!(variables["cursor"], "pinned");
    assert_eq!(variables["count"], 5);
}

#[test]
fn test_to_params_arbitrary_sections() {
    let input = sections(json!({
        "variables": {"a": [1, 2, {"b": null}]},
        "extra": {"nested": {"deep": true}},
        "features": {}
    }));
    let query = GraphqlQuery::from_sections(input.clone());
    let params = query.to_params(Some("next"));

    assert_eq!(
        params.keys().collect::<Vec<_>>(),
        vec!["variables", "extra", "features"]
    );
    assert_eq!(decode(&params, "extra"), input["extra"]);
    assert_eq!(decode(&params, "features"), json!({}));
    assert_eq!(
        decode(&params, "variables"),
        json!({"cursor": "next", "a": [1, 2, {"b": null}]})
    );
}

#[test]
fn test_to_params_non_object_variables_left_alone() {
    let query = GraphqlQuery::from_sections(sections(json!({"variables": "raw"})));
    let params = query.to_params(Some("c"));
    assert_eq!(params.get("variables"), Some(r#""raw""#));
}
