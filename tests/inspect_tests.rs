// Static inspection tests: rule_like, uses_data and the rule-shape helpers

use jsonlogic::{Rule, Value, get_operator, get_values, is_logic, rule_like, uses_data};
use pretty_assertions::assert_eq;
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn assert_like(rule: serde_json::Value, pattern: serde_json::Value, expected: bool) {
    let label = format!("rule_like({}, {})", rule, pattern);
    assert_eq!(rule_like(&v(rule), &v(pattern)), expected, "{}", label);
}

fn paths(rule: serde_json::Value) -> Vec<String> {
    uses_data(&v(rule))
}

// ============================================================================
// Rule Shapes
// ============================================================================

#[test]
fn test_is_logic() {
    assert!(is_logic(&v(json!({"var": "a"}))));
    assert!(is_logic(&v(json!({"fubar": []}))));
    assert!(!is_logic(&v(json!({}))));
    assert!(!is_logic(&v(json!({"a": 1, "b": 2}))));
    assert!(!is_logic(&v(json!([{"var": "a"}]))));
    assert!(!is_logic(&v(json!("var"))));
    assert!(!is_logic(&Value::Null));
}

#[test]
fn test_get_operator_and_values() {
    let rule = v(json!({"var": "a"}));
    assert_eq!(get_operator(&rule), Some("var"));
    assert_eq!(get_values(&rule), Some(&[Value::from("a")][..]));

    let rule = v(json!({"+": [1, 2]}));
    assert_eq!(get_values(&rule), Some(&[Value::Integer(1), Value::Integer(2)][..]));

    assert_eq!(get_operator(&v(json!(42))), None);
    assert_eq!(get_values(&v(json!({"a": 1, "b": 2}))), None);
}

#[test]
fn test_classify() {
    let list = v(json!([1, 2]));
    assert!(matches!(Rule::classify(&list), Rule::List(items) if items.len() == 2));

    let literal = v(json!({}));
    assert!(matches!(Rule::classify(&literal), Rule::Literal(_)));

    let op = v(json!({"!": true}));
    match Rule::classify(&op) {
        Rule::Operation { operator, args } => {
            assert_eq!(operator, "!");
            assert_eq!(args, &[Value::Boolean(true)][..]);
        }
        other => panic!("Expected operation, got {:?}", other),
    }
}

// ============================================================================
// rule_like
// ============================================================================

#[test]
fn test_rule_like_type_placeholders() {
    assert_like(json!(1), json!("number"), true);
    assert_like(json!("falafel"), json!("number"), false);
    assert_like(json!([]), json!("number"), false);
    assert_like(json!({"var": "a"}), json!("number"), false);

    assert_like(json!(1), json!("string"), false);
    assert_like(json!("falafel"), json!("string"), true);
    assert_like(json!([]), json!("string"), false);
    assert_like(json!({"var": "a"}), json!("string"), false);

    assert_like(json!(1), json!("array"), false);
    assert_like(json!("falafel"), json!("array"), false);
    assert_like(json!([]), json!("array"), true);
    assert_like(json!([1]), json!("array"), true);
    assert_like(json!([1, 2]), json!("array"), true);
    assert_like(json!({"var": "a"}), json!("array"), false);
}

#[test]
fn test_rule_like_wildcards() {
    assert_like(json!(1), json!("@"), true);
    assert_like(json!("falafel"), json!("@"), true);
    assert_like(json!([]), json!("@"), true);
    assert_like(json!({"var": "a"}), json!("@"), true);
    assert_like(json!({"cat": "falafel"}), json!({"@": "falafel"}), true);
    assert_like(json!({"cat": "kebab"}), json!({"@": "falafel"}), false);
    assert_like(json!({"cat": "kebab"}), json!({"@": "@"}), true);
}

#[test]
fn test_rule_like_literals() {
    assert_like(json!(1), json!(1), true);
    assert_like(json!(1), json!(2), false);
    assert_like(json!(1), json!("falafel"), false);
    assert_like(json!("falafel"), json!("falafel"), true);
    assert_like(json!("falafel"), json!("kebab"), false);
    assert_like(json!(1.0), json!(1), true);
}

#[test]
fn test_rule_like_lists() {
    assert_like(json!([1, 2, 3]), json!([1, 2, 3]), true);
    assert_like(json!([1, 2, 69]), json!([1, 2, 3]), false);
    // order matters
    assert_like(json!([1, 2, 3]), json!([3, 2, 1]), false);

    assert_like(json!([1]), json!(["number"]), true);
    assert_like(json!([1]), json!(["string"]), false);
    assert_like(json!(["falafel"]), json!(["string"]), true);
    assert_like(json!([1, "falafel", []]), json!(["number", "string", "array"]), true);
}

#[test]
fn test_rule_like_mismatches() {
    assert_like(json!({"*": [0.01, {"var": "goods"}]}), json!({"if": ["number", "@"]}), false);
    assert_like(json!(["some", "array"]), json!(["some array"]), false);
    assert_like(json!("not an array"), json!(["an array"]), false);
    assert_like(json!({"var": "a"}), json!(["var", "a"]), false);
}

#[test]
fn test_rule_like_tax_rules() {
    let tax = json!({"*": [0.01, {"var": "goods"}]});
    assert_like(tax.clone(), json!({"*": ["number", "@"]}), true);
    assert_like(tax.clone(), json!({"*": ["number", {"@": "@"}]}), true);
    assert_like(tax, json!({"*": ["number", {"var": "@"}]}), true);
    assert_like(json!({"*": [0.01, 5000]}), json!({"*": ["number", {"var": "@"}]}), false);

    let combined = json!({"*": [0.01, {"+": [{"var": "goods"}, {"var": "services"}]}]});
    assert_like(combined.clone(), json!({"*": ["number", {"+": "@"}]}), true);
    assert_like(combined, json!({"*": ["number", {"+": "array"}]}), true);
}

// ============================================================================
// uses_data
// ============================================================================

#[test]
fn test_uses_data_basic() {
    assert_eq!(paths(json!({"a": [1, {"var": "b"}]})), vec!["b"]);
    assert_eq!(paths(json!({"var": "a.b.c"})), vec!["a.b.c"]);
    assert!(paths(json!({"+": [1, 2]})).is_empty());
    assert!(paths(json!("var")).is_empty());
}

#[test]
fn test_uses_data_order_and_dedup() {
    let rule = json!({"and": [
        {"<": [{"var": "temp"}, 110]},
        {"==": [{"var": "pie.filling"}, "apple"]},
        {">": [{"var": "temp"}, 0]}
    ]});
    assert_eq!(paths(rule), vec!["temp", "pie.filling"]);
}

#[test]
fn test_uses_data_reads_first_argument_only() {
    assert_eq!(paths(json!({"var": ["a", {"var": "b"}]})), vec!["a"]);
    assert_eq!(paths(json!({"var": 1})), vec!["1"]);
}

#[test]
fn test_uses_data_skips_computed_paths() {
    assert!(paths(json!({"var": {"cat": ["a", {"var": "b"}]}})).is_empty());
    assert!(paths(json!({"var": null})).is_empty());
}

#[test]
fn test_uses_data_inside_iteration() {
    let rule = json!({"map": [{"var": "items"}, {"*": [{"var": "qty"}, {"var": "price"}]}]});
    assert_eq!(paths(rule), vec!["items", "qty", "price"]);
}

#[test]
fn test_uses_data_ignores_bare_lists_and_literals() {
    // a top-level list is not an operation, so it is not searched
    assert!(paths(json!([{"var": "a"}])).is_empty());
    assert!(paths(json!({"a": 1, "b": {"var": "c"}})).is_empty());
}
