//! Structural comparison of two JSON trees.
//!
//! Used to check that re-encoding a decoded document reproduces it. Object
//! member order is ignored; everything else must match exactly, including
//! number text.

use serde_json::Value;

/// One location where two trees disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    /// JSON pointer to the differing node; empty for the root.
    pub path: String,
    /// The node in the first tree, `None` when the member is absent there.
    pub original: Option<Value>,
    /// The node in the second tree, `None` when the member is absent there.
    pub reencoded: Option<Value>,
}

/// Every location where `original` and `reencoded` differ, in document order.
pub fn json_differences(original: &Value, reencoded: &Value) -> Vec<Difference> {
    let mut differences = Vec::new();
    compare(original, reencoded, &mut String::new(), &mut differences);
    differences
}

fn compare(original: &Value, reencoded: &Value, path: &mut String, out: &mut Vec<Difference>) {
    match (original, reencoded) {
        (Value::Object(left), Value::Object(right)) => {
            for (key, value) in left {
                let len = path.len();
                push_key(path, key);
                match right.get(key) {
                    Some(other) => compare(value, other, path, out),
                    None => out.push(Difference {
                        path: path.clone(),
                        original: Some(value.clone()),
                        reencoded: None,
                    }),
                }
                path.truncate(len);
            }
            for (key, value) in right {
                if left.contains_key(key) {
                    continue;
                }
                let len = path.len();
                push_key(path, key);
                out.push(Difference {
                    path: path.clone(),
                    original: None,
                    reencoded: Some(value.clone()),
                });
                path.truncate(len);
            }
        }
        (Value::Array(left), Value::Array(right)) if left.len() == right.len() => {
            for (index, (a, b)) in left.iter().zip(right).enumerate() {
                let len = path.len();
                path.push('/');
                path.push_str(&index.to_string());
                compare(a, b, path, out);
                path.truncate(len);
            }
        }
        (a, b) if a == b => {}
        (a, b) => out.push(Difference {
            path: path.clone(),
            original: Some(a.clone()),
            reencoded: Some(b.clone()),
        }),
    }
}

fn push_key(path: &mut String, key: &str) {
    path.push('/');
    for ch in key.chars() {
        match ch {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            other => path.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn member_order_is_ignored() {
        let a = json!({"a": 1, "b": [1, 2]});
        let b = json!({"b": [1, 2], "a": 1});
        assert!(json_differences(&a, &b).is_empty());
    }

    #[test]
    fn reports_missing_added_and_changed_nodes() {
        let a = json!({"keep": 1, "gone": true, "list": [1, 2], "a/b": "x"});
        let b = json!({"keep": 1, "list": [1, 3], "a/b": "y", "new": null});
        let paths: Vec<String> = json_differences(&a, &b)
            .into_iter()
            .map(|d| d.path)
            .collect();
        assert_eq!(paths, ["/gone", "/list/1", "/a~1b", "/new"]);
    }

    #[test]
    fn arrays_of_different_length_differ_as_a_whole() {
        let a = json!({"given": ["A", null]});
        let b = json!({"given": ["A"]});
        let differences = json_differences(&a, &b);
        assert_eq!(differences.len(), 1);
        assert_eq!(differences[0].path, "/given");
    }
}
