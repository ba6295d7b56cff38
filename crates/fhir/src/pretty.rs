//! Indented outline of a model value.
//!
//! The printer walks the encoded JSON tree rather than the Rust types, so one
//! implementation serves every resource and data type. A resource's
//! `resourceType` becomes the heading; other members are listed one per line
//! with nested objects and arrays indented two spaces:
//!
//! ```text
//! Patient
//!   id: "example"
//!   name:
//!     - family: "Chalmers"
//!       given:
//!         - "Peter"
//! ```

use serde_json::Value;

use crate::codec::FhirJson;

const INDENT: &str = "  ";

/// Outline of any model value.
pub fn pretty<T: FhirJson>(value: &T) -> String {
    render(&value.encode_json())
}

/// Outline of a JSON tree.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Object(map) => {
            let heading = map.get("resourceType").and_then(Value::as_str);
            let depth = match heading {
                Some(resource_type) => {
                    out.push_str(resource_type);
                    out.push('\n');
                    1
                }
                None => 0,
            };
            for (key, member) in map {
                if heading.is_some() && key == "resourceType" {
                    continue;
                }
                write_member(&mut out, depth, key, member);
            }
        }
        Value::Array(items) => write_items(&mut out, 0, items),
        scalar => {
            out.push_str(&scalar_text(scalar));
            out.push('\n');
        }
    }
    out
}

fn write_member(out: &mut String, depth: usize, key: &str, value: &Value) {
    push_indent(out, depth);
    out.push_str(key);
    out.push(':');
    match value {
        Value::Object(map) if !map.is_empty() => {
            out.push('\n');
            for (key, member) in map {
                write_member(out, depth + 1, key, member);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            out.push('\n');
            write_items(out, depth + 1, items);
        }
        other => {
            out.push(' ');
            out.push_str(&scalar_text(other));
            out.push('\n');
        }
    }
}

fn write_items(out: &mut String, depth: usize, items: &[Value]) {
    for item in items {
        push_indent(out, depth);
        out.push('-');
        match item {
            Value::Object(map) if !map.is_empty() => {
                // The first member shares the dash line, the rest align under it.
                let mut members = map.iter();
                if let Some((key, member)) = members.next() {
                    let mut first = String::new();
                    write_member(&mut first, depth + 1, key, member);
                    out.push(' ');
                    out.push_str(first.trim_start());
                }
                for (key, member) in members {
                    write_member(out, depth + 1, key, member);
                }
            }
            Value::Array(nested) if !nested.is_empty() => {
                out.push('\n');
                write_items(out, depth + 1, nested);
            }
            other => {
                out.push(' ');
                out.push_str(&scalar_text(other));
                out.push('\n');
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Object(_) => "{}".to_string(),
        Value::Array(_) => "[]".to_string(),
        other => other.to_string(),
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
