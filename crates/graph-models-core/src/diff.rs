//! Structural comparison of JSON documents.
//!
//! Used to check that decoding and re-encoding a payload kept its meaning:
//! object keys compare regardless of order, arrays compare position by
//! position, and numbers compare by value so `5` and `5.0` agree.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// How two documents differ at one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DivergenceKind {
    /// Present in the expected document, absent from the actual one.
    Missing,
    /// An explicit `null` in the expected document that the actual one omits.
    /// Declared properties read `null` as absent, so this is not a loss.
    DroppedNull,
    /// Present only in the actual document.
    Unexpected,
    /// Present in both with different values.
    Changed,
}

impl fmt::Display for DivergenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "missing",
            Self::DroppedNull => "dropped null",
            Self::Unexpected => "unexpected",
            Self::Changed => "changed",
        })
    }
}

/// A single difference, located by JSON Pointer (RFC 6901).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divergence {
    pub pointer: String,
    pub kind: DivergenceKind,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pointer = if self.pointer.is_empty() { "/" } else { &self.pointer };
        write!(f, "{pointer}: {}", self.kind)
    }
}

/// Lists every location where `actual` differs from `expected`.
pub fn diff(expected: &Value, actual: &Value) -> Vec<Divergence> {
    let mut out = Vec::new();
    let mut pointer = String::new();
    walk(expected, actual, &mut pointer, &mut out);
    out
}

/// Whether the two documents carry the same data.
pub fn semantically_equal(expected: &Value, actual: &Value) -> bool {
    diff(expected, actual).is_empty()
}

/// Whether the only differences are dropped `null`s.
pub fn is_lossless(divergences: &[Divergence]) -> bool {
    divergences
        .iter()
        .all(|divergence| divergence.kind == DivergenceKind::DroppedNull)
}

fn walk(expected: &Value, actual: &Value, pointer: &mut String, out: &mut Vec<Divergence>) {
    match (expected, actual) {
        (Value::Object(expected), Value::Object(actual)) => {
            walk_object(expected, actual, pointer, out);
        }
        (Value::Array(expected), Value::Array(actual)) => {
            for index in 0..expected.len().max(actual.len()) {
                let len = pointer.len();
                pointer.push('/');
                pointer.push_str(&index.to_string());
                match (expected.get(index), actual.get(index)) {
                    (Some(left), Some(right)) => walk(left, right, pointer, out),
                    (Some(_), None) => push(out, pointer, DivergenceKind::Missing),
                    (None, Some(_)) => push(out, pointer, DivergenceKind::Unexpected),
                    (None, None) => {}
                }
                pointer.truncate(len);
            }
        }
        (Value::Number(left), Value::Number(right)) => {
            if !numbers_equal(left, right) {
                push(out, pointer, DivergenceKind::Changed);
            }
        }
        _ => {
            if expected != actual {
                push(out, pointer, DivergenceKind::Changed);
            }
        }
    }
}

fn walk_object(
    expected: &Map<String, Value>,
    actual: &Map<String, Value>,
    pointer: &mut String,
    out: &mut Vec<Divergence>,
) {
    for (key, left) in expected {
        let len = pointer.len();
        pointer.push('/');
        pointer.push_str(&escape_component(key));
        match actual.get(key) {
            Some(right) => walk(left, right, pointer, out),
            None if left.is_null() => push(out, pointer, DivergenceKind::DroppedNull),
            None => push(out, pointer, DivergenceKind::Missing),
        }
        pointer.truncate(len);
    }

    for key in actual.keys().filter(|key| !expected.contains_key(key.as_str())) {
        let len = pointer.len();
        pointer.push('/');
        pointer.push_str(&escape_component(key));
        push(out, pointer, DivergenceKind::Unexpected);
        pointer.truncate(len);
    }
}

/// Integers compare exactly; only a float on either side falls back to `f64`.
#[expect(clippy::float_cmp, reason = "exact equality is the point of the check")]
fn numbers_equal(left: &serde_json::Number, right: &serde_json::Number) -> bool {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return l == r;
    }
    if left.is_f64() || right.is_f64() {
        return matches!((left.as_f64(), right.as_f64()), (Some(l), Some(r)) if l == r);
    }
    false
}

fn push(out: &mut Vec<Divergence>, pointer: &str, kind: DivergenceKind) {
    out.push(Divergence {
        pointer: pointer.to_owned(),
        kind,
    });
}

fn escape_component(component: &str) -> String {
    component.replace('~', "~0").replace('/', "~1")
}
