//! Value comparison for filter matching
//!
//! Equality is type-aware: numbers compare numerically, strings literally
//! unless case folding is requested. No other coercion.

use serde_json::{Number, Value};

/// Checks two values for equality under the active comparison mode.
///
/// Numbers compare numerically (`1` equals `1.0`), strings literally unless
/// `case_insensitive` is set, in which case both sides are lower-cased
/// first. Arrays and objects compare structurally: same shape, every entry
/// equal recursively; object key order is irrelevant. Mismatched types
/// never compare equal.
pub fn values_equal(a: &Value, b: &Value, case_insensitive: bool) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => strings_equal(x, y, case_insensitive),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|(x, y)| values_equal(x, y, case_insensitive))
        }
        (Value::Object(xm), Value::Object(ym)) => {
            // Same key set, every value equal recursively
            xm.len() == ym.len()
                && xm
                    .iter()
                    .all(|(k, x)| ym.get(k).is_some_and(|y| values_equal(x, y, case_insensitive)))
        }
        _ => false, // Mismatched types
    }
}

/// Numeric equality across integer and float representations
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(af), Some(bf)) = (a.as_f64(), b.as_f64()) {
        return af == bf;
    }
    if let (Some(ai), Some(bi)) = (a.as_i64(), b.as_i64()) {
        return ai == bi;
    }
    false
}

/// String equality, case-folded when requested. Non-string values are
/// never case-folded.
fn strings_equal(a: &str, b: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        a.to_lowercase() == b.to_lowercase()
    } else {
        a == b
    }
}
