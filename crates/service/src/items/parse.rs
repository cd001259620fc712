//! Best-effort integer coercion.
//!
//! Counts and path ids are never rejected for being malformed. A value that
//! yields no digits becomes [`Count::NAN`] (for counts) or an id that matches
//! nothing (for lookups).

use serde_json::{Number, Value};

use super::domain::Count;

/// Leading-integer parse: optional whitespace, optional sign, then the longest
/// run of ASCII digits. Anything after the digits is ignored. Out-of-range
/// values saturate.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let run = digits.bytes().take_while(u8::is_ascii_digit).count();
    if run == 0 {
        return None;
    }

    let mut acc: i64 = 0;
    for b in digits[..run].bytes() {
        let d = i64::from(b - b'0');
        let next = acc
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) });
        match next {
            Some(v) => acc = v,
            None => return Some(if negative { i64::MIN } else { i64::MAX }),
        }
    }
    Some(acc)
}

/// Path parameter to item id. `None` never matches a stored item.
pub fn parse_id(raw: &str) -> Option<i64> {
    parse_int_prefix(raw)
}

/// Amount a create adds: 1 when `count` is absent or falsy, otherwise the
/// coerced integer (possibly NaN).
pub fn count_to_add(count: Option<&Value>) -> Count {
    match count {
        None => Count::ONE,
        Some(v) if is_falsy(v) => Count::ONE,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Count::new(i),
            None => parse_int_prefix(&number_text(n)).map(Count::new).unwrap_or(Count::NAN),
        },
        Some(other) => parse_int_prefix(&render(other)).map(Count::new).unwrap_or(Count::NAN),
    }
}

fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Text form of a JSON number as a JavaScript engine would print it: plain
/// decimal for `1e-6 <= |x| < 1e21`, exponent notation outside that range.
/// Only the leading digits matter to [`parse_int_prefix`], so `5e-7` reads
/// as 5 and `1e21` as 1.
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) => format!("{:e}", f),
        Some(f) => format!("{}", f),
        None => n.to_string(),
    }
}

/// String form used before digit scanning. Arrays join their elements with
/// `,`; objects and booleans render to text without leading digits.
fn render(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefix_parsing() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  -7"), Some(-7));
        assert_eq!(parse_int_prefix("+3"), Some(3));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("1.9"), Some(1));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn falsy_counts_default_to_one() {
        assert_eq!(count_to_add(None), Count::ONE);
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(count_to_add(Some(&v)), Count::ONE, "{v}");
        }
    }

    #[test]
    fn numeric_counts() {
        assert_eq!(count_to_add(Some(&json!(3))), Count::new(3));
        assert_eq!(count_to_add(Some(&json!(-2))), Count::new(-2));
        assert_eq!(count_to_add(Some(&json!(2.9))), Count::new(2));
        assert_eq!(count_to_add(Some(&json!("5"))), Count::new(5));
        assert_eq!(count_to_add(Some(&json!("0"))), Count::new(0));
        assert_eq!(count_to_add(Some(&json!([4]))), Count::new(4));
        assert_eq!(count_to_add(Some(&json!(["7", 1]))), Count::new(7));
    }

    #[test]
    fn exponent_form_numbers_use_leading_digits() {
        assert_eq!(count_to_add(Some(&json!(5e-7))), Count::new(5));
        assert_eq!(count_to_add(Some(&json!(-5e-7))), Count::new(-5));
        assert_eq!(count_to_add(Some(&json!(1e21))), Count::new(1));
        assert_eq!(count_to_add(Some(&json!(1.5e22))), Count::new(1));
        assert_eq!(count_to_add(Some(&json!(0.000001))), Count::new(0));
        assert_eq!(count_to_add(Some(&json!(1e16))), Count::new(10_000_000_000_000_000));
        assert_eq!(count_to_add(Some(&json!(1e20))), Count::new(i64::MAX));
        assert_eq!(count_to_add(Some(&json!([5e-7]))), Count::new(5));
    }

    #[test]
    fn non_numeric_counts_are_nan() {
        for v in [json!("lots"), json!(true), json!({"n": 1}), json!([])] {
            assert!(count_to_add(Some(&v)).is_nan(), "{v}");
        }
    }

    #[test]
    fn ids() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("3x"), Some(3));
        assert_eq!(parse_id("x3"), None);
    }
}
