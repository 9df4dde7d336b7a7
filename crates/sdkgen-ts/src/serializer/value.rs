use super::Serializer;

use jiff::civil;
use sdkgen_core::schema::{Property, PropertyTy};
use serde_json::Value;

impl Serializer<'_> {
    /// Synthesizes a TypeScript default-value expression for a property.
    ///
    /// Every branch terminates in a safe literal, so a malformed or missing
    /// declared default degrades to a zero/null/empty expression instead of
    /// propagating an error.
    pub fn default_value(&self, property: &Property) -> String {
        let raw = raw_default(property);
        match &property.ty {
            Some(PropertyTy::String) => format!("'{raw}'"),
            Some(PropertyTy::Number) => number_literal(&raw),
            Some(PropertyTy::Boolean) => truthy(property.default.as_ref()).to_string(),
            Some(PropertyTy::Date) => date_expr(&raw),
            Some(PropertyTy::Array(_)) => "<any>[]".to_string(),
            // GeoPoint, Object, Unknown, and untyped properties all fall
            // back to an explicitly-typed null.
            _ => "<any>null".to_string(),
        }
    }
}

/// The declared default in string form, with an empty-string sentinel when
/// the schema declares none.
fn raw_default(property: &Property) -> String {
    match &property.default {
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

fn number_literal(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "0".to_string();
    }
    match raw.parse::<f64>() {
        Ok(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
        Ok(n) => format!("{n}"),
        Err(_) => "0".to_string(),
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !(s.is_empty() || s == "false" || s == "0"),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn date_expr(raw: &str) -> String {
    if parses_as_date(raw) {
        format!("new Date('{raw}')")
    } else {
        "new Date(0)".to_string()
    }
}

fn parses_as_date(raw: &str) -> bool {
    raw.parse::<jiff::Timestamp>().is_ok()
        || raw.parse::<civil::DateTime>().is_ok()
        || raw.parse::<civil::Date>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_literal_coercion() {
        assert_eq!(number_literal(""), "0");
        assert_eq!(number_literal("abc"), "0");
        assert_eq!(number_literal("10"), "10");
        assert_eq!(number_literal("4.5"), "4.5");
        assert_eq!(number_literal(" 7 "), "7");
    }

    #[test]
    fn test_truthy_coercion() {
        assert!(!truthy(None));
        assert!(!truthy(Some(&Value::Null)));
        assert!(!truthy(Some(&Value::String("".into()))));
        assert!(!truthy(Some(&Value::String("false".into()))));
        assert!(!truthy(Some(&Value::String("0".into()))));
        assert!(truthy(Some(&Value::String("yes".into()))));
        assert!(truthy(Some(&Value::Bool(true))));
        assert!(!truthy(Some(&Value::Bool(false))));
        assert!(!truthy(Some(&serde_json::json!(0))));
        assert!(truthy(Some(&serde_json::json!(2))));
    }

    #[test]
    fn test_date_parse_fallback() {
        assert_eq!(date_expr("2020-01-01"), "new Date('2020-01-01')");
        assert_eq!(date_expr("not-a-date"), "new Date(0)");
        assert_eq!(date_expr(""), "new Date(0)");
    }
}
