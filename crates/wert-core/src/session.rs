//! # Session Request
//!
//! The inbound half of the proxy: what the caller asks for.
//! Both fields are optional and fall back to fixed defaults. Whatever the
//! caller sends is forwarded as received; only absence and `null` are
//! interpreted.

use crate::error::{SessionError, SessionResult};
use serde::Serialize;
use serde_json::{Number, Value};

/// Amount used when the caller does not send one
pub const DEFAULT_AMOUNT: u64 = 10;

/// Currency code used when the caller does not send one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Largest integer a float can hold exactly (2^53 - 1)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Purchase parameters supplied by the caller.
///
/// Both fields are raw JSON values: `{"amount":"25"}` forwards the string
/// `"25"`. Integral floats are written as integers (`10.0` → `10`) so the
/// signed bytes match what a JavaScript client would produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRequest {
    pub amount: Value,
    pub currency: Value,
}

impl SessionRequest {
    /// Create a request with explicit values
    pub fn new(amount: impl Into<Value>, currency: impl Into<Value>) -> Self {
        Self {
            amount: normalize_number(amount.into()),
            currency: normalize_number(currency.into()),
        }
    }

    /// Parse an optional JSON body.
    ///
    /// An empty body or a literal `null` yields the defaults. Otherwise the
    /// body must be a JSON object; missing or `null` fields default and
    /// present fields are kept untouched.
    pub fn from_body(body: &[u8]) -> SessionResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| SessionError::InvalidRequest(e.to_string()))?;

        let mut fields = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(fields) => fields,
            other => {
                return Err(SessionError::InvalidRequest(format!(
                    "expected a JSON object, got {}",
                    json_type(&other)
                )))
            }
        };

        let amount = take_present(&mut fields, "amount")
            .unwrap_or_else(|| Value::from(DEFAULT_AMOUNT));
        let currency = take_present(&mut fields, "currency")
            .unwrap_or_else(|| Value::from(DEFAULT_CURRENCY));

        Ok(Self::new(amount, currency))
    }
}

impl Default for SessionRequest {
    fn default() -> Self {
        Self::new(DEFAULT_AMOUNT, DEFAULT_CURRENCY)
    }
}

/// Remove `key` unless it is absent or `null`
fn take_present(fields: &mut serde_json::Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|v| !v.is_null())
}

/// Write integral floats as integers, the way `JSON.stringify` does.
fn normalize_number(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(normalize(n)),
        other => other,
    }
}

fn normalize(n: Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => {
            // -0.0 collapses to 0 as well
            Number::from(f as i64)
        }
        _ => n,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_uses_defaults() {
        let request = SessionRequest::from_body(b"").unwrap();
        assert_eq!(request.amount, json!(10));
        assert_eq!(request.currency, "USD");

        let request = SessionRequest::from_body(b"  \n").unwrap();
        assert_eq!(request, SessionRequest::default());
    }

    #[test]
    fn test_null_and_empty_object_use_defaults() {
        assert_eq!(
            SessionRequest::from_body(b"null").unwrap(),
            SessionRequest::default()
        );
        assert_eq!(
            SessionRequest::from_body(b"{}").unwrap(),
            SessionRequest::default()
        );
        assert_eq!(
            SessionRequest::from_body(br#"{"amount":null,"currency":null}"#).unwrap(),
            SessionRequest::default()
        );
    }

    #[test]
    fn test_partial_body() {
        let request = SessionRequest::from_body(br#"{"currency":"EUR"}"#).unwrap();
        assert_eq!(request.amount, json!(10));
        assert_eq!(request.currency, "EUR");

        let request = SessionRequest::from_body(br#"{"amount":25}"#).unwrap();
        assert_eq!(request.amount, json!(25));
        assert_eq!(request.currency, "USD");
    }

    #[test]
    fn test_amount_keeps_its_representation() {
        let request = SessionRequest::from_body(br#"{"amount":12.5,"currency":"GBP"}"#).unwrap();
        assert_eq!(request.amount.to_string(), "12.5");

        let request = SessionRequest::from_body(br#"{"amount":40}"#).unwrap();
        assert_eq!(serde_json::to_string(&request.amount).unwrap(), "40");
    }

    #[test]
    fn test_integral_floats_are_written_as_integers() {
        let request = SessionRequest::from_body(br#"{"amount":10.0}"#).unwrap();
        assert_eq!(serde_json::to_string(&request.amount).unwrap(), "10");

        let request = SessionRequest::from_body(br#"{"amount":1e3}"#).unwrap();
        assert_eq!(request.amount.to_string(), "1000");

        let request = SessionRequest::from_body(br#"{"amount":-0.0}"#).unwrap();
        assert_eq!(request.amount.to_string(), "0");

        let request = SessionRequest::new(7.0, "USD");
        assert_eq!(request.amount.to_string(), "7");
    }

    #[test]
    fn test_values_of_any_type_are_forwarded() {
        let request =
            SessionRequest::from_body(br#"{"amount":"25","currency":"EUR"}"#).unwrap();
        assert_eq!(request.amount, json!("25"));
        assert_eq!(request.currency, "EUR");

        let request = SessionRequest::from_body(br#"{"amount":25,"currency":5}"#).unwrap();
        assert_eq!(request.amount, json!(25));
        assert_eq!(request.currency, json!(5));

        let request = SessionRequest::from_body(br#"{"amount":{"value":3}}"#).unwrap();
        assert_eq!(request.amount, json!({ "value": 3 }));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let request =
            SessionRequest::from_body(br#"{"amount":5,"currency":"USD","note":"hi"}"#).unwrap();
        assert_eq!(request, SessionRequest::new(5u64, "USD"));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let err = SessionRequest::from_body(br#"[25,"EUR"]"#).unwrap_err();
        assert!(matches!(err, SessionError::InvalidRequest(_)));
        assert!(err.to_string().contains("array"));

        for body in [&b"42"[..], b"\"USD\"", b"true"] {
            let err = SessionRequest::from_body(body).unwrap_err();
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let err = SessionRequest::from_body(b"{not json").unwrap_err();
        assert!(matches!(err, SessionError::InvalidRequest(_)));

        let err = SessionRequest::from_body(br#"{"amount": "#).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
