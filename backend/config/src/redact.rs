//! Config redaction: a snapshot of the config that is safe to log.

use serde_json::Value;

use crate::schema::GorkConfig;

static SENSITIVE_KEYS: &[&str] = &["bot_token", "token", "secret", "password"];

/// Serialize the config with secrets masked as `"***"`.
///
/// The public key is not secret and is kept.
pub fn redact(config: &GorkConfig) -> Value {
    let value = serde_json::to_value(config).unwrap_or(Value::Null);
    redact_recursive(value)
}

fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn redact_recursive(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| {
                    let v = match v {
                        Value::String(s) if is_sensitive_key(&k) && !s.is_empty() => {
                            Value::String("***".to_string())
                        }
                        other => redact_recursive(other),
                    };
                    (k, v)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(redact_recursive).collect()),
        other => other,
    }
}
