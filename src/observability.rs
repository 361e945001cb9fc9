//! Logging helpers shared by the transformers.
//!
//! Payload logging is off by default. When enabled, raw records are written at `trace`
//! level through [`format_json_for_logging`], which masks e-mail addresses unless masking
//! has been switched off.

use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};

static PRETTY_JSON: AtomicBool = AtomicBool::new(false);
static MASK_SENSITIVE_VALUES: AtomicBool = AtomicBool::new(true);
static LOG_PAYLOADS: AtomicBool = AtomicBool::new(false);

pub fn set_pretty_json(pretty: bool) {
    PRETTY_JSON.store(pretty, Ordering::Relaxed);
}

pub fn get_pretty_json() -> bool {
    PRETTY_JSON.load(Ordering::Relaxed)
}

pub fn set_mask_sensitive_values(mask: bool) {
    MASK_SENSITIVE_VALUES.store(mask, Ordering::Relaxed);
}

pub fn get_mask_sensitive_values() -> bool {
    MASK_SENSITIVE_VALUES.load(Ordering::Relaxed)
}

pub fn set_log_payloads(enabled: bool) {
    LOG_PAYLOADS.store(enabled, Ordering::Relaxed);
}

pub fn get_log_payloads() -> bool {
    LOG_PAYLOADS.load(Ordering::Relaxed)
}

/// Mask an e-mail address, keeping the first character of the local part and the domain.
///
/// `ann.lee@example.com` becomes `a***@example.com`. Values without `@` are masked the
/// same way as other long secrets.
pub fn mask_email(value: &str) -> String {
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{first}***@{domain}")
        }
        _ => mask_sensitive_value(value),
    }
}

/// Mask an opaque sensitive value such as a VAT number.
pub fn mask_sensitive_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

fn is_email_key(key: &str) -> bool {
    key.to_ascii_lowercase().contains("email")
}

fn is_sensitive_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.contains("vat_number") || key.contains("iban")
}

/// Copy of `value` with sensitive string fields masked, at any depth.
pub fn mask_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| {
                    let masked = match v {
                        Value::String(s) if is_email_key(key) => Value::String(mask_email(s)),
                        Value::String(s) if is_sensitive_key(key) => {
                            Value::String(mask_sensitive_value(s))
                        }
                        other => mask_json(other),
                    };
                    (key.clone(), masked)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(mask_json).collect()),
        other => other.clone(),
    }
}

pub fn format_json_for_logging(value: &Value) -> String {
    let value = if get_mask_sensitive_values() {
        mask_json(value)
    } else {
        value.clone()
    };
    if get_pretty_json() {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    } else {
        value.to_string()
    }
}
