//! Helpers for reading loosely-typed provider payloads

use super::ProviderId;
use crate::error::SearchError;
use serde_json::Value;

/// The result array at `path`, or a malformed-response error
pub(crate) fn result_array<'a>(
    provider: ProviderId,
    payload: &'a Value,
    path: &[&str],
) -> Result<&'a Vec<Value>, SearchError> {
    let mut current = payload;
    for key in path {
        current = current.get(key).ok_or_else(|| {
            SearchError::malformed(provider, format!("missing `{}`", path.join(".")))
        })?;
    }

    current.as_array().ok_or_else(|| {
        SearchError::malformed(provider, format!("`{}` is not an array", path.join(".")))
    })
}

/// Text at `path`; numbers are rendered in decimal, anything else is empty
pub(crate) fn text(item: &Value, path: &[&str]) -> String {
    let value = path.iter().try_fold(item, |v, key| v.get(key));

    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Text at `path`, or the provider's generic alt text when missing or empty
pub(crate) fn text_or_fallback(provider: ProviderId, item: &Value, path: &[&str]) -> String {
    let value = text(item, path);
    if value.is_empty() {
        provider.fallback_alt()
    } else {
        value
    }
}
