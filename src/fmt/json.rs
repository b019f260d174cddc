//! Pretty JSON for embedding values in diagnostic messages.

use serde::Serialize;

/// Two-space indented JSON. Serialization failures yield an empty string so a
/// log call never has to handle them.
#[must_use]
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
