//! JSON output via serde_json.

use serde::Serialize;

/// Pretty JSON followed by a newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => json + "\n",
        Err(e) => {
            log::error!("Error serializing JSON: {e}");
            serde_json::json!({ "error": e.to_string() }).to_string() + "\n"
        }
    }
}
