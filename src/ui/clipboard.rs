// src/ui/clipboard.rs

use serde_json::Value;
use tracing::warn;

/// Copy a pretty-printed payload to the system clipboard. Clipboard failures
/// are logged and reported as `false`, never surfaced as errors.
pub fn copy_json(value: &Value) -> bool {
    let pretty = match serde_json::to_string_pretty(value) {
        Ok(pretty) => pretty,
        Err(err) => {
            warn!(%err, "failed to serialize payload for clipboard");
            return false;
        }
    };
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(pretty)) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "clipboard copy failed");
            false
        }
    }
}
