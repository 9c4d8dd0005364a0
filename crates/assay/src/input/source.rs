//! Metadata describing where a profiled text came from.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::delimiter::format_label;

/// Metadata about the acquired source text.
///
/// Built by whoever acquires the text (file reader, upload handler). The
/// `hash` is a stable identity for the content, suitable as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name (or other display name).
    pub name: String,
    /// Size of the text in bytes.
    pub size_bytes: u64,
    /// MIME type reported by the acquirer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// SHA-256 hash of the contents.
    pub hash: String,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
}

impl SourceMetadata {
    /// Describe `text` as read from `name`, parsed with `delimiter`.
    pub fn new(
        name: impl Into<String>,
        text: &str,
        mime_type: Option<String>,
        delimiter: char,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes: text.len() as u64,
            mime_type,
            hash: content_hash(text),
            format: format_label(delimiter).to_string(),
        }
    }
}

/// Compute the `sha256:<hex>` identity of a text.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
