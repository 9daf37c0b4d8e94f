use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Prefix mixed into masked payloads by default.
pub const DEFAULT_MASK_PREFIX: &str = "underwater_";

/// Keyless transport masking for submissions: `base64(prefix + payload)`.
///
/// This only keeps casual observers from reading or hand-editing payloads.
/// Anyone who knows the prefix can forge a submission; it provides neither
/// integrity nor confidentiality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingCodec {
    prefix: String,
}

impl MaskingCodec {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Mask `payload` for transport.
    pub fn obscure(&self, payload: &str) -> String {
        STANDARD.encode(format!("{}{}", self.prefix, payload))
    }

    /// Unmask a payload produced by [`obscure`](Self::obscure).
    ///
    /// Returns `None` if `masked` is not base64, does not decode to UTF-8,
    /// or does not start with the prefix.
    pub fn reveal(&self, masked: &str) -> Option<String> {
        let bytes = STANDARD.decode(masked.trim()).ok()?;
        let text = String::from_utf8(bytes).ok()?;
        text.strip_prefix(&self.prefix).map(str::to_owned)
    }
}

impl Default for MaskingCodec {
    fn default() -> Self {
        Self::new(DEFAULT_MASK_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obscure_matches_known_encoding() {
        let codec = MaskingCodec::default();
        // base64("underwater_{}")
        assert_eq!(codec.obscure("{}"), "dW5kZXJ3YXRlcl97fQ==");
    }

    #[test]
    fn reveal_inverts_obscure() {
        let codec = MaskingCodec::default();
        let payload = r#"{"name":"Reef","time":12.5}"#;
        assert_eq!(codec.reveal(&codec.obscure(payload)).as_deref(), Some(payload));
    }

    #[test]
    fn reveal_rejects_wrong_prefix() {
        let ours = MaskingCodec::default();
        let theirs = MaskingCodec::new("surface_");
        assert_eq!(ours.reveal(&theirs.obscure("{}")), None);
    }

    #[test]
    fn reveal_rejects_garbage() {
        let codec = MaskingCodec::default();
        assert_eq!(codec.reveal("not base64!"), None);
        assert_eq!(codec.reveal(&STANDARD.encode([0xff, 0xfe, 0xfd])), None);
        assert_eq!(codec.reveal(""), None);
    }

    #[test]
    fn empty_payload_reveals_empty() {
        let codec = MaskingCodec::default();
        assert_eq!(codec.reveal(&codec.obscure("")).as_deref(), Some(""));
    }
}
