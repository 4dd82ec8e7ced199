use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Pasteboard type Maccy uses for UTF-8 text payloads.
pub const PLAIN_TEXT_TYPE: &str = "public.utf8-plain-text";

/// One payload attached to a history record.
///
/// Serializes as `{"type": ..., "value": ...}`. Text payloads are emitted
/// verbatim, everything else as standard base64, so raw bytes never reach
/// textual output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Pasteboard type tag as stored (e.g. `public.png`).
    pub content_type: String,
    /// Raw payload bytes.
    pub value: Vec<u8>,
}

impl ContentBlock {
    pub fn new(content_type: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into(),
            value: value.into(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.content_type == PLAIN_TEXT_TYPE
    }

    /// Textual rendering of the payload, following the serialization policy.
    pub fn rendered_value(&self) -> String {
        if self.is_text() {
            String::from_utf8_lossy(&self.value).into_owned()
        } else {
            BASE64.encode(&self.value)
        }
    }
}

impl Serialize for ContentBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ContentBlock", 2)?;
        state.serialize_field("type", &self.content_type)?;
        state.serialize_field("value", &self.rendered_value())?;
        state.end()
    }
}
