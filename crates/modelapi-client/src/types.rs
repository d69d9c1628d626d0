//! Payload types shared across the transport layer.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An outbound file for multipart upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Raw file contents.
    pub bytes: Bytes,
    /// File name sent in the multipart part.
    pub file_name: String,
    /// MIME type of the file contents.
    pub content_type: String,
}

impl FileUpload {
    /// Create a new file upload payload.
    pub fn new(
        bytes: impl Into<Bytes>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
        }
    }
}

/// A fully materialized downloaded file.
///
/// The whole body is buffered before this is returned; there is no streaming
/// variant, which caps practical file sizes at available memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    /// Raw file contents.
    #[serde(with = "bytes_serde")]
    pub bytes: Bytes,
    /// Content-Type reported by the backend.
    pub content_type: String,
}

/// Serde adapter for `Bytes` as an ordinary byte sequence.
mod bytes_serde {
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(bytes)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        let raw = Vec::<u8>::deserialize(deserializer)?;
        Ok(Bytes::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_upload_construction() {
        let upload = FileUpload::new(vec![1u8, 2, 3], "report.pdf", "application/pdf");
        assert_eq!(upload.bytes.as_ref(), &[1, 2, 3]);
        assert_eq!(upload.file_name, "report.pdf");
        assert_eq!(upload.content_type, "application/pdf");
    }

    #[test]
    fn test_file_payload_round_trips_through_serde() {
        let payload = FilePayload {
            bytes: Bytes::from_static(b"%PDF-1.4"),
            content_type: "application/pdf".to_string(),
        };

        let encoded = serde_json::to_string(&payload).unwrap();
        let decoded: FilePayload = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, payload);
    }
}
