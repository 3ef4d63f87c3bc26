//! Output encoding selection and transcoding.

use bytes::Bytes;
use encoding_rs::WINDOWS_1252;

use crate::error::ExportError;

/// Recognized CSV output encodings.
///
/// `Utf8` is transparent. `Latin1` transcodes each chunk through
/// encoding_rs; per the WHATWG label registry the `iso-8859-1` label
/// resolves to the windows-1252 superset, which is what legacy
/// Western-European spreadsheet imports expect anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    Utf8,
    Latin1,
}

impl OutputEncoding {
    /// Resolve a configured label to an encoding.
    ///
    /// An unrecognized label is a configuration error; callers must
    /// reject it at startup, before any request produces output.
    pub fn from_label(label: &str) -> Result<Self, ExportError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso-8859-1" | "latin1" => Ok(Self::Latin1),
            other => Err(ExportError::UnknownEncoding(other.to_string())),
        }
    }

    /// Transcode one chunk of serialized CSV text.
    pub fn encode(self, chunk: &str) -> Bytes {
        match self {
            Self::Utf8 => Bytes::copy_from_slice(chunk.as_bytes()),
            Self::Latin1 => {
                let (encoded, _, _) = WINDOWS_1252.encode(chunk);
                Bytes::from(encoded.into_owned())
            }
        }
    }
}
