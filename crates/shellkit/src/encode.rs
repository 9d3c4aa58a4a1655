//! Base64 conversion of text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use shellkit_core::{EncodedText, Result, TextEncoding, ToolError};

/// Convert text to bytes in the given encoding.
///
/// ASCII replaces every non-ASCII character with `?`.
#[must_use]
pub fn to_bytes(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf16le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        TextEncoding::Ascii => text
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
            .collect(),
    }
}

/// Interpret bytes as text in the given encoding.
pub fn from_bytes(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|e| ToolError::InvalidInput(format!("decoded bytes are not UTF-8: {e}"))),
        TextEncoding::Utf16le => {
            if bytes.len() % 2 != 0 {
                return Err(ToolError::InvalidInput(
                    "decoded bytes have odd length, not UTF-16".to_string(),
                ));
            }
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units)
                .map_err(|e| ToolError::InvalidInput(format!("decoded bytes are not UTF-16: {e}")))
        }
        TextEncoding::Ascii => {
            if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
                return Err(ToolError::InvalidInput(format!(
                    "decoded byte {pos} is not ASCII"
                )));
            }
            Ok(bytes.iter().map(|b| char::from(*b)).collect())
        }
    }
}

/// Encode text as standard padded base64.
#[must_use]
pub fn encode(text: &str, encoding: TextEncoding) -> EncodedText {
    EncodedText {
        input: text.to_string(),
        encoding,
        output: STANDARD.encode(to_bytes(text, encoding)),
    }
}

/// Decode standard base64 back to text.
///
/// Surrounding whitespace is ignored.
pub fn decode(encoded: &str, encoding: TextEncoding) -> Result<EncodedText> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ToolError::InvalidInput(format!("not valid base64: {e}")))?;

    Ok(EncodedText {
        input: encoded.to_string(),
        encoding,
        output: from_bytes(&bytes, encoding)?,
    })
}
