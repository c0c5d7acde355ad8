// ============================================================================
// Encoding Conversion Module
//
// Decodes a whole dictionary file with the selected codec and splits it into
// lines the way a text-mode reader does: "\r\n" and lone "\r" become "\n",
// every terminator stays attached to its line, and an unterminated last line
// is kept as is.
// ============================================================================

use super::Codec;
use crate::errors::{MergerError, MergerResult};
use encoding_rs::WINDOWS_1252;
use std::path::Path;

// Bytes windows-1252 leaves undefined; encoding_rs maps them to C1 controls
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

pub struct EncodingConverter;

impl EncodingConverter {
    /// Decode `bytes` with `codec`, failing on any malformed sequence
    ///
    /// No byte order mark is stripped; a leading BOM stays part of the first line.
    pub fn decode_strict(path: &Path, bytes: &[u8], codec: Codec) -> MergerResult<String> {
        let malformed = || MergerError::Decoding {
            path: path.to_path_buf(),
            encoding: codec.name(),
        };

        match codec {
            Codec::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Codec::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&b| char::from(b)).collect())
                } else {
                    Err(malformed())
                }
            }
            Codec::Whatwg(encoding) => {
                if encoding == WINDOWS_1252
                    && bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b))
                {
                    return Err(malformed());
                }
                encoding
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|text| text.into_owned())
                    .ok_or_else(malformed)
            }
        }
    }

    /// Split decoded text into terminated lines with newline translation
    pub fn split_text_lines(text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    current.push('\n');
                    lines.push(std::mem::take(&mut current));
                }
                '\n' => {
                    current.push('\n');
                    lines.push(std::mem::take(&mut current));
                }
                c => current.push(c),
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        lines
    }

    /// Decode a dictionary and return its lines
    pub fn decode_lines(path: &Path, bytes: &[u8], codec: Codec) -> MergerResult<Vec<String>> {
        let text = Self::decode_strict(path, bytes, codec)?;
        let lines = Self::split_text_lines(&text);
        log::debug!(
            "Decoded {} as {}: {} bytes, {} lines",
            path.display(),
            codec.name(),
            bytes.len(),
            lines.len()
        );
        Ok(lines)
    }
}
