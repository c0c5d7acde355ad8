// ============================================================================
// Encoding Module - Public API
//
// Turns the user's free-text encoding answer into a codec and decodes
// selected dictionaries into text lines.
//
// Resolution accepts WHATWG labels ("utf-8", "cp1252", "iso-8859-15", ...) and
// bare Windows code page numbers ("1252"), which is what the encoding prompt
// suggests for dictionaries saved on Windows. WHATWG folds ISO-8859-1 and
// ASCII into windows-1252; those labels get their own codecs here so that
// 0x80-0x9F stay C1 controls under latin-1 and high bytes fail under ASCII.
// ============================================================================

use crate::errors::{MergerError, MergerResult};
use encoding_rs::Encoding;

pub mod converter;

pub use converter::EncodingConverter;

/// Codec used when the encoding prompt is answered with an empty line
pub const DEFAULT_ENCODING_LABEL: &str = "utf-8";

// Normalized spellings of ISO-8859-1
const LATIN1_LABELS: &[&str] = &[
    "latin1",
    "latin-1",
    "latin",
    "l1",
    "iso-8859-1",
    "iso8859-1",
    "iso88591",
    "8859",
    "cp819",
    "ibm819",
    "iso-ir-100",
    "csisolatin1",
];

// Normalized spellings of 7-bit ASCII
const ASCII_LABELS: &[&str] = &[
    "ascii",
    "us-ascii",
    "646",
    "us",
    "ansi-x3.4-1968",
    "iso646-us",
    "iso-ir-6",
    "cp367",
    "ibm367",
    "csascii",
];

/// A resolved text codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// ISO-8859-1: each byte is the code point of the same value
    Latin1,
    /// 7-bit ASCII: bytes above 0x7F are malformed
    Ascii,
    /// Any other codec known to encoding_rs
    Whatwg(&'static Encoding),
}

impl Codec {
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Latin1 => "iso-8859-1",
            Codec::Ascii => "ascii",
            Codec::Whatwg(encoding) => encoding.name(),
        }
    }

    fn for_label(label: &str) -> Option<Self> {
        if LATIN1_LABELS.contains(&label) {
            Some(Codec::Latin1)
        } else if ASCII_LABELS.contains(&label) {
            Some(Codec::Ascii)
        } else {
            Encoding::for_label_no_replacement(label.as_bytes()).map(Codec::Whatwg)
        }
    }
}

/// The encoding answer given at the start of a run
///
/// Resolution is deferred until a dictionary is actually read, so an unknown
/// codec name only fails a run that selects at least one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingChoice {
    label: String,
}

impl EncodingChoice {
    /// Build a choice from the raw prompt answer, falling back to `default_label` when empty
    pub fn from_answer(answer: &str, default_label: &str) -> Self {
        let label = if answer.is_empty() {
            default_label
        } else {
            answer
        };
        Self {
            label: label.to_string(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolve the label to a codec
    pub fn resolve(&self) -> MergerResult<Codec> {
        resolve_label(&self.label).ok_or_else(|| MergerError::UnknownEncoding(self.label.clone()))
    }
}

/// Look up a codec by user-facing name
///
/// Matching is case-insensitive and treats `_` and spaces as `-`. A bare number
/// is tried as `windows-N`, `cpN` and `iso-8859-N` in that order.
pub fn resolve_label(label: &str) -> Option<Codec> {
    let normalized: String = label
        .trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    if normalized.is_empty() {
        return None;
    }

    let mut candidates = vec![normalized.clone(), normalized.replace('-', "")];
    if normalized.chars().all(|c| c.is_ascii_digit()) {
        candidates.push(format!("windows-{}", normalized));
        candidates.push(format!("cp{}", normalized));
        candidates.push(format!("iso-8859-{}", normalized));
    }

    candidates
        .iter()
        .find_map(|candidate| Codec::for_label(candidate))
}
