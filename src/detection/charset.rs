use crate::types::constants::CHARSET_GUESS_SIZE;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::warn;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Detected input encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    pub encoding: &'static Encoding,
    pub has_bom: bool,
}

impl Charset {
    /// Short name for reports, e.g. `utf8`, `UTF-8BOM` or `windows1252`
    pub fn name(&self) -> String {
        if self.encoding == encoding_rs::UTF_8 {
            if self.has_bom {
                "UTF-8BOM".to_string()
            } else {
                "utf8".to_string()
            }
        } else if self.encoding == encoding_rs::UTF_16LE || self.encoding == encoding_rs::UTF_16BE
        {
            self.encoding.name().to_string()
        } else {
            self.encoding.name().to_lowercase().replace(['-', '_'], "")
        }
    }
}

/// Detect the character encoding of raw input bytes
pub fn detect_charset(data: &[u8]) -> Charset {
    let bom = |encoding| Charset {
        encoding,
        has_bom: true,
    };
    match data {
        d if d.starts_with(UTF8_BOM) => return bom(encoding_rs::UTF_8),
        d if d.starts_with(UTF16_LE_BOM) => return bom(encoding_rs::UTF_16LE),
        d if d.starts_with(UTF16_BE_BOM) => return bom(encoding_rs::UTF_16BE),
        _ => {}
    }

    // Small inputs that are valid UTF-8 skip the statistical guess
    if data.len() <= CHARSET_GUESS_SIZE && std::str::from_utf8(data).is_ok() {
        return Charset {
            encoding: encoding_rs::UTF_8,
            has_bom: false,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    Charset {
        encoding: detector.guess(None, true),
        has_bom: false,
    }
}

/// Decode raw bytes to UTF-8 text, dropping any byte-order mark.
/// Malformed sequences become U+FFFD, decoding never fails.
pub fn decode(data: &[u8], charset: Charset) -> String {
    if charset.encoding == encoding_rs::UTF_8 {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        if let Ok(text) = std::str::from_utf8(data) {
            return text.to_string();
        }
    }

    let (decoded, _, had_errors) = charset.encoding.decode(data);
    if had_errors {
        warn!(
            encoding = charset.encoding.name(),
            "malformed input replaced with U+FFFD"
        );
    }
    decoded.into_owned()
}

/// Detect and decode in one step
pub fn decode_input(data: &[u8]) -> (String, Charset) {
    let charset = detect_charset(data);
    (decode(data, charset), charset)
}
