//! Text encoding of properties files.

use encoding_rs::mem::{decode_latin1, encode_latin1_lossy, is_str_latin1};
use encoding_rs::UTF_8;
use jasper_common::PropertiesEncoding;
use std::borrow::Cow;

/// Encodes `text`, or returns `None` when a character has no representation
/// in `encoding`.
pub fn encode_text(text: &str, encoding: PropertiesEncoding) -> Option<Cow<'_, [u8]>> {
    match encoding {
        PropertiesEncoding::Utf8 => Some(Cow::Borrowed(text.as_bytes())),
        PropertiesEncoding::Latin1 => {
            if is_str_latin1(text) {
                Some(encode_latin1_lossy(text))
            } else {
                None
            }
        }
    }
}

/// Decodes `bytes`, or returns `None` when they are not valid in `encoding`.
pub fn decode_text(bytes: &[u8], encoding: PropertiesEncoding) -> Option<Cow<'_, str>> {
    match encoding {
        PropertiesEncoding::Utf8 => UTF_8.decode_without_bom_handling_and_without_replacement(bytes),
        PropertiesEncoding::Latin1 => Some(decode_latin1(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_is_single_byte() {
        let bytes = encode_text("é", PropertiesEncoding::Latin1).unwrap();
        assert_eq!(bytes.as_ref(), &[0xE9]);
    }

    #[test]
    fn test_latin1_rejects_euro_sign() {
        assert!(encode_text("5 €", PropertiesEncoding::Latin1).is_none());
    }

    #[test]
    fn test_utf8_round_trip() {
        let bytes = encode_text("Montant dû", PropertiesEncoding::Utf8).unwrap();
        assert_eq!(bytes.len(), "Montant dû".len());
        assert_eq!(
            decode_text(&bytes, PropertiesEncoding::Utf8).unwrap(),
            "Montant dû"
        );
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(decode_text(&[0xE9, 0x41], PropertiesEncoding::Utf8).is_none());
        assert_eq!(
            decode_text(&[0xE9, 0x41], PropertiesEncoding::Latin1).unwrap(),
            "éA"
        );
    }
}
