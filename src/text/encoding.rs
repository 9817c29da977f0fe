use crate::error::{DecodeError, EncodeError};

/// Decode raw bytes as UTF-8 text.
pub fn decode_utf8(bytes: &[u8]) -> Result<String, DecodeError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Encode text as UTF-8 bytes.
pub fn encode_utf8(s: &str) -> Result<Vec<u8>, EncodeError> {
    Ok(s.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid() {
        assert_eq!(decode_utf8(b"whatDoesItDo").unwrap(), "whatDoesItDo");
        assert_eq!(decode_utf8("caf\u{e9}".as_bytes()).unwrap(), "café");
        assert_eq!(decode_utf8(&[]).unwrap(), "");
    }

    #[test]
    fn test_decode_invalid_reports_offset() {
        let err = decode_utf8(&[b'o', b'k', 0xff, b'!']).unwrap_err();
        assert_eq!(err.valid_up_to(), 2);
        assert!(err.to_string().contains("offset 2"));
        assert_eq!(err.into_bytes(), vec![b'o', b'k', 0xff, b'!']);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode_utf8("café").unwrap(), vec![b'c', b'a', b'f', 0xc3, 0xa9]);
        assert!(encode_utf8("").unwrap().is_empty());
    }
}
