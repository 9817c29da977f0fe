use std::string::FromUtf8Error;
use thiserror::Error;

/// Raw bytes that are not valid UTF-8 text.
#[derive(Debug, Error)]
#[error("invalid UTF-8 data: first bad byte at offset {}", .0.utf8_error().valid_up_to())]
pub struct DecodeError(#[from] FromUtf8Error);

impl DecodeError {
    /// Length of the longest valid UTF-8 prefix.
    pub fn valid_up_to(&self) -> usize {
        self.0.utf8_error().valid_up_to()
    }

    /// Give back the bytes that failed to decode.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }
}

/// Text that cannot be represented as UTF-8 bytes.
///
/// A `&str` is always valid UTF-8, so the encoder never produces this today.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("text cannot be encoded as UTF-8")]
    Unrepresentable,
}
