//! Reversible password encoding.
//!
//! Passwords are stored as the base64 form of their UTF-8 bytes. Anyone holding
//! the stored bytes can recover the password; this is an encoding, not a hash.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("stored password is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("stored password is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub fn encode(password: &str) -> Vec<u8> {
    BASE64.encode(password.as_bytes()).into_bytes()
}

pub fn decode(encoded: &[u8]) -> Result<String, EncodingError> {
    let bytes = BASE64.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_standard_base64() {
        assert_eq!(encode("secretpass"), b"c2VjcmV0cGFzcw==".to_vec());
        assert_eq!(encode(""), Vec::<u8>::new());
    }

    #[test]
    fn round_trips_text() {
        for p in ["secretpass", "", " spaced out ", "pässwörd", "日本語🔑", "a/b+c=d"] {
            assert_eq!(decode(&encode(p)).unwrap(), p);
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(decode(b"not base64!!"), Err(EncodingError::Base64(_))));
        // 0xff 0xfe is valid base64 input but not utf-8 once decoded
        assert!(matches!(decode(b"//4="), Err(EncodingError::Utf8(_))));
    }
}
