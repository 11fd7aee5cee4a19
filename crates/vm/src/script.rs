//! Script byte container.

use std::fmt;

use crate::error::{VmError, VmResult};

/// A byte sequence of VM instructions.
///
/// The bytes are opaque at this layer; decoding and executing them is the
/// external VM's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script(Vec<u8>);

impl Script {
    /// Wraps raw script bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parses a hex-encoded script, as typed or pasted by a user.
    ///
    /// Surrounding whitespace is tolerated; anything that is not valid hex
    /// fails with [`VmError::MalformedScript`].
    pub fn from_hex(text: &str) -> VmResult<Self> {
        let bytes = hex::decode(text.trim())
            .map_err(|e| VmError::MalformedScript(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// The script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the script, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Script length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the script holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex rendering of the script bytes.
    pub fn to_hex_string(&self) -> String {
        hex::encode(&self.0)
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let script = Script::from_hex("00c167").unwrap();
        assert_eq!(script.as_bytes(), &[0x00, 0xC1, 0x67]);
        assert_eq!(script.to_hex_string(), "00c167");
    }

    #[test]
    fn test_hex_trims_whitespace() {
        let script = Script::from_hex("  51c1  ").unwrap();
        assert_eq!(script.as_bytes(), &[0x51, 0xC1]);
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(matches!(
            Script::from_hex("not hex"),
            Err(VmError::MalformedScript(_))
        ));
        assert!(matches!(
            Script::from_hex("abc"),
            Err(VmError::MalformedScript(_))
        ));
    }
}
