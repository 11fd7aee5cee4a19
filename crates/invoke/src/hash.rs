//! Fixed-width byte identifiers.
//!
//! Stored little-endian in memory, rendered big-endian (reversed) with a
//! `0x` prefix, which is how script hashes and asset ids circulate in user
//! input and ABI documents.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvokeError, InvokeResult};

const U160_LEN: usize = 20;
const U256_LEN: usize = 32;

/// 160-bit identifier of a deployed contract (its script hash).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UInt160([u8; U160_LEN]);

/// 256-bit identifier, used for asset and transaction ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UInt256([u8; U256_LEN]);

fn parse_rev_hex(value: &str, out: &mut [u8]) -> InvokeResult<()> {
    let trimmed = value.trim();
    let without_prefix = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if without_prefix.len() != out.len() * 2 {
        return Err(InvokeError::InvalidIdentity(format!(
            "expected {} hex characters, found {}",
            out.len() * 2,
            without_prefix.len()
        )));
    }
    let bytes = hex::decode(without_prefix)
        .map_err(|e| InvokeError::InvalidIdentity(e.to_string()))?;
    for (dst, src) in out.iter_mut().zip(bytes.iter().rev()) {
        *dst = *src;
    }
    Ok(())
}

fn rev_hex(bytes: &[u8]) -> String {
    let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
    hex::encode(reversed)
}

impl UInt160 {
    pub const LENGTH: usize = U160_LEN;
    pub const ZERO: Self = Self([0u8; U160_LEN]);

    #[inline]
    pub const fn new(bytes: [u8; U160_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds an identifier from a slice, validating the exact length.
    pub fn from_slice(slice: &[u8]) -> InvokeResult<Self> {
        if slice.len() != U160_LEN {
            return Err(InvokeError::InvalidIdentity(format!(
                "expected {} bytes, found {}",
                U160_LEN,
                slice.len()
            )));
        }
        let mut buf = [0u8; U160_LEN];
        buf.copy_from_slice(slice);
        Ok(Self(buf))
    }

    /// Parses the reversed-hex form, with or without the `0x` prefix.
    pub fn from_hex_str(value: &str) -> InvokeResult<Self> {
        let mut buf = [0u8; U160_LEN];
        parse_rev_hex(value, &mut buf)?;
        Ok(Self(buf))
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8; U160_LEN] {
        &self.0
    }

    #[inline]
    pub fn to_vec(self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl UInt256 {
    pub const LENGTH: usize = U256_LEN;
    pub const ZERO: Self = Self([0u8; U256_LEN]);

    #[inline]
    pub const fn new(bytes: [u8; U256_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> InvokeResult<Self> {
        if slice.len() != U256_LEN {
            return Err(InvokeError::InvalidIdentity(format!(
                "expected {} bytes, found {}",
                U256_LEN,
                slice.len()
            )));
        }
        let mut buf = [0u8; U256_LEN];
        buf.copy_from_slice(slice);
        Ok(Self(buf))
    }

    pub fn from_hex_str(value: &str) -> InvokeResult<Self> {
        let mut buf = [0u8; U256_LEN];
        parse_rev_hex(value, &mut buf)?;
        Ok(Self(buf))
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8; U256_LEN] {
        &self.0
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", rev_hex(&self.0))
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for UInt160 {
    type Err = InvokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", rev_hex(&self.0))
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for UInt256 {
    type Err = InvokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl serde::Serialize for UInt160 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for UInt160 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex_str(&value).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for UInt256 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for UInt256 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex_str(&value).map_err(serde::de::Error::custom)
    }
}
