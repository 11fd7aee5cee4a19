//! Typed contract parameters.
//!
//! A parameter is a tagged value: its declared kind plus an optional value
//! whose runtime type must match the kind. The match is enforced when the
//! value is supplied, never deferred to encoding time. Array parameters
//! nest recursively; construction is strictly bottom-up, so no cycles can
//! form.

use std::str::FromStr;

use neo_invoke_vm::StackItem;
use num_bigint::BigInt;
use serde_json::json;

use crate::error::{InvokeError, InvokeResult};
use crate::hash::{UInt160, UInt256};

/// Declared kind of a contract parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContractParameterType {
    /// A boolean value.
    Boolean = 0x10,

    /// An arbitrary-precision signed integer.
    Integer = 0x11,

    /// A raw byte sequence.
    ByteArray = 0x12,

    /// A UTF-8 string.
    String = 0x13,

    /// A 160-bit hash (script hash).
    Hash160 = 0x14,

    /// A 256-bit hash.
    Hash256 = 0x15,

    /// An encoded elliptic-curve public key.
    PublicKey = 0x16,

    /// A signature.
    Signature = 0x17,

    /// An ordered list of nested parameters.
    Array = 0x20,

    /// A key-value collection; has no script encoding.
    Map = 0x22,

    /// A VM-internal interop handle; has no script encoding.
    InteropInterface = 0x30,

    /// Only valid as a method return type.
    Void = 0xff,
}

impl ContractParameterType {
    /// Canonical name used in ABI documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractParameterType::Boolean => "Boolean",
            ContractParameterType::Integer => "Integer",
            ContractParameterType::ByteArray => "ByteArray",
            ContractParameterType::String => "String",
            ContractParameterType::Hash160 => "Hash160",
            ContractParameterType::Hash256 => "Hash256",
            ContractParameterType::PublicKey => "PublicKey",
            ContractParameterType::Signature => "Signature",
            ContractParameterType::Array => "Array",
            ContractParameterType::Map => "Map",
            ContractParameterType::InteropInterface => "InteropInterface",
            ContractParameterType::Void => "Void",
        }
    }
}

impl FromStr for ContractParameterType {
    type Err = InvokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Boolean" => Ok(ContractParameterType::Boolean),
            "Integer" => Ok(ContractParameterType::Integer),
            "ByteArray" => Ok(ContractParameterType::ByteArray),
            "String" => Ok(ContractParameterType::String),
            "Hash160" => Ok(ContractParameterType::Hash160),
            "Hash256" => Ok(ContractParameterType::Hash256),
            "PublicKey" => Ok(ContractParameterType::PublicKey),
            "Signature" => Ok(ContractParameterType::Signature),
            "Array" => Ok(ContractParameterType::Array),
            "Map" => Ok(ContractParameterType::Map),
            "InteropInterface" => Ok(ContractParameterType::InteropInterface),
            "Void" => Ok(ContractParameterType::Void),
            other => Err(InvokeError::AbiParse(format!(
                "unknown parameter type {other:?}"
            ))),
        }
    }
}

impl serde::Serialize for ContractParameterType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ContractParameterType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// A populated parameter value; each variant pairs with exactly one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(UInt160),
    Hash256(UInt256),
    PublicKey(Vec<u8>),
    Signature(Vec<u8>),
    Array(Vec<ContractParameter>),
}

impl ParameterValue {
    /// The kind this value satisfies.
    pub fn kind(&self) -> ContractParameterType {
        match self {
            ParameterValue::Boolean(_) => ContractParameterType::Boolean,
            ParameterValue::Integer(_) => ContractParameterType::Integer,
            ParameterValue::ByteArray(_) => ContractParameterType::ByteArray,
            ParameterValue::String(_) => ContractParameterType::String,
            ParameterValue::Hash160(_) => ContractParameterType::Hash160,
            ParameterValue::Hash256(_) => ContractParameterType::Hash256,
            ParameterValue::PublicKey(_) => ContractParameterType::PublicKey,
            ParameterValue::Signature(_) => ContractParameterType::Signature,
            ParameterValue::Array(_) => ContractParameterType::Array,
        }
    }
}

/// A typed argument for a contract invocation.
///
/// Built fresh for each invocation attempt, either as a placeholder from a
/// declared kind or fully populated; discarded after one script build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractParameter {
    kind: ContractParameterType,
    value: Option<ParameterValue>,
}

impl ContractParameter {
    /// Creates an unpopulated placeholder of the declared kind.
    pub fn new(kind: ContractParameterType) -> Self {
        Self { kind, value: None }
    }

    /// Creates a populated parameter, rejecting a kind/value mismatch.
    pub fn with_value(kind: ContractParameterType, value: ParameterValue) -> InvokeResult<Self> {
        if value.kind() != kind {
            return Err(InvokeError::ParameterMismatch(kind));
        }
        Ok(Self {
            kind,
            value: Some(value),
        })
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            kind: ContractParameterType::Boolean,
            value: Some(ParameterValue::Boolean(value)),
        }
    }

    pub fn integer<T: Into<BigInt>>(value: T) -> Self {
        Self {
            kind: ContractParameterType::Integer,
            value: Some(ParameterValue::Integer(value.into())),
        }
    }

    pub fn byte_array<T: Into<Vec<u8>>>(bytes: T) -> Self {
        Self {
            kind: ContractParameterType::ByteArray,
            value: Some(ParameterValue::ByteArray(bytes.into())),
        }
    }

    pub fn string<T: Into<String>>(value: T) -> Self {
        Self {
            kind: ContractParameterType::String,
            value: Some(ParameterValue::String(value.into())),
        }
    }

    pub fn hash160(value: UInt160) -> Self {
        Self {
            kind: ContractParameterType::Hash160,
            value: Some(ParameterValue::Hash160(value)),
        }
    }

    pub fn hash256(value: UInt256) -> Self {
        Self {
            kind: ContractParameterType::Hash256,
            value: Some(ParameterValue::Hash256(value)),
        }
    }

    pub fn public_key<T: Into<Vec<u8>>>(bytes: T) -> Self {
        Self {
            kind: ContractParameterType::PublicKey,
            value: Some(ParameterValue::PublicKey(bytes.into())),
        }
    }

    pub fn signature<T: Into<Vec<u8>>>(bytes: T) -> Self {
        Self {
            kind: ContractParameterType::Signature,
            value: Some(ParameterValue::Signature(bytes.into())),
        }
    }

    pub fn array(elements: Vec<ContractParameter>) -> Self {
        Self {
            kind: ContractParameterType::Array,
            value: Some(ParameterValue::Array(elements)),
        }
    }

    /// The declared kind.
    pub fn kind(&self) -> ContractParameterType {
        self.kind
    }

    /// The populated value, if any.
    pub fn value(&self) -> Option<&ParameterValue> {
        self.value.as_ref()
    }

    /// Fills in the value, rejecting a kind/value mismatch.
    pub fn set_value(&mut self, value: ParameterValue) -> InvokeResult<()> {
        if value.kind() != self.kind {
            return Err(InvokeError::ParameterMismatch(self.kind));
        }
        self.value = Some(value);
        Ok(())
    }

    /// True iff every leaf value is set and every nested array recursively
    /// satisfies the same predicate.
    pub fn is_complete(&self) -> bool {
        match &self.value {
            None => false,
            Some(ParameterValue::Array(elements)) => elements.iter().all(|p| p.is_complete()),
            Some(_) => true,
        }
    }

    /// Converts a VM result-stack value into its parameter rendering,
    /// the shape result stacks are displayed in.
    pub fn from_stack_item(item: &StackItem) -> Self {
        match item {
            StackItem::Null => ContractParameter::byte_array(Vec::new()),
            StackItem::Boolean(b) => ContractParameter::boolean(*b),
            StackItem::Integer(n) => ContractParameter::integer(n.clone()),
            StackItem::ByteString(bytes) => ContractParameter::byte_array(bytes.clone()),
            StackItem::Array(items) => ContractParameter::array(
                items.iter().map(ContractParameter::from_stack_item).collect(),
            ),
        }
    }

    /// Display rendering of the parameter as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        let value = match &self.value {
            None => serde_json::Value::Null,
            Some(ParameterValue::Boolean(b)) => json!(b),
            Some(ParameterValue::Integer(n)) => json!(n.to_string()),
            Some(ParameterValue::ByteArray(bytes))
            | Some(ParameterValue::PublicKey(bytes))
            | Some(ParameterValue::Signature(bytes)) => json!(hex::encode(bytes)),
            Some(ParameterValue::String(s)) => json!(s),
            Some(ParameterValue::Hash160(h)) => json!(h.to_string()),
            Some(ParameterValue::Hash256(h)) => json!(h.to_string()),
            Some(ParameterValue::Array(elements)) => {
                json!(elements.iter().map(|p| p.to_json()).collect::<Vec<_>>())
            }
        };
        json!({
            "type": self.kind.as_str(),
            "value": value,
        })
    }
}
