//! Result-stack value model.
//!
//! The external VM leaves values on its evaluation stack when a script
//! halts; this is the subset of value shapes an invocation result can carry
//! back to the caller.

use num_bigint::BigInt;

/// A value left on the VM's result stack after execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackItem {
    /// Absence of a value.
    Null,

    /// A boolean value.
    Boolean(bool),

    /// An arbitrary-precision signed integer.
    Integer(BigInt),

    /// A byte string (also covers strings, hashes, keys and signatures).
    ByteString(Vec<u8>),

    /// An ordered collection of stack items.
    Array(Vec<StackItem>),
}

impl StackItem {
    /// Convenience constructor for integer items.
    pub fn integer<T: Into<BigInt>>(value: T) -> Self {
        StackItem::Integer(value.into())
    }

    /// Convenience constructor for byte-string items.
    pub fn byte_string<T: Into<Vec<u8>>>(bytes: T) -> Self {
        StackItem::ByteString(bytes.into())
    }
}

impl From<bool> for StackItem {
    fn from(value: bool) -> Self {
        StackItem::Boolean(value)
    }
}

impl From<Vec<u8>> for StackItem {
    fn from(bytes: Vec<u8>) -> Self {
        StackItem::ByteString(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(StackItem::integer(7), StackItem::Integer(BigInt::from(7)));
        assert_eq!(
            StackItem::byte_string(vec![1, 2]),
            StackItem::ByteString(vec![1, 2])
        );
        assert_eq!(StackItem::from(true), StackItem::Boolean(true));
    }
}
