//! Opcode definitions for the Neo Virtual Machine.
//!
//! Only the instructions the invocation-script builder emits are listed here;
//! the full instruction set belongs to the external VM.

/// A single instruction in the VM instruction set.
///
/// Byte values 0x01..=0x4B are direct data pushes (the opcode value is the
/// payload length) and therefore have no named variant; `ScriptBuilder`
/// emits them as raw length bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Pushes an empty byte array (integer zero) onto the stack.
    PUSH0 = 0x00,

    /// Largest direct push: the next 75 bytes are data.
    PUSHBYTES75 = 0x4B,

    /// The next byte holds the payload length (up to 255 bytes of data).
    PUSHDATA1 = 0x4C,

    /// The next two bytes (little-endian) hold the payload length.
    PUSHDATA2 = 0x4D,

    /// The next four bytes (little-endian) hold the payload length.
    PUSHDATA4 = 0x4E,

    /// Pushes the integer -1 onto the stack.
    PUSHM1 = 0x4F,

    /// Pushes the integer 1 onto the stack.
    PUSH1 = 0x51,

    /// Pushes the integer 2 onto the stack.
    PUSH2 = 0x52,

    /// Pushes the integer 3 onto the stack.
    PUSH3 = 0x53,

    /// Pushes the integer 4 onto the stack.
    PUSH4 = 0x54,

    /// Pushes the integer 5 onto the stack.
    PUSH5 = 0x55,

    /// Pushes the integer 6 onto the stack.
    PUSH6 = 0x56,

    /// Pushes the integer 7 onto the stack.
    PUSH7 = 0x57,

    /// Pushes the integer 8 onto the stack.
    PUSH8 = 0x58,

    /// Pushes the integer 9 onto the stack.
    PUSH9 = 0x59,

    /// Pushes the integer 10 onto the stack.
    PUSH10 = 0x5A,

    /// Pushes the integer 11 onto the stack.
    PUSH11 = 0x5B,

    /// Pushes the integer 12 onto the stack.
    PUSH12 = 0x5C,

    /// Pushes the integer 13 onto the stack.
    PUSH13 = 0x5D,

    /// Pushes the integer 14 onto the stack.
    PUSH14 = 0x5E,

    /// Pushes the integer 15 onto the stack.
    PUSH15 = 0x5F,

    /// Pushes the integer 16 onto the stack.
    PUSH16 = 0x60,

    /// Does nothing.
    NOP = 0x61,

    /// Returns from the current context.
    RET = 0x66,

    /// Calls the contract whose 160-bit script hash is on top of the stack.
    APPCALL = 0x67,

    /// Collapses the top N stack items into a single array value.
    PACK = 0xC1,
}

impl OpCode {
    /// Dedicated small-integer push opcode for values in 1..=16.
    ///
    /// Returns `None` outside that range; 0 and -1 have their own opcodes
    /// (`PUSH0`, `PUSHM1`) and everything else is a data push.
    pub fn for_small_int(value: i64) -> Option<u8> {
        if (1..=16).contains(&value) {
            Some(0x50 + value as u8)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_int_opcodes() {
        assert_eq!(OpCode::for_small_int(1), Some(OpCode::PUSH1 as u8));
        assert_eq!(OpCode::for_small_int(16), Some(OpCode::PUSH16 as u8));
        assert_eq!(OpCode::for_small_int(0), None);
        assert_eq!(OpCode::for_small_int(17), None);
        assert_eq!(OpCode::for_small_int(-1), None);
    }
}
