//! Script builder for Neo contract-invocation bytecode.
//!
//! Encoding rules: payloads up to 75 bytes use a direct push (the opcode
//! byte is the length), longer payloads use PUSHDATA1/2/4 with a
//! little-endian length prefix. Integers use the dedicated opcodes for
//! -1 and 0..=16 and otherwise the minimal-length little-endian
//! two's-complement byte push, so a given integer always encodes to the
//! same bytes.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::op_code::OpCode;
use crate::script::Script;

/// Helps construct VM scripts programmatically.
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Emits a single byte to the script.
    pub fn emit(&mut self, op: u8) -> &mut Self {
        self.script.push(op);
        self
    }

    /// Emits an opcode to the script.
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits raw bytes to the script without any push framing.
    pub fn emit_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Emits a length-prefixed data push.
    pub fn emit_push(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();

        if len <= OpCode::PUSHBYTES75 as usize {
            // Direct push: the opcode byte is the payload length.
            self.emit(len as u8);
        } else if len <= 0xFF {
            self.emit_opcode(OpCode::PUSHDATA1);
            self.emit(len as u8);
        } else if len <= 0xFFFF {
            self.emit_opcode(OpCode::PUSHDATA2);
            self.emit((len & 0xFF) as u8);
            self.emit((len >> 8) as u8);
        } else {
            self.emit_opcode(OpCode::PUSHDATA4);
            self.emit((len & 0xFF) as u8);
            self.emit(((len >> 8) & 0xFF) as u8);
            self.emit(((len >> 16) & 0xFF) as u8);
            self.emit(((len >> 24) & 0xFF) as u8);
        }
        self.script.extend_from_slice(data);
        self
    }

    /// Emits a push operation for a boolean.
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit_opcode(OpCode::PUSH1)
        } else {
            self.emit_opcode(OpCode::PUSH0)
        }
    }

    /// Emits the canonical minimal push for an arbitrary-precision integer.
    pub fn emit_push_big_int(&mut self, value: &BigInt) -> &mut Self {
        if value.is_zero() {
            return self.emit_opcode(OpCode::PUSH0);
        }
        if let Some(v) = value.to_i64() {
            if v == -1 {
                return self.emit_opcode(OpCode::PUSHM1);
            }
            if let Some(op) = OpCode::for_small_int(v) {
                return self.emit(op);
            }
        }
        // to_signed_bytes_le is the minimal two's-complement encoding, so
        // structurally equal integers always produce identical pushes.
        self.emit_push(&value.to_signed_bytes_le())
    }

    /// Emits a push operation for a machine integer.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        self.emit_push_big_int(&BigInt::from(value))
    }

    /// Emits a push operation for a UTF-8 string.
    pub fn emit_push_string(&mut self, value: &str) -> &mut Self {
        self.emit_push(value.as_bytes())
    }

    /// Emits "push count, PACK": collapses the top `count` stack items into
    /// one array value. A count of zero produces an empty array.
    pub fn emit_pack(&mut self, count: usize) -> &mut Self {
        self.emit_push_int(count as i64);
        self.emit_opcode(OpCode::PACK)
    }

    /// Converts the builder to a script.
    pub fn to_script(&self) -> Script {
        Script::new(self.script.clone())
    }

    /// Converts the builder to a byte array.
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
