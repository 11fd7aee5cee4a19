//! # Neo invocation VM byte layer
//!
//! Opcode definitions and script construction for Neo contract-invocation
//! scripts. The virtual machine that executes these scripts is an external
//! collaborator; this crate only owns the byte encoding: push instructions,
//! the pack/call convention, and the container types an execution hands back
//! (termination state and result-stack values).
//!
//! ## Example
//!
//! ```rust
//! use neo_invoke_vm::{OpCode, ScriptBuilder};
//!
//! let mut sb = ScriptBuilder::new();
//! sb.emit_push_int(2);
//! sb.emit_push_int(3);
//! sb.emit_opcode(OpCode::PACK);
//! let bytes = sb.to_array();
//! assert_eq!(bytes, vec![0x52, 0x53, 0xC1]);
//! ```

/// VM error types and result handling
pub mod error;
/// VM opcode definitions
pub mod op_code;
/// Script byte container with hex round-trips
pub mod script;
/// Utility for constructing VM bytecode
pub mod script_builder;
/// Result-stack value model
pub mod stack_item;
/// VM termination state
pub mod vm_state;

pub use error::{VmError, VmResult};
pub use op_code::OpCode;
pub use script::Script;
pub use script_builder::ScriptBuilder;
pub use stack_item::StackItem;
pub use vm_state::VMState;
