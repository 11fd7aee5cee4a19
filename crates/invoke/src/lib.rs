//! # Neo contract invocation
//!
//! Builds contract-invocation scripts from typed parameter lists and
//! estimates their gas fee by dry-running them in an external VM sandbox.
//!
//! The pipeline is a synchronous sequence of pure transformations:
//! parameters are assembled into an immutable tree, encoded into a call
//! script, executed once in a side-effect-free sandbox, and the resulting
//! gas figure is turned into a fee quote. Each invocation attempt uses a
//! fresh parameter tree and runs to completion before the next; no type
//! here is meant for concurrent mutation.
//!
//! ## Example
//!
//! ```rust
//! use neo_invoke::{
//!     build_invocation_script, ContractParameter, FeePolicy, Fixed8,
//!     InvocationOutcome, InvocationRunner, InvocationTransaction, Sandbox,
//!     Script, UInt160,
//! };
//!
//! struct NullSandbox;
//!
//! impl Sandbox for NullSandbox {
//!     fn execute(&self, _: &Script, _: &InvocationTransaction) -> InvocationOutcome {
//!         InvocationOutcome::halted(Fixed8::ZERO, Vec::new())
//!     }
//! }
//!
//! # fn main() -> Result<(), neo_invoke::InvokeError> {
//! let hash = UInt160::from_hex_str("0xd42561e3d30e15be6400b6c2f2d9fb59d32eec6f")?;
//! let params = vec![ContractParameter::string("decimals")];
//! let script = build_invocation_script(&hash, &params)?;
//!
//! let runner = InvocationRunner::new(NullSandbox);
//! let outcome = runner.run(&Script::new(script), &InvocationTransaction::default());
//! let quote = FeePolicy::default().estimate_fee(&outcome)?;
//! assert_eq!(quote.charged_fee, Fixed8::ZERO);
//! # Ok(())
//! # }
//! ```

/// Contract-interface (ABI) descriptors
pub mod abi;
/// Invocation-script construction
pub mod builder;
/// Deployed-contract metadata and lookup
pub mod contract_state;
/// Error types
pub mod error;
/// Gas-fee derivation
pub mod fee;
/// Fixed-point gas amounts
pub mod fixed8;
/// Fixed-width byte identifiers
pub mod hash;
/// Typed contract parameters
pub mod parameter;
/// Sandboxed invocation execution
pub mod runner;
/// Draft invocation transaction
pub mod transaction;

pub use abi::{AbiFile, AbiFunction, AbiParameter};
pub use builder::{build_invocation_script, build_invocation_script_for, emit_app_call};
pub use contract_state::{ContractRegistry, ContractState};
pub use error::{InvokeError, InvokeResult};
pub use fee::{FeePolicy, FeeQuote};
pub use fixed8::Fixed8;
pub use hash::{UInt160, UInt256};
pub use parameter::{ContractParameter, ContractParameterType, ParameterValue};
pub use runner::{InvocationOutcome, InvocationRunner, Sandbox};
pub use transaction::{
    CoinReference, InvocationTransaction, TransactionAttribute, TransactionOutput,
};

// Re-exported so downstream callers need only this crate.
pub use neo_invoke_vm::{OpCode, Script, ScriptBuilder, StackItem, VMState};
