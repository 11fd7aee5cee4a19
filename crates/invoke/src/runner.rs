//! Sandboxed invocation execution.
//!
//! The runner binds a script to the draft transaction and hands both to an
//! external VM sandbox. The sandbox is a simulation: whatever the script
//! does, no ledger state is persisted. Execution failure is reported
//! through the outcome's state, not through an error channel, so callers
//! must inspect `state` to detect a fault.

use log::debug;
use serde_json::json;

use neo_invoke_vm::{Script, StackItem, VMState, VmError};

use crate::error::{InvokeError, InvokeResult};
use crate::fixed8::Fixed8;
use crate::parameter::ContractParameter;
use crate::transaction::InvocationTransaction;

/// Capability to execute a script against a bounded, side-effect-free VM.
pub trait Sandbox {
    /// Runs `script` bound to `context`, returning how the run ended.
    ///
    /// A script the VM cannot decode must come back as a faulted outcome,
    /// never as a panic or a separate error.
    fn execute(&self, script: &Script, context: &InvocationTransaction) -> InvocationOutcome;
}

/// The result of one sandbox execution.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationOutcome {
    /// How the VM terminated.
    pub state: VMState,

    /// Gas accumulated during the run; meaningful only when halted.
    pub gas_consumed: Fixed8,

    /// Values left on the VM's result stack; meaningful only when halted.
    pub result_stack: Vec<StackItem>,
}

impl InvocationOutcome {
    /// A successful termination.
    pub fn halted(gas_consumed: Fixed8, result_stack: Vec<StackItem>) -> Self {
        Self {
            state: VMState::HALT,
            gas_consumed,
            result_stack,
        }
    }

    /// An abnormal termination; carries no gas figure and no results.
    pub fn faulted() -> Self {
        Self {
            state: VMState::FAULT,
            gas_consumed: Fixed8::ZERO,
            result_stack: Vec::new(),
        }
    }

    /// The result stack rendered as JSON, for display.
    pub fn result_stack_json(&self) -> serde_json::Value {
        json!(self
            .result_stack
            .iter()
            .map(|item| ContractParameter::from_stack_item(item).to_json())
            .collect::<Vec<_>>())
    }

    /// Multi-line human-readable summary of the run.
    pub fn summary(&self) -> String {
        format!(
            "VM State: {}\nGas Consumed: {}\nEvaluation Stack: {}",
            self.state,
            self.gas_consumed,
            self.result_stack_json()
        )
    }
}

/// Runs invocation scripts through a sandbox, one attempt at a time.
pub struct InvocationRunner<S: Sandbox> {
    sandbox: S,
}

impl<S: Sandbox> InvocationRunner<S> {
    pub fn new(sandbox: S) -> Self {
        Self { sandbox }
    }

    /// Executes a built script against the draft transaction.
    ///
    /// The draft is copied, its version forced to 1 and the script
    /// installed; attributes, inputs and outputs stay as drafted. The
    /// caller's draft is never mutated.
    pub fn run(&self, script: &Script, draft: &InvocationTransaction) -> InvocationOutcome {
        let mut context = draft.clone();
        context.version = 1;
        context.script = script.as_bytes().to_vec();
        debug!("running {} byte script in sandbox", script.len());
        self.sandbox.execute(script, &context)
    }

    /// Executes a hand-typed hex script.
    ///
    /// Hex that fails to parse is a caller-input problem
    /// ([`InvokeError::MalformedScriptInput`]); hex that parses but the VM
    /// cannot execute surfaces as a faulted outcome like any other run.
    pub fn run_hex(&self, text: &str, draft: &InvocationTransaction) -> InvokeResult<InvocationOutcome> {
        let script = Script::from_hex(text).map_err(|e| match e {
            VmError::MalformedScript(msg) => InvokeError::MalformedScriptInput(msg),
            other => InvokeError::MalformedScriptInput(other.to_string()),
        })?;
        Ok(self.run(&script, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sandbox returning a scripted outcome, recording nothing.
    struct FixedSandbox(InvocationOutcome);

    impl Sandbox for FixedSandbox {
        fn execute(&self, _script: &Script, _context: &InvocationTransaction) -> InvocationOutcome {
            self.0.clone()
        }
    }

    /// Sandbox asserting the context it receives.
    struct InspectingSandbox;

    impl Sandbox for InspectingSandbox {
        fn execute(&self, script: &Script, context: &InvocationTransaction) -> InvocationOutcome {
            assert_eq!(context.version, 1);
            assert_eq!(context.script, script.as_bytes());
            InvocationOutcome::halted(Fixed8::ZERO, Vec::new())
        }
    }

    #[test]
    fn test_run_binds_script_without_mutating_draft() {
        let runner = InvocationRunner::new(InspectingSandbox);
        let draft = InvocationTransaction::default();
        let script = Script::new(vec![0x00, 0xC1, 0x67]);
        let outcome = runner.run(&script, &draft);
        assert!(outcome.state.is_halt());
        // The caller's draft still has no script.
        assert!(draft.script.is_empty());
    }

    #[test]
    fn test_run_hex_rejects_bad_input() {
        let runner = InvocationRunner::new(FixedSandbox(InvocationOutcome::faulted()));
        let draft = InvocationTransaction::default();
        let err = runner.run_hex("zz", &draft).unwrap_err();
        assert!(matches!(err, InvokeError::MalformedScriptInput(_)));
    }

    #[test]
    fn test_run_hex_accepts_valid_input() {
        let runner = InvocationRunner::new(FixedSandbox(InvocationOutcome::halted(
            Fixed8::from_integer(1),
            vec![StackItem::Boolean(true)],
        )));
        let draft = InvocationTransaction::default();
        let outcome = runner.run_hex("00c167", &draft).unwrap();
        assert!(outcome.state.is_halt());
        assert_eq!(outcome.result_stack, vec![StackItem::Boolean(true)]);
    }

    #[test]
    fn test_faulted_outcome_shape() {
        let outcome = InvocationOutcome::faulted();
        assert!(outcome.state.is_fault());
        assert_eq!(outcome.gas_consumed, Fixed8::ZERO);
        assert!(outcome.result_stack.is_empty());
    }

    #[test]
    fn test_summary_renders_stack() {
        let outcome = InvocationOutcome::halted(
            Fixed8::from_raw(150_000_000),
            vec![StackItem::integer(42)],
        );
        let summary = outcome.summary();
        assert!(summary.contains("VM State: HALT"));
        assert!(summary.contains("Gas Consumed: 1.5"));
        assert!(summary.contains("\"42\""));
    }
}
