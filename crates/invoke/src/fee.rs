//! Gas-fee derivation.
//!
//! A halted run's consumed gas is converted into the fee the transaction
//! will carry: a fixed free-tier allowance is subtracted, the remainder is
//! clamped at zero and rounded up to the next whole unit, and a
//! zero-rounded result is replaced by the minimum network fee. A faulted
//! run never yields a fee.

use log::{debug, warn};

use crate::error::{InvokeError, InvokeResult};
use crate::fixed8::Fixed8;
use crate::runner::InvocationOutcome;

/// Named fee constants. The defaults are the observed network values;
/// both are overridable rather than derived from any formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePolicy {
    /// Gas consumed up to this amount is free of charge.
    pub free_gas_allowance: Fixed8,

    /// Charged instead of a zero fee, so trivial invocations still carry
    /// a baseline network fee.
    pub min_network_fee: Fixed8,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            free_gas_allowance: Fixed8::from_integer(10),
            min_network_fee: Fixed8::ZERO,
        }
    }
}

/// The fee derived from one invocation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    /// Rounded gas above the free tier; written into the transaction.
    pub gas: Fixed8,

    /// What the invocation will actually cost the caller.
    pub charged_fee: Fixed8,
}

impl FeePolicy {
    /// Derives the fee for a halted outcome.
    ///
    /// A pure function of `gas_consumed`:
    /// `gas = ceil(max(0, gas_consumed - allowance))`, and the charged fee
    /// is `gas` itself unless it rounded to zero, in which case the
    /// minimum network fee is charged. A faulted outcome is a user-visible
    /// failure, never a zero-fee success.
    pub fn estimate_fee(&self, outcome: &InvocationOutcome) -> InvokeResult<FeeQuote> {
        if outcome.state.is_fault() {
            warn!("fee estimation abandoned: sandbox reported a faulted run");
            return Err(InvokeError::ExecutionFailed);
        }
        let gas = (outcome.gas_consumed - self.free_gas_allowance)
            .max(Fixed8::ZERO)
            .ceiling();
        let charged_fee = if gas.is_zero() {
            self.min_network_fee
        } else {
            gas
        };
        debug!(
            "gas consumed {} -> gas {}, charged fee {}",
            outcome.gas_consumed, gas, charged_fee
        );
        Ok(FeeQuote { gas, charged_fee })
    }
}
