//! Draft invocation transaction.
//!
//! The sandbox binds script execution to the transaction as currently
//! drafted: its attributes, inputs and outputs are real, while the gas
//! field is only final once a fee quote has been applied.

use crate::fee::FeeQuote;
use crate::fixed8::Fixed8;
use crate::hash::{UInt160, UInt256};

/// An attribute attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionAttribute {
    pub usage: u8,
    pub data: Vec<u8>,
}

/// A reference to an unspent output of a previous transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinReference {
    pub prev_hash: UInt256,
    pub prev_index: u16,
}

/// An output created by a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionOutput {
    pub asset_id: UInt256,
    pub value: Fixed8,
    pub script_hash: UInt160,
}

/// A contract-invocation transaction being drafted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationTransaction {
    pub version: u8,
    pub script: Vec<u8>,
    pub gas: Fixed8,
    pub attributes: Vec<TransactionAttribute>,
    pub inputs: Vec<CoinReference>,
    pub outputs: Vec<TransactionOutput>,
}

impl Default for InvocationTransaction {
    fn default() -> Self {
        Self {
            version: 1,
            script: Vec::new(),
            gas: Fixed8::ZERO,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

impl InvocationTransaction {
    /// Writes the derived gas back into the draft so it can be handed to
    /// the wallet for fee payment and signing.
    pub fn apply_fee_quote(&mut self, quote: &FeeQuote) {
        self.gas = quote.gas;
    }
}
