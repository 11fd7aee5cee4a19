//! Deployed-contract metadata.

use serde::{Deserialize, Serialize};

use crate::hash::UInt160;
use crate::parameter::{ContractParameter, ContractParameterType};

/// Metadata of a deployed contract, as returned by a chain lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractState {
    /// The contract's 160-bit script hash.
    pub hash: UInt160,

    /// Display name.
    pub name: String,

    /// Declared code version.
    pub code_version: String,

    /// Declared author.
    pub author: String,

    /// Declared parameter kinds, in call order.
    pub parameter_list: Vec<ContractParameterType>,
}

impl ContractState {
    /// Allocates a fresh placeholder parameter tree for one invocation
    /// attempt; values must be filled in before a script can be built.
    pub fn parameter_template(&self) -> Vec<ContractParameter> {
        self.parameter_list
            .iter()
            .map(|kind| ContractParameter::new(*kind))
            .collect()
    }

    /// Comma-separated parameter kind names, for display.
    pub fn parameter_list_display(&self) -> String {
        self.parameter_list
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Capability to look up deployed-contract metadata by identity.
pub trait ContractRegistry {
    /// Returns the contract's metadata, or `None` when no contract is
    /// deployed under the given hash.
    fn get_contract(&self, hash: &UInt160) -> Option<ContractState>;
}
