//! Contract-interface (ABI) descriptors.
//!
//! An ABI document names a target contract and its callable methods:
//!
//! ```json
//! {
//!     "hash": "0x...",
//!     "functions": [
//!         { "name": "transfer",
//!           "parameters": [ { "name": "from", "type": "Hash160" } ] }
//!     ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{InvokeError, InvokeResult};
use crate::hash::UInt160;
use crate::parameter::{ContractParameter, ContractParameterType};

/// A single `(name, kind)` parameter declaration of an ABI method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ContractParameterType,
}

/// A callable method declared by an ABI document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiFunction {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<AbiParameter>,
}

impl AbiFunction {
    /// Allocates a fresh placeholder parameter tree for this method.
    pub fn parameter_template(&self) -> Vec<ContractParameter> {
        self.parameters
            .iter()
            .map(|p| ContractParameter::new(p.kind))
            .collect()
    }

    /// Comma-separated declared parameter names, for display.
    pub fn parameter_names_display(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A contract-interface descriptor: the target identity plus its methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiFile {
    pub hash: UInt160,
    pub functions: Vec<AbiFunction>,
}

impl AbiFile {
    /// Parses an ABI document from its JSON text.
    pub fn from_json(text: &str) -> InvokeResult<Self> {
        serde_json::from_str(text).map_err(|e| InvokeError::AbiParse(e.to_string()))
    }

    /// Looks up a method by name.
    pub fn function(&self, name: &str) -> Option<&AbiFunction> {
        self.functions.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "hash": "0xd42561e3d30e15be6400b6c2f2d9fb59d32eec6f",
        "functions": [
            {
                "name": "transfer",
                "parameters": [
                    { "name": "from", "type": "Hash160" },
                    { "name": "to", "type": "Hash160" },
                    { "name": "amount", "type": "Integer" }
                ]
            },
            { "name": "decimals", "parameters": [] }
        ]
    }"#;

    #[test]
    fn test_parse_and_lookup() {
        let abi = AbiFile::from_json(SAMPLE).unwrap();
        assert_eq!(
            abi.hash.to_string(),
            "0xd42561e3d30e15be6400b6c2f2d9fb59d32eec6f"
        );
        assert_eq!(abi.functions.len(), 2);

        let transfer = abi.function("transfer").unwrap();
        assert_eq!(transfer.parameter_names_display(), "from, to, amount");
        assert!(abi.function("mint").is_none());
    }

    #[test]
    fn test_parameter_template() {
        let abi = AbiFile::from_json(SAMPLE).unwrap();
        let params = abi.function("transfer").unwrap().parameter_template();
        assert_eq!(params.len(), 3);
        assert_eq!(params[2].kind(), ContractParameterType::Integer);
        assert!(params.iter().all(|p| !p.is_complete()));

        assert!(abi
            .function("decimals")
            .unwrap()
            .parameter_template()
            .is_empty());
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(
            AbiFile::from_json("{"),
            Err(InvokeError::AbiParse(_))
        ));
        assert!(matches!(
            AbiFile::from_json(r#"{"hash": "xyz", "functions": []}"#),
            Err(InvokeError::AbiParse(_))
        ));
        assert!(matches!(
            AbiFile::from_json(
                r#"{"hash": "0xd42561e3d30e15be6400b6c2f2d9fb59d32eec6f",
                    "functions": [{"name": "f", "parameters": [{"name": "x", "type": "Banana"}]}]}"#
            ),
            Err(InvokeError::AbiParse(_))
        ));
    }
}
