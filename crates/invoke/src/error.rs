use thiserror::Error;

use crate::parameter::ContractParameterType;

/// Invocation-pipeline errors.
///
/// None of these are retried automatically; each requires the caller to
/// correct its input and start a fresh attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// One or more arguments are still unset; the script cannot be built.
    #[error("One or more contract parameters have no value")]
    IncompleteParameters,

    /// The target script hash is missing or malformed.
    #[error("Invalid contract identity: {0}")]
    InvalidIdentity(String),

    /// The sandbox reported a faulted run; no fee is charged.
    #[error("Execution failed")]
    ExecutionFailed,

    /// A hand-supplied script did not parse as hex bytes.
    #[error("Malformed script input: {0}")]
    MalformedScriptInput(String),

    /// The parameter kind has no push encoding.
    #[error("Parameter kind {0:?} cannot be encoded into a script")]
    UnsupportedParameterKind(ContractParameterType),

    /// A value of the wrong runtime type was supplied for a parameter kind.
    #[error("Value does not match parameter kind {0:?}")]
    ParameterMismatch(ContractParameterType),

    /// A contract-interface descriptor failed to parse.
    #[error("Invalid ABI document: {0}")]
    AbiParse(String),
}

/// Result type for invocation operations
pub type InvokeResult<T> = Result<T, InvokeError>;
