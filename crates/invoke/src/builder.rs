//! Invocation-script construction.
//!
//! The call convention the VM expects: arguments are pushed in reverse
//! declared order, the whole argument list is packed into a single array
//! (a zero-count pack when there are no arguments, so the callee always
//! receives an array), the 20-byte target script hash is pushed as a
//! fixed-width data push, and the contract-call opcode follows.

use log::debug;
use neo_invoke_vm::{OpCode, ScriptBuilder};

use crate::error::{InvokeError, InvokeResult};
use crate::hash::UInt160;
use crate::parameter::{ContractParameter, ContractParameterType, ParameterValue};

/// Builds the byte script that calls `hash` with `parameters`.
///
/// Pure and deterministic: structurally equal inputs produce byte-identical
/// scripts. Fails with [`InvokeError::UnsupportedParameterKind`] when a
/// parameter kind has no push encoding and with
/// [`InvokeError::IncompleteParameters`] when any leaf value is unset.
pub fn build_invocation_script(
    hash: &UInt160,
    parameters: &[ContractParameter],
) -> InvokeResult<Vec<u8>> {
    let mut sb = ScriptBuilder::new();
    emit_app_call(&mut sb, hash, parameters)?;
    let script = sb.to_array();
    debug!(
        "built invocation script for {hash}: {} parameter(s), {} byte(s)",
        parameters.len(),
        script.len()
    );
    Ok(script)
}

/// Parses `identity` as a script hash, then builds the call script for it.
///
/// The textual entry point of the manual invocation form; a missing or
/// malformed identity fails with [`InvokeError::InvalidIdentity`].
pub fn build_invocation_script_for(
    identity: &str,
    parameters: &[ContractParameter],
) -> InvokeResult<Vec<u8>> {
    let hash = UInt160::from_hex_str(identity)?;
    build_invocation_script(&hash, parameters)
}

/// Emits "push arguments, pack, push hash, call" into an existing builder.
pub fn emit_app_call(
    sb: &mut ScriptBuilder,
    hash: &UInt160,
    parameters: &[ContractParameter],
) -> InvokeResult<()> {
    for parameter in parameters {
        check_encodable(parameter)?;
    }
    if parameters.iter().any(|p| !p.is_complete()) {
        return Err(InvokeError::IncompleteParameters);
    }
    for parameter in parameters.iter().rev() {
        emit_parameter(sb, parameter);
    }
    sb.emit_pack(parameters.len());
    sb.emit_push(hash.as_slice());
    sb.emit_opcode(OpCode::APPCALL);
    Ok(())
}

/// Rejects kinds that have no script encoding, recursing into arrays.
fn check_encodable(parameter: &ContractParameter) -> InvokeResult<()> {
    match parameter.kind() {
        ContractParameterType::Map
        | ContractParameterType::InteropInterface
        | ContractParameterType::Void => Err(InvokeError::UnsupportedParameterKind(
            parameter.kind(),
        )),
        _ => {
            if let Some(ParameterValue::Array(elements)) = parameter.value() {
                for element in elements {
                    check_encodable(element)?;
                }
            }
            Ok(())
        }
    }
}

/// Emits the push instruction(s) for one populated parameter.
///
/// Callers have already verified completeness; a placeholder that slips
/// through is emitted as nothing, which the completeness check prevents.
fn emit_parameter(sb: &mut ScriptBuilder, parameter: &ContractParameter) {
    match parameter.value() {
        None => {}
        Some(ParameterValue::Boolean(b)) => {
            sb.emit_push_bool(*b);
        }
        Some(ParameterValue::Integer(n)) => {
            sb.emit_push_big_int(n);
        }
        Some(ParameterValue::ByteArray(bytes))
        | Some(ParameterValue::PublicKey(bytes))
        | Some(ParameterValue::Signature(bytes)) => {
            sb.emit_push(bytes);
        }
        Some(ParameterValue::String(s)) => {
            sb.emit_push_string(s);
        }
        Some(ParameterValue::Hash160(h)) => {
            sb.emit_push(h.as_slice());
        }
        Some(ParameterValue::Hash256(h)) => {
            sb.emit_push(h.as_slice());
        }
        Some(ParameterValue::Array(elements)) => {
            for element in elements.iter().rev() {
                emit_parameter(sb, element);
            }
            sb.emit_pack(elements.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hash() -> UInt160 {
        UInt160::from_hex_str("0xd42561e3d30e15be6400b6c2f2d9fb59d32eec6f").unwrap()
    }

    #[test]
    fn test_empty_parameter_list_still_packs() {
        let script = build_invocation_script(&sample_hash(), &[]).unwrap();

        // PUSH0, PACK, 20-byte hash push, APPCALL.
        assert_eq!(script[0], OpCode::PUSH0 as u8);
        assert_eq!(script[1], OpCode::PACK as u8);
        assert_eq!(script[2], 20);
        assert_eq!(&script[3..23], sample_hash().as_slice());
        assert_eq!(script[23], OpCode::APPCALL as u8);
        assert_eq!(script.len(), 24);
    }

    #[test]
    fn test_arguments_pushed_in_reverse_order() {
        let params = vec![
            ContractParameter::integer(1),
            ContractParameter::integer(2),
            ContractParameter::integer(3),
        ];
        let script = build_invocation_script(&sample_hash(), &params).unwrap();

        // Last-declared argument is pushed first.
        assert_eq!(script[0], OpCode::PUSH3 as u8);
        assert_eq!(script[1], OpCode::PUSH2 as u8);
        assert_eq!(script[2], OpCode::PUSH1 as u8);
        assert_eq!(script[3], OpCode::PUSH3 as u8); // pack count
        assert_eq!(script[4], OpCode::PACK as u8);
    }

    #[test]
    fn test_nested_array_packs_recursively() {
        let params = vec![ContractParameter::string("method"),
            ContractParameter::array(vec![
                ContractParameter::boolean(true),
                ContractParameter::boolean(false),
            ])];
        let script = build_invocation_script(&sample_hash(), &params).unwrap();

        let mut expected = ScriptBuilder::new();
        // Array argument first (reverse declared order): elements reversed,
        // then packed.
        expected.emit_push_bool(false);
        expected.emit_push_bool(true);
        expected.emit_pack(2);
        expected.emit_push_string("method");
        expected.emit_pack(2);
        expected.emit_push(sample_hash().as_slice());
        expected.emit_opcode(OpCode::APPCALL);
        assert_eq!(script, expected.to_array());
    }

    #[test]
    fn test_build_is_deterministic() {
        let params = vec![
            ContractParameter::string("transfer"),
            ContractParameter::array(vec![
                ContractParameter::hash160(UInt160::ZERO),
                ContractParameter::integer(100_000),
            ]),
        ];
        let a = build_invocation_script(&sample_hash(), &params).unwrap();
        let b = build_invocation_script(&sample_hash(), &params.clone()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_incomplete_parameters_rejected() {
        let params = vec![ContractParameter::new(ContractParameterType::Integer)];
        assert_eq!(
            build_invocation_script(&sample_hash(), &params).unwrap_err(),
            InvokeError::IncompleteParameters
        );

        // A nested placeholder is found too.
        let params = vec![ContractParameter::array(vec![ContractParameter::new(
            ContractParameterType::String,
        )])];
        assert_eq!(
            build_invocation_script(&sample_hash(), &params).unwrap_err(),
            InvokeError::IncompleteParameters
        );
    }

    #[test]
    fn test_unsupported_kinds_rejected() {
        for kind in [
            ContractParameterType::Map,
            ContractParameterType::InteropInterface,
            ContractParameterType::Void,
        ] {
            let params = vec![ContractParameter::new(kind)];
            assert_eq!(
                build_invocation_script(&sample_hash(), &params).unwrap_err(),
                InvokeError::UnsupportedParameterKind(kind)
            );
        }
    }

    #[test]
    fn test_malformed_identity_rejected() {
        let err = build_invocation_script_for("not-a-hash", &[]).unwrap_err();
        assert!(matches!(err, InvokeError::InvalidIdentity(_)));
    }

    #[test]
    fn test_byte_like_kinds_are_length_prefixed() {
        let params = vec![
            ContractParameter::signature(vec![0u8; 64]),
            ContractParameter::public_key(vec![0x02; 33]),
        ];
        let script = build_invocation_script(&sample_hash(), &params).unwrap();

        // Public key pushed first (reverse order): 33-byte direct push.
        assert_eq!(script[0], 33);
        // Then the 64-byte signature.
        assert_eq!(script[34], 64);
    }
}
