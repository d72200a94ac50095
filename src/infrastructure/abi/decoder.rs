//! ABI decoder implementation using alloy-dyn-abi

use alloy_dyn_abi::{DynSolType, DynSolValue};

use crate::domain::abi::{
    DecodeError, DecodeResult, DecodedArg, FragmentDecoder, FunctionFragment, SELECTOR_LEN,
};

/// Typed-decode primitive backed by alloy-dyn-abi.
///
/// Stateless: one instance can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlloyFragmentDecoder;

impl FragmentDecoder for AlloyFragmentDecoder {
    fn decode_function_data(
        &self,
        fragment: &FunctionFragment,
        calldata: &[u8],
    ) -> Result<Vec<DynSolValue>, DecodeError> {
        if calldata.len() < SELECTOR_LEN {
            return Err(DecodeError::CalldataTooShort {
                len: calldata.len(),
            });
        }

        // Verify selector matches
        let selector = fragment.selector();
        if calldata[..SELECTOR_LEN] != selector[..] {
            return Err(DecodeError::SelectorMismatch {
                got: hex::encode(&calldata[..SELECTOR_LEN]),
                expected: hex::encode(selector),
            });
        }

        let args_data = &calldata[SELECTOR_LEN..];

        // Resolve parameter kinds into concrete types
        let types: Vec<DynSolType> = fragment
            .inputs
            .iter()
            .map(|param| {
                param
                    .kind
                    .parse::<DynSolType>()
                    .map_err(|err| DecodeError::InvalidParamType {
                        kind: param.kind.clone(),
                        reason: err.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if types.is_empty() {
            // A zero-parameter function is exactly its selector
            if !args_data.is_empty() {
                return Err(DecodeError::TrailingData {
                    extra: args_data.len(),
                });
            }
            return Ok(Vec::new());
        }

        // Decode the argument region as the parameter tuple
        let decoded = DynSolType::Tuple(types)
            .abi_decode_sequence(args_data)
            .map_err(|err| DecodeError::ArgumentDecode {
                reason: err.to_string(),
            })?;

        match decoded {
            DynSolValue::Tuple(values) => Ok(values),
            other => Ok(vec![other]),
        }
    }
}

/// Pair decoded values with parameter names and render them for display
pub fn describe(result: &DecodeResult) -> Vec<DecodedArg> {
    result
        .fragment
        .inputs
        .iter()
        .zip(result.decoded.iter())
        .enumerate()
        .map(|(idx, (param, value))| {
            let name = if param.name.trim().is_empty() {
                format!("arg{idx}")
            } else {
                param.name.clone()
            };

            DecodedArg {
                name,
                kind: param.kind.clone(),
                value: format_value(value),
            }
        })
        .collect()
}

/// Format a decoded value as a compact single line
pub fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::Address(addr) => addr.to_checksum(None),
        DynSolValue::FixedBytes(word, size) => {
            format!("0x{}", hex::encode(&word.as_slice()[..(*size).min(32)]))
        }
        DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        DynSolValue::String(s) => format!("\"{}\"", s),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
            let items: Vec<String> = values.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        DynSolValue::Tuple(values) => {
            let items: Vec<String> = values.iter().map(format_value).collect();
            format!("({})", items.join(", "))
        }
        _ => format!("{:?}", value),
    }
}
