//! Decoder contract and result types

use alloy_dyn_abi::DynSolValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FunctionFragment;

/// Why a single decode attempt rejected its fragment.
///
/// One attempt failing is ordinary: the matching traversal consumes this
/// as a value and moves on to the next candidate. Nothing here ever
/// reaches the caller of the matcher.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("calldata too short: {len} bytes (need at least 4 for the selector)")]
    CalldataTooShort { len: usize },

    #[error("selector mismatch: got 0x{got}, expected 0x{expected}")]
    SelectorMismatch { got: String, expected: String },

    #[error("cannot resolve parameter type '{kind}': {reason}")]
    InvalidParamType { kind: String, reason: String },

    #[error("{extra} unexpected bytes after the selector of a zero-parameter function")]
    TrailingData { extra: usize },

    #[error("argument region does not match the parameter list: {reason}")]
    ArgumentDecode { reason: String },
}

/// A decoded function argument, rendered for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedArg {
    /// Parameter name (or "arg{n}" if unnamed)
    pub name: String,
    /// Canonical Solidity type
    pub kind: String,
    /// Decoded value as a formatted string
    pub value: String,
}

/// Result of matching calldata against an interface.
///
/// `selector` is always the canonical selector of `fragment`, and
/// `decoded` conforms to the fragment's parameter list. The value is
/// created fresh per call and owns all of its data.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeResult {
    /// Decoded argument values, in parameter order
    pub decoded: Vec<DynSolValue>,
    /// The fragment that decoded the calldata
    pub fragment: FunctionFragment,
    /// 4-byte selector of the matched fragment
    pub selector: [u8; 4],
}

impl DecodeResult {
    /// Selector as a 0x-prefixed hex string
    pub fn selector_hex(&self) -> String {
        format!("0x{}", hex::encode(self.selector))
    }
}

/// Trait for the typed-decode primitive
///
/// This trait abstracts over the actual ABI decoding implementation,
/// allowing us to swap out alloy-dyn-abi for a different library if needed.
/// The matching traversal only consumes the per-attempt `Result`.
pub trait FragmentDecoder: Send + Sync {
    /// Decode calldata against one candidate fragment
    ///
    /// # Arguments
    /// * `fragment` - The candidate to decode with
    /// * `calldata` - The calldata bytes (including the 4-byte selector)
    ///
    /// # Returns
    /// * `Ok(values)` - The decoded argument values, in parameter order
    /// * `Err(...)` - If this fragment does not fit the calldata
    fn decode_function_data(
        &self,
        fragment: &FunctionFragment,
        calldata: &[u8],
    ) -> Result<Vec<DynSolValue>, DecodeError>;
}
