//! ABI domain models and contracts
//!
//! This module defines the fragment data model, the decoding contract,
//! and the matching traversal, independent of the underlying codec
//! implementation (alloy-dyn-abi).

mod decoder;
mod fragment;
mod matcher;

pub use decoder::{DecodeError, DecodeResult, DecodedArg, FragmentDecoder};
pub use fragment::{
    FragmentParseError, FunctionFragment, Interface, ParamSpec, SELECTOR_LEN,
};
pub use matcher::match_calldata;
