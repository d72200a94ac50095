//! sleuth: figure out which function of a known interface produced a
//! calldata payload, and recover the typed arguments.
//!
//! Explorers, debuggers, and analysis scripts often hold an interface
//! definition but no selector index for it. [`decode_calldata`] brute
//! forces the question: it tries a typed decode of the payload against
//! every candidate fragment, in caller-supplied order, and reports the
//! last fragment that fit (or nothing).
//!
//! ```
//! use sleuth::{decode_calldata, FunctionFragment, Interface};
//!
//! let interface = Interface::new(vec![
//!     FunctionFragment::parse("transfer(address,uint256)").unwrap(),
//! ]);
//!
//! let calldata = "0xa9059cbb\
//!     000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045\
//!     00000000000000000000000000000000000000000000000000000000000f4240";
//!
//! let result = decode_calldata(&interface, calldata).unwrap();
//! assert_eq!(result.fragment.name, "transfer");
//! assert_eq!(result.selector_hex(), "0xa9059cbb");
//! assert_eq!(result.decoded.len(), 2);
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::abi::{
    match_calldata, DecodeError, DecodeResult, DecodedArg, FragmentDecoder,
    FragmentParseError, FunctionFragment, Interface, ParamSpec, SELECTOR_LEN,
};
pub use infrastructure::abi::{
    describe, format_value, parse_interface, AlloyFragmentDecoder, InterfaceError,
};

/// Decode hex calldata against every fragment of `interface`.
///
/// `calldata` is a hex string, conventionally `0x`-prefixed. A string
/// that is not valid hex cannot match any fragment and yields `None`,
/// the same as calldata no fragment decodes.
///
/// See [`match_calldata`] for the traversal and tie-break contract.
pub fn decode_calldata(interface: &Interface, calldata: &str) -> Option<DecodeResult> {
    let bytes = parse_hex_calldata(calldata)?;
    match_calldata(&AlloyFragmentDecoder, interface, &bytes)
}

fn parse_hex_calldata(calldata: &str) -> Option<Vec<u8>> {
    let trimmed = calldata.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).ok()
}
