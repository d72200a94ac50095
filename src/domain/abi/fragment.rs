//! Function fragments and the ordered interface they belong to

use alloy_dyn_abi::DynSolType;
use alloy_primitives::keccak256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of the function selector prefix in calldata.
pub const SELECTOR_LEN: usize = 4;

/// A function parameter specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name (may be empty)
    pub name: String,
    /// Canonical Solidity type (e.g., "address", "uint256", "(uint256,address)")
    pub kind: String,
}

/// Description of one function: its name and its ordered parameter list.
///
/// Fragments are plain data. The canonical signature and the 4-byte
/// selector are derived from the name and the parameter kinds, so a
/// fragment is always self-consistent with the selector reported for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionFragment {
    /// Function name
    pub name: String,
    /// Input parameters, in declaration order
    pub inputs: Vec<ParamSpec>,
}

/// Error from [`FunctionFragment::parse`].
#[derive(Debug, Error)]
pub enum FragmentParseError {
    #[error("invalid function signature '{0}': expected name(type1,type2,...)")]
    Malformed(String),

    #[error("invalid parameter types in '{signature}': {reason}")]
    InvalidTypes { signature: String, reason: String },
}

impl FunctionFragment {
    /// Create a fragment from a name and parameter list.
    pub fn new(name: impl Into<String>, inputs: Vec<ParamSpec>) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }

    /// Parse a human-readable signature such as `transfer(address,uint256)`.
    ///
    /// Whitespace and a trailing `returns (...)` clause are tolerated.
    /// Parameter types are validated and canonicalized through the ABI
    /// type parser, so nested tuples and arrays are handled.
    pub fn parse(signature: &str) -> Result<Self, FragmentParseError> {
        // Remove a returns clause if present, then all whitespace
        let stripped = match signature.find("returns") {
            Some(pos) => &signature[..pos],
            None => signature,
        };
        let normalized: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

        let open = normalized
            .find('(')
            .ok_or_else(|| FragmentParseError::Malformed(signature.to_string()))?;
        let close = normalized
            .rfind(')')
            .ok_or_else(|| FragmentParseError::Malformed(signature.to_string()))?;
        if close <= open || open == 0 {
            return Err(FragmentParseError::Malformed(signature.to_string()));
        }

        let name = &normalized[..open];
        let params = &normalized[open..=close];

        if params == "()" {
            return Ok(Self::new(name, Vec::new()));
        }

        // Parse the whole parameter list as one tuple; splitting on commas
        // would break nested tuple types.
        let tuple: DynSolType =
            params
                .parse()
                .map_err(|err: alloy_dyn_abi::Error| FragmentParseError::InvalidTypes {
                    signature: signature.to_string(),
                    reason: err.to_string(),
                })?;

        let inputs = match tuple {
            DynSolType::Tuple(types) => types
                .into_iter()
                .map(|ty| ParamSpec {
                    name: String::new(),
                    kind: ty.sol_type_name().into_owned(),
                })
                .collect(),
            other => vec![ParamSpec {
                name: String::new(),
                kind: other.sol_type_name().into_owned(),
            }],
        };

        Ok(Self::new(name, inputs))
    }

    /// Canonical signature string (e.g., "transfer(address,uint256)")
    pub fn signature(&self) -> String {
        let kinds: Vec<&str> = self.inputs.iter().map(|param| param.kind.as_str()).collect();
        format!("{}({})", self.name, kinds.join(","))
    }

    /// First 4 bytes of keccak256 of the canonical signature
    pub fn selector(&self) -> [u8; SELECTOR_LEN] {
        let hash = keccak256(self.signature().as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    /// Selector as a 0x-prefixed hex string
    pub fn selector_hex(&self) -> String {
        format!("0x{}", hex::encode(self.selector()))
    }
}

/// An ordered collection of function fragments.
///
/// Fragment order is owned by the caller and is observable: when several
/// fragments decode the same calldata, the one listed last wins. The
/// collection is therefore never sorted, deduplicated, or indexed by
/// selector. Duplicate and overlapping fragments are legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    fragments: Vec<FunctionFragment>,
}

impl Interface {
    /// Create an interface from fragments, keeping their order
    pub fn new(fragments: Vec<FunctionFragment>) -> Self {
        Self { fragments }
    }

    /// Append a fragment after all existing ones
    pub fn push(&mut self, fragment: FunctionFragment) {
        self.fragments.push(fragment);
    }

    /// Iterate fragments in caller-supplied order
    pub fn fragments(&self) -> impl Iterator<Item = &FunctionFragment> {
        self.fragments.iter()
    }

    /// Get the number of fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if the interface is empty
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
