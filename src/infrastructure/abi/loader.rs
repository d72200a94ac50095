//! Interface loading from contract-ABI JSON

use alloy_json_abi::Function;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::abi::{FunctionFragment, Interface, ParamSpec};

/// Error from [`parse_interface`].
#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error("invalid ABI JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no ABI found: expected a JSON array or an object with an \"abi\" field")]
    MissingAbi,
}

/// Parse a contract-ABI JSON document into an ordered interface.
///
/// Accepts either a raw ABI array or a compiler artifact object that
/// nests the array under an `"abi"` field. Only `function` entries become
/// fragments; constructors, events, errors, fallback, and receive entries
/// are skipped.
///
/// The JSON array order becomes the fragment order; ties between
/// fragments that decode the same calldata resolve by that order.
pub fn parse_interface(json: &str) -> Result<Interface, InterfaceError> {
    let value: Value = serde_json::from_str(json)?;

    // Extract the ABI - either a raw array or nested in an "abi" field
    let items = if value.is_array() {
        value
    } else if let Some(abi) = value.get("abi") {
        abi.clone()
    } else {
        return Err(InterfaceError::MissingAbi);
    };
    let Value::Array(items) = items else {
        return Err(InterfaceError::MissingAbi);
    };

    let mut interface = Interface::default();
    for item in items {
        // Entries without a "type" are legacy function entries
        match item.get("type").and_then(Value::as_str) {
            Some("function") | None => {}
            _ => continue,
        }

        let function: Function = serde_json::from_value(item)?;
        interface.push(fragment_from_function(&function));
    }

    debug!(fragments = interface.len(), "parsed interface");
    Ok(interface)
}

fn fragment_from_function(function: &Function) -> FunctionFragment {
    let inputs = function
        .inputs
        .iter()
        .map(|input| ParamSpec {
            name: input.name.clone(),
            // selector_type flattens tuple components into "(...)" form
            kind: input.selector_type().into_owned(),
        })
        .collect();

    FunctionFragment::new(function.name.clone(), inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERC20_ABI: &str = r#"[
        {
            "name": "transfer",
            "type": "function",
            "inputs": [
                {"name": "to", "type": "address"},
                {"name": "amount", "type": "uint256"}
            ],
            "outputs": [{"name": "", "type": "bool"}],
            "stateMutability": "nonpayable"
        },
        {
            "name": "Transfer",
            "type": "event",
            "inputs": [
                {"name": "from", "type": "address", "indexed": true},
                {"name": "to", "type": "address", "indexed": true},
                {"name": "value", "type": "uint256", "indexed": false}
            ],
            "anonymous": false
        },
        {
            "name": "approve",
            "type": "function",
            "inputs": [
                {"name": "spender", "type": "address"},
                {"name": "amount", "type": "uint256"}
            ],
            "outputs": [{"name": "", "type": "bool"}],
            "stateMutability": "nonpayable"
        }
    ]"#;

    #[test]
    fn test_parse_raw_array() {
        let interface = parse_interface(ERC20_ABI).unwrap();

        assert_eq!(interface.len(), 2);
        let signatures: Vec<String> = interface
            .fragments()
            .map(|fragment| fragment.signature())
            .collect();
        assert_eq!(
            signatures,
            vec!["transfer(address,uint256)", "approve(address,uint256)"]
        );
    }

    #[test]
    fn test_parse_artifact_object() {
        let artifact = format!(r#"{{"contractName": "Token", "abi": {}}}"#, ERC20_ABI);
        let interface = parse_interface(&artifact).unwrap();
        assert_eq!(interface.len(), 2);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let json = r#"[
            {"name": "zebra", "type": "function", "inputs": [], "outputs": [], "stateMutability": "view"},
            {"name": "alpha", "type": "function", "inputs": [], "outputs": [], "stateMutability": "view"}
        ]"#;

        let interface = parse_interface(json).unwrap();
        let names: Vec<&str> = interface
            .fragments()
            .map(|fragment| fragment.name.as_str())
            .collect();
        assert_eq!(names, vec!["zebra", "alpha"]);
    }

    #[test]
    fn test_skips_constructor() {
        let json = r#"[
            {"type": "constructor", "inputs": [{"name": "owner", "type": "address"}], "stateMutability": "nonpayable"},
            {"name": "owner", "type": "function", "inputs": [], "outputs": [{"name": "", "type": "address"}], "stateMutability": "view"}
        ]"#;

        let interface = parse_interface(json).unwrap();
        assert_eq!(interface.len(), 1);
        assert_eq!(interface.fragments().next().unwrap().name, "owner");
    }

    #[test]
    fn test_tuple_components_flattened() {
        let json = r#"[
            {
                "name": "fill",
                "type": "function",
                "inputs": [
                    {
                        "name": "order",
                        "type": "tuple",
                        "components": [
                            {"name": "maker", "type": "address"},
                            {"name": "amount", "type": "uint96"}
                        ]
                    }
                ],
                "outputs": [],
                "stateMutability": "nonpayable"
            }
        ]"#;

        let interface = parse_interface(json).unwrap();
        let fragment = interface.fragments().next().unwrap();
        assert_eq!(fragment.inputs[0].kind, "(address,uint96)");
        assert_eq!(fragment.signature(), "fill((address,uint96))");
    }

    #[test]
    fn test_missing_abi() {
        assert!(matches!(
            parse_interface(r#"{"contractName": "Token"}"#),
            Err(InterfaceError::MissingAbi)
        ));
        assert!(parse_interface("not json").is_err());
    }
}
