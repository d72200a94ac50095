//! Brute-force matching of calldata against candidate fragments

use alloy_dyn_abi::DynSolValue;
use tracing::trace;

use super::{DecodeResult, FragmentDecoder, FunctionFragment, Interface};

/// Try every fragment of `interface` against `calldata` and report the
/// outcome.
///
/// Calldata carries only a 4-byte selector, with no guarantee of
/// uniqueness against an arbitrary candidate set, so the traversal is a
/// plain linear scan in caller-supplied order. Attempts that fail (wrong
/// selector, wrong argument length, a type mismatch in the payload) are
/// skipped and the scan continues.
///
/// When more than one fragment decodes the calldata, the fragment listed
/// **last** wins. Callers rely on this; do not short-circuit the loop on
/// the first success.
///
/// Returns `None` when the interface is empty or no fragment fits. The
/// matcher itself never fails.
pub fn match_calldata<D>(
    decoder: &D,
    interface: &Interface,
    calldata: &[u8],
) -> Option<DecodeResult>
where
    D: FragmentDecoder + ?Sized,
{
    let mut matched: Option<(&FunctionFragment, Vec<DynSolValue>)> = None;

    for fragment in interface.fragments() {
        match decoder.decode_function_data(fragment, calldata) {
            // A later success replaces an earlier one.
            Ok(decoded) => matched = Some((fragment, decoded)),
            Err(err) => {
                trace!(fragment = %fragment.signature(), %err, "fragment rejected");
            }
        }
    }

    let (fragment, decoded) = matched?;
    Some(DecodeResult {
        decoded,
        selector: fragment.selector(),
        fragment: fragment.clone(),
    })
}
