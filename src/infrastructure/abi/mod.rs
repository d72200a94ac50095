//! ABI infrastructure - Alloy-based decoding and interface loading

mod decoder;
mod loader;

pub use decoder::{describe, format_value, AlloyFragmentDecoder};
pub use loader::{parse_interface, InterfaceError};
