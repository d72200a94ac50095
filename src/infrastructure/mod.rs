//! Infrastructure layer - alloy-backed implementations
//!
//! This layer contains:
//! - The typed-decode primitive built on alloy-dyn-abi
//! - Contract-ABI JSON loading into ordered interfaces

pub mod abi;
