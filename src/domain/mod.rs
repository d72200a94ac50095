//! Domain layer - codec-independent models and the matching algorithm

pub mod abi;
