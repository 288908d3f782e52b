//! Control flow techniques: branch layout hints, compile-time branch
//! elimination and devirtualization.

pub mod branch_hints;
pub mod const_branch;
pub mod devirtualization;
