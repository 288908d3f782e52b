//! Loop transformations: unrolling, interchange, fusion, fission,
//! dependency hoisting and block copies.

pub mod data_dependency;
pub mod duffs_device;
pub mod loop_fission;
pub mod loop_fusion;
pub mod loop_interchange;
pub mod loop_unrolling;
