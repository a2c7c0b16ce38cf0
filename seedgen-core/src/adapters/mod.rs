//! Adapter implementations
//!
//! - Hand-authored reference data the generator starts from
//! - JSON files on the local filesystem for the SeedWriter port

pub mod json;
pub mod reference;
