//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. Generation
//! services depend only on these traits, not on concrete implementations.

mod seed_writer;

pub use seed_writer::{SeedWriter, WrittenFile};
