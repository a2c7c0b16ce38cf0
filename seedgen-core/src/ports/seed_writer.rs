//! Output port for generated fixture sets

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::SeedSet;

/// One persisted collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    /// Collection name, e.g. "transactions"
    pub collection: String,
    pub path: PathBuf,
    /// Number of records (1 for the user object)
    pub records: usize,
}

/// Persists every collection of a seed set as an independently loadable document
pub trait SeedWriter {
    /// Where the documents end up
    fn location(&self) -> PathBuf;

    /// Write all nine collections, returning one entry per document in write order
    fn write(&self, seeds: &SeedSet) -> Result<Vec<WrittenFile>>;
}
