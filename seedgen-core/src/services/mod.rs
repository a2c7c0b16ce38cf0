//! Service layer - generation steps and their orchestration
//!
//! Each step is a plain function over explicit inputs (reference data,
//! config, RNG). `GeneratorService` runs them in order; `CheckService`
//! verifies written output; `LoggingService` records what happened.

pub mod check;
mod generator;
pub mod groups;
pub mod logging;
pub mod recurring;
pub mod variable;

pub use check::{CheckReport, CheckResult, CheckService, CheckSummary};
pub use generator::{GenerationReport, GeneratorService};
pub use groups::GroupSample;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
