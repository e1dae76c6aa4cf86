//! gauntlet-core - batch Elo benchmarking of network weight files.
//!
//! Provides the building blocks of the `netgauntlet` runner:
//! - Template configuration rendering (`template`)
//! - Candidate discovery and filtering (`candidates`)
//! - External engine invocation (`engine`)
//! - Rating summary extraction (`summary`)
//! - Aggregate and per-candidate logging (`report`)
//! - Sequential batch orchestration (`batch`)

pub mod batch;
pub mod candidates;
pub mod engine;
pub mod error;
pub mod report;
pub mod summary;
pub mod telemetry;
pub mod template;

// Re-export key types
pub use batch::{run_batch, BatchConfig, BatchReport, CandidateOutcome, CandidateStatus};
pub use candidates::{discover, Candidate, CandidateFilter};
pub use engine::{EngineOutput, EngineRunner};
pub use error::GauntletError;
pub use report::{write_candidate_log, AggregateLog};
pub use summary::{extract_summary, RatingSummary};
pub use template::ConfigTemplate;
