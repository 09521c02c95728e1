// Tue Jan 13 2026 - Alex

pub mod coordinator;
pub mod scheduler;
pub mod aggregator;

pub use coordinator::ResolutionPipeline;
pub use scheduler::{DispatchPool, DispatchSummary};
pub use aggregator::{BatchStats, ResolutionAggregator, ResolutionBatch};

use thiserror::Error;

/// Run-level pipeline failures. Lookup errors never show up here.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0} dispatch workers panicked")]
    WorkerPanicked(usize),
    #[error("{0} names finished without a result")]
    Incomplete(usize),
}
