//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait and the full
//! [dialogue::DialogueCorpus] pipeline that chains vocabulary building,
//! extraction, indexing and splitting.
pub mod dialogue;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use dialogue::{DialogueCorpus, PipelineSummary};
pub use pipeline::Pipeline;
