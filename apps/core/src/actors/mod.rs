//! Actor system for answer generation and orchestration.

pub mod generator;
pub mod messages;
pub mod supervisor;
pub mod traits;
