//! Test Module
//!
//! Cross-cutting test suite for the AnswerLens backend.
//!
//! ## Test Categories
//! - `analysis_tests`: pipeline-level properties of the answer analyzer
//! - `actor_tests`: generator provider chain behavior
//! - `integration_tests`: full question-to-envelope workflows

pub mod actor_tests;
pub mod analysis_tests;
