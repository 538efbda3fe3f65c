//! Testing infrastructure for formsmith integration tests.
//!
//! This crate provides utilities for writing CLI integration tests:
//! - `TestWorld`: Fluent interface for an isolated config/script sandbox
//! - `assertions`: Checks over `--format json` document output
//! - `fixtures`: Ready-made action scripts

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
