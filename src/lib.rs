//! slnkit - Inspect Visual Studio solutions
//!
//! This crate provides the core library functionality for slnkit:
//! solution parsing, lazily resolved project metadata, and web project
//! classification.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and stubs for slnkit unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{MetadataError, ProjectMetadata, Solution, SolutionProjectType};

pub use util::context::GlobalContext;
