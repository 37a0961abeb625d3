//! High-level operations.
//!
//! This module contains the implementation of slnkit commands.

pub mod inspect;

pub use inspect::{
    find_deployable, format_report, inspect_solution, select_project, InspectOptions,
    ProjectReport, SolutionReport,
};
