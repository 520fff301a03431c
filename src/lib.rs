//! GPA calculation: percentage grade bands, per-course quality points and the
//! credit-weighted average over a transcript.
//!
//! The `gpa` binary is a thin command-line layer over this library.

pub mod config;
pub mod entry;
pub mod grading;
pub mod output;
pub mod prompt;
pub mod scoring;
pub mod transcript;
pub mod worksheet;
