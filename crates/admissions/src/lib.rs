//! Department admissions allocator.
//!
//! Applicants rank a fixed number of departments; every department offers the same
//! number of seats. [`allocation::Allocator`] fills seats one preference round at a
//! time, highest GPA first. The [`intake`] and [`report`] modules handle the text
//! boundary around it.

pub mod allocation;
pub mod config;
pub mod error;
pub mod intake;
pub mod report;
pub mod telemetry;
