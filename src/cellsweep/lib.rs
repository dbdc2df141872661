//! Cellsweep wraps the external `cellbender remove-background` tool.
//!
//! It reads a filtered 10x Genomics HDF5 matrix to estimate the expected
//! cell count, then launches cellbender against the raw matrix with that
//! estimate, echoing the command line and the child's output.
//!
//! ## Module Overview
//!
//! - [`matrix`]: filtered-matrix loading (barcode counting only)
//! - [`tool`]: cellbender resolution, command construction, and execution
//! - [`error`]: error types
//! - `args`: argument parsing for the binary (not part of the lib API)
//!
//! The library never writes to stdout/stderr and never calls
//! `std::process::exit`; all terminal I/O lives in the binary.

pub mod error;
pub mod matrix;
pub mod tool;
