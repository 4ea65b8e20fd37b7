//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout the pipeline:
//!
//! - Error structures with source position information
//! - Specific error variants for each phase (scanning, parsing,
//!   resolution, validation, interpretation)
//! - Error naming and suggestion text used by the driver

pub mod errors;
