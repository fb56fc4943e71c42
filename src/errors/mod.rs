//! Error types and error handling for the front end.
//!
//! This module defines the two failures a tokenize or parse call can end
//! with. It includes:
//!
//! - Error structures with source position information
//! - The `IllegalLexeme` and `UnexpectedToken` variants
//! - Error naming and suggestion tips for diagnostics

pub mod errors;
