//! Error types and error collection for the front end.
//!
//! This module defines:
//!
//! - Error structures with source position information
//! - Specific error variants for the parser
//! - The ordered error list handed back to callers
//! - Helpful suggestions for displaying errors

pub mod errors;
