//! Image checks applied to inbound payloads before they reach the upstream.
//!
//! The proxy forwards every image as a JPEG data URI. This module bounds the
//! payload size and, in strict mode, decodes the base64 and sniffs the magic
//! bytes so obviously bogus uploads are rejected locally instead of costing an
//! upstream call.
//!
//! # Submodules
//!
//! - `models`: Supported formats and size limits.
//! - `validation`: Size estimation, decoding and signature detection.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod models;
pub mod validation;

pub use validation::validate_image;
