//! Parsing for the YAML configuration document.
//!
//! This module turns the raw document text into schema-checked display
//! declarations plus an opaque view of the full tree for phase-2
//! sibling-domain detection.

pub mod document;

// Re-export the document type
pub use document::{ConfigDocument, DISPLAY_DOMAIN};
