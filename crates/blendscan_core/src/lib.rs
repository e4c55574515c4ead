//! Extraction and risk triage of embedded text resources in `.blend` files.
//!
//! The pipeline walks the container's length-prefixed block stream once,
//! reassembles text datablocks by pairing each `TX`/`TEXT` marker block with
//! its trailing `DATA` payload blocks, and grades every reconstructed text
//! with a table-driven heuristic analyzer. Only a bad file magic is fatal;
//! malformed block streams, payloads, and names degrade to partial or empty
//! results.

/// Container parsing and text-resource reassembly.
pub mod blend;
/// Structured scan report assembly.
pub mod report;
/// Table-driven script risk analysis.
pub mod risk;
