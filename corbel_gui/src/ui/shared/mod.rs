//! Shared UI components
//!
//! Contains:
//! - `diagrams` - Canvas drawing of the corbel sketch

pub mod diagrams;
