//! UI module for the corbel GUI
//!
//! # Panel Structure
//! - `toolbar` - Title header and the Run / Reset / Export buttons
//! - `input_panel` - Left panel: the seven input fields and label
//! - `results_panel` - Right panel: derived values, verdict, diagram
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/diagrams` - Canvas drawing of the corbel sketch

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;

pub mod shared;
