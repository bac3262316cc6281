//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `evaluate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`corbel`] - Short reinforced-concrete corbel bending check

pub mod corbel;

pub use corbel::{evaluate, CorbelInput, CorbelResult};
