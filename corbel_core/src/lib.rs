//! # corbel_core - Reinforced-Concrete Corbel Check
//!
//! `corbel_core` verifies a short reinforced-concrete corbel (console courte)
//! under a design action using a simplified ultimate-limit-state formula pair.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function from input to result
//! - **Validated**: invalid values and geometry are errors, never a verdict
//! - **Computed once**: report, diagram and export all read the same result
//!
//! ## Quick Start
//!
//! ```rust
//! use corbel_core::calculations::{evaluate, CorbelInput};
//! use corbel_core::report::ResultSummary;
//!
//! let input = CorbelInput::default();
//! let result = evaluate(&input).unwrap();
//! assert!(!result.verified);
//!
//! let summary = ResultSummary::new(&input, &result);
//! println!("{}", summary.to_text());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The corbel check
//! - [`equations`] - Formulas and their registry
//! - [`report`] - Rounded display lines and verdict
//! - [`diagram`] - Renderer-agnostic corbel sketch
//! - [`export`] - Date-named CSV/JSON export
//! - [`settings`] - Export settings file
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic writes and input files

pub mod calculations;
pub mod diagram;
pub mod equations;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, CorbelInput, CorbelResult};
pub use errors::{CalcError, CalcResult};
pub use export::ExportFormat;
pub use settings::Settings;
