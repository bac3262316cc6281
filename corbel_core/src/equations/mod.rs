//! # Corbel Equations
//!
//! All formulas used by the corbel check live here so they can be audited
//! in one place and documented from a single registry.
//!
//! ## Modules
//!
//! - [`corbel`] - Lever arm, design moment, resisting moment, moment check
//! - [`registry`] - Equation metadata and markdown generation
//!
//! ## Sign Conventions
//!
//! - **Fed**: Positive downward
//! - **Hed**: Positive pointing away from the support
//! - **Cover d1**: Measured down from the top (tension) face

pub mod corbel;
pub mod registry;

pub use corbel::{
    design_moment, lever_arm, max_resisting_moment, moment_check, CONCRETE_PARTIAL_FACTOR,
    RESISTANCE_REDUCTION_FACTOR,
};

pub use registry::{
    generate_equations_markdown, CodeReference, Equation, EquationCategory, EquationMetadata, Variable,
    ALL_EQUATIONS,
};
