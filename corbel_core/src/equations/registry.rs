//! # Equation Registry
//!
//! Metadata for every formula used by the corbel check: name, formula,
//! variables with units, and the function that implements it. The registry
//! feeds the generated `EQUATIONS.md` and lets front ends show the formulas
//! next to the numbers.
//!
//! ## Usage
//!
//! ```rust
//! use corbel_core::equations::registry::Equation;
//!
//! let meta = Equation::DesignMoment.metadata();
//! assert_eq!(meta.formula_plain, "Md = Fed * d");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
    /// Simplified ULS check; constants are fixed, no standard is cited
    SimplifiedUls,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> &'static str {
        match self {
            CodeReference::Mechanics => "Fundamental Mechanics",
            CodeReference::SimplifiedUls => "Simplified ULS check (fixed factors 0.9 and 1.5)",
        }
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Categories for grouping equations in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Geometry of the section (lever arm)
    Geometry,
    /// Internal forces (design moment)
    InternalForces,
    /// Section resistance
    Resistance,
    /// Pass/fail checks
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Geometry => "Geometry",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Resistance => "Resistance",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "d", "Fed")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m", "kN")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the corbel check, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// d = h - d1
    LeverArm,
    /// Md = Fed * d
    DesignMoment,
    /// Rd,max = 0.9 * fck * b * d^2 / 1.5
    MaxResistingMoment,
    /// Md <= Rd,max
    MomentCheck,
}

/// Every equation in evaluation order
pub const ALL_EQUATIONS: [Equation; 4] = [
    Equation::LeverArm,
    Equation::DesignMoment,
    Equation::MaxResistingMoment,
    Equation::MomentCheck,
];

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::LeverArm => EquationMetadata {
                name: "Lever Arm",
                description: "Effective depth from the compression face to the reinforcement",
                formula_plain: "d = h - d1",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("d", "Lever arm", "m"),
                    Variable::new("h", "Total depth", "m"),
                    Variable::new("d1", "Cover to reinforcement", "m"),
                ],
                category: EquationCategory::Geometry,
                source_function: "lever_arm",
            },
            Equation::DesignMoment => EquationMetadata {
                name: "Design Moment",
                description: "Bending moment of the vertical design force acting over the lever arm",
                formula_plain: "Md = Fed * d",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Md", "Design moment", "kNm"),
                    Variable::new("Fed", "Vertical design force", "kN"),
                    Variable::new("d", "Lever arm", "m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "design_moment",
            },
            Equation::MaxResistingMoment => EquationMetadata {
                name: "Maximum Resisting Moment",
                description: "Maximum moment the section can sustain under the simplified formula",
                formula_plain: "Rd,max = 0.9 * fck * b * d^2 / 1.5",
                reference: CodeReference::SimplifiedUls,
                variables: vec![
                    Variable::new("Rd,max", "Maximum resisting moment", "kNm"),
                    Variable::new("fck", "Concrete compressive strength", "MPa"),
                    Variable::new("b", "Width", "m"),
                    Variable::new("d", "Lever arm", "m"),
                ],
                category: EquationCategory::Resistance,
                source_function: "max_resisting_moment",
            },
            Equation::MomentCheck => EquationMetadata {
                name: "Moment Check",
                description: "The corbel is verified when the design moment does not exceed the resistance",
                formula_plain: "Md <= Rd,max",
                reference: CodeReference::SimplifiedUls,
                variables: vec![
                    Variable::new("Md", "Design moment", "kNm"),
                    Variable::new("Rd,max", "Maximum resisting moment", "kNm"),
                ],
                category: EquationCategory::DesignChecks,
                source_function: "moment_check",
            },
        }
    }

    /// Equations belonging to a category, in evaluation order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }

    /// All categories that contain at least one equation, sorted
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories: Vec<_> = ALL_EQUATIONS.iter().map(|eq| eq.metadata().category).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate the EQUATIONS.md reference document.
///
/// # Example
///
/// ```rust
/// use corbel_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Corbel Equations Reference"));
/// assert!(markdown.contains("Md = Fed * d"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(4_000);

    output.push_str(
        r#"# Corbel Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Formulas used by the short reinforced-concrete corbel check. Values are
computed unrounded; reports round lengths to 3 decimals and moments to 2.

---

"#,
    );

    for category in Equation::all_categories() {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in Equation::in_category(category) {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** `equations/corbel.rs::{}`\n\n",
                meta.source_function
            ));
        }
    }

    output
}
