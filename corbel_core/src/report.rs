//! # Result Presentation
//!
//! Turns a computed [`CorbelResult`] into the lines shown by the front ends.
//! Lengths are shown with 3 decimals and moments with 2; the result itself
//! stays unrounded.

use serde::Serialize;

use crate::calculations::corbel::{CorbelInput, CorbelResult};
use crate::units::{KiloNewtonMeters, KiloNewtons, Meters, MegaPascals, Unit};

/// Message shown when the check passes
pub const VERDICT_OK: &str = "Design OK";

/// Message shown when the check fails
pub const VERDICT_NOT_VERIFIED: &str = "Design NOT verified";

/// Format a length with 3 decimals and its unit
pub fn format_length(value: Meters) -> String {
    format!("{:.3} {}", value.raw(), Meters::SYMBOL)
}

/// Format a moment with 2 decimals and its unit
pub fn format_moment(value: KiloNewtonMeters) -> String {
    format!("{:.2} {}", value.raw(), KiloNewtonMeters::SYMBOL)
}

pub fn format_force(value: KiloNewtons) -> String {
    format!("{:.2} {}", value.raw(), KiloNewtons::SYMBOL)
}

pub fn format_stress(value: MegaPascals) -> String {
    format!("{:.0} {}", value.raw(), MegaPascals::SYMBOL)
}

/// One labelled line of the results display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    /// Relation between label and value ("=" or "≈")
    pub relation: &'static str,
    pub value: String,
}

impl SummaryLine {
    fn new(label: &'static str, relation: &'static str, value: String) -> Self {
        Self { label, relation, value }
    }

    /// "label relation value"
    pub fn render(&self) -> String {
        format!("{} {} {}", self.label, self.relation, self.value)
    }
}

/// Display-ready summary of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub title: String,
    pub inputs: Vec<SummaryLine>,
    pub results: Vec<SummaryLine>,
    pub verified: bool,
    pub verdict: &'static str,
}

impl ResultSummary {
    pub fn new(input: &CorbelInput, result: &CorbelResult) -> Self {
        let inputs = vec![
            SummaryLine::new("Vertical force Fed", "=", format_force(input.vertical_force())),
            SummaryLine::new("Horizontal force Hed", "=", format_force(input.horizontal_force())),
            SummaryLine::new("Width b", "=", format_length(input.width())),
            SummaryLine::new("Total depth h", "=", format_length(input.depth())),
            SummaryLine::new("Cover d1", "=", format_length(input.cover())),
            SummaryLine::new("Steel strength fyk", "=", format_stress(input.steel_strength())),
            SummaryLine::new("Concrete strength fck", "=", format_stress(input.concrete_strength())),
        ];

        let results = vec![
            SummaryLine::new("Lever arm d", "=", format_length(result.lever_arm())),
            SummaryLine::new("Design moment Md", "=", format_moment(result.design_moment())),
            SummaryLine::new(
                "Max resisting moment Rd,max",
                "≈",
                format_moment(result.max_resisting_moment()),
            ),
        ];

        ResultSummary {
            title: input.label.clone(),
            inputs,
            results,
            verified: result.verified,
            verdict: if result.verified { VERDICT_OK } else { VERDICT_NOT_VERIFIED },
        }
    }

    /// Plain-text block for terminals
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n\n", self.title));
        out.push_str("Input:\n");
        for line in &self.inputs {
            out.push_str(&format!("  {}\n", line.render()));
        }
        out.push_str("\nResults:\n");
        for line in &self.results {
            out.push_str(&format!("  {}\n", line.render()));
        }
        out.push_str(&format!("\nRESULT: {}\n", self.verdict));
        out
    }
}
