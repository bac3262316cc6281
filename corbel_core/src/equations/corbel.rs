//! # Corbel Formulas
//!
//! Closed-form equations for the simplified ultimate-limit-state check of a
//! short reinforced-concrete corbel.
//!
//! ## Notation
//!
//! - `h` = Total depth of the corbel section (m)
//! - `d1` = Cover from the top face to the reinforcement (m)
//! - `d` = Lever arm, h - d1 (m)
//! - `b` = Section width (m)
//! - `Fed` = Vertical design force (kN)
//! - `fck` = Characteristic concrete strength (MPa)
//! - `Md` = Design moment (kNm)
//! - `Rd,max` = Maximum resisting moment (kNm)
//!
//! ```text
//!              Fed
//!               ↓
//!   ┌───────────┬──  top face
//!   │- - - - - -│--  reinforcement (d1 below top)
//!   │           │ h
//!   └───────────┘
//! ```

use crate::units::{KiloNewtonMeters, KiloNewtons, Meters, MegaPascals};

/// Reduction factor applied to the concrete strength in the resisting moment
pub const RESISTANCE_REDUCTION_FACTOR: f64 = 0.9;

/// Partial safety divisor applied to the resisting moment
pub const CONCRETE_PARTIAL_FACTOR: f64 = 1.5;

/// Lever arm d = h - d1
#[inline]
pub fn lever_arm(h: Meters, d1: Meters) -> Meters {
    h - d1
}

/// Design moment Md = Fed * d
#[inline]
pub fn design_moment(fed: KiloNewtons, d: Meters) -> KiloNewtonMeters {
    fed * d
}

/// Maximum resisting moment Rd,max = 0.9 * fck * b * d^2 / 1.5
///
/// Units are taken as given: fck in MPa, b and d in m, result reported in kNm.
#[inline]
pub fn max_resisting_moment(fck: MegaPascals, b: Meters, d: Meters) -> KiloNewtonMeters {
    KiloNewtonMeters(RESISTANCE_REDUCTION_FACTOR * fck.0 * b.0 * d.0 * d.0) / CONCRETE_PARTIAL_FACTOR
}

/// Moment check Md <= Rd,max
#[inline]
pub fn moment_check(md: KiloNewtonMeters, rd_max: KiloNewtonMeters) -> bool {
    md <= rd_max
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_lever_arm() {
        assert!((lever_arm(Meters(0.15), Meters(0.05)).0 - 0.10).abs() < TOL);
    }

    #[test]
    fn test_design_moment() {
        assert!((design_moment(KiloNewtons(32.25), Meters(0.10)).0 - 3.225).abs() < TOL);
    }

    #[test]
    fn test_max_resisting_moment() {
        // 0.9 * 20 * 1.0 * 0.01 / 1.5 = 0.12
        let rd_max = max_resisting_moment(MegaPascals(20.0), Meters(1.0), Meters(0.1));
        assert!((rd_max.0 - 0.12).abs() < TOL);
    }

    #[test]
    fn test_moment_check_is_inclusive() {
        assert!(moment_check(KiloNewtonMeters(0.12), KiloNewtonMeters(0.12)));
        assert!(!moment_check(KiloNewtonMeters(0.1200001), KiloNewtonMeters(0.12)));
    }
}
