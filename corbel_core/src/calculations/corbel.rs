//! # Corbel Check
//!
//! Simplified ultimate-limit-state bending check of a short reinforced-concrete
//! corbel (console courte) carrying a vertical design force near its support.
//!
//! ## Method
//!
//! 1. Lever arm `d = h - d1`
//! 2. Design moment `Md = Fed * d`
//! 3. Maximum resisting moment `Rd,max = 0.9 * fck * b * d² / 1.5`
//! 4. Verified when `Md <= Rd,max`
//!
//! The 0.9 and 1.5 factors are fixed. Results are unrounded; rounding is a
//! presentation concern (see [`crate::report`]).
//!
//! ## Assumptions
//!
//! - Single load case
//! - The horizontal force Hed and steel strength fyk are carried for
//!   reporting, drawing and export; the simplified check does not use them
//!
//! ## Example
//!
//! ```rust
//! use corbel_core::calculations::corbel::{evaluate, CorbelInput};
//!
//! let input = CorbelInput { fed_kn: 0.05, ..CorbelInput::default() };
//! let result = evaluate(&input).unwrap();
//! assert!(result.verified);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::corbel::{design_moment, lever_arm, max_resisting_moment, moment_check};
use crate::errors::{CalcError, CalcResult};
use crate::units::{KiloNewtonMeters, KiloNewtons, Meters, MegaPascals};

/// Input parameters for a corbel check.
///
/// `Default` gives the values pre-filled in the input form.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Console",
///   "fed_kn": 32.25,
///   "hed_kn": 0.0,
///   "b_m": 1.0,
///   "h_m": 0.15,
///   "d1_m": 0.05,
///   "fyk_mpa": 500.0,
///   "fck_mpa": 20.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorbelInput {
    /// User label for this corbel (e.g., "C-1", "Console")
    #[serde(default = "default_label")]
    pub label: String,

    /// Vertical design force Fed in kN
    pub fed_kn: f64,

    /// Horizontal design force Hed in kN (0 means no horizontal action)
    #[serde(default)]
    pub hed_kn: f64,

    /// Width b in metres
    pub b_m: f64,

    /// Total depth h in metres
    pub h_m: f64,

    /// Cover to reinforcement d1 in metres
    pub d1_m: f64,

    /// Steel yield strength fyk in MPa
    pub fyk_mpa: f64,

    /// Concrete compressive strength fck in MPa
    pub fck_mpa: f64,
}

fn default_label() -> String {
    "Console".to_string()
}

impl Default for CorbelInput {
    fn default() -> Self {
        CorbelInput {
            label: default_label(),
            fed_kn: 32.25,
            hed_kn: 0.0,
            b_m: 1.0,
            h_m: 0.15,
            d1_m: 0.05,
            fyk_mpa: 500.0,
            fck_mpa: 20.0,
        }
    }
}

impl CorbelInput {
    /// Validate input parameters.
    ///
    /// Field checks run first and report `InvalidInput`; a cover that is not
    /// smaller than the depth reports `InvalidGeometry`.
    pub fn validate(&self) -> CalcResult<()> {
        check_at_least_zero("fed_kn", self.fed_kn, "Vertical force cannot be negative")?;
        check_at_least_zero("hed_kn", self.hed_kn, "Horizontal force cannot be negative")?;
        check_positive("b_m", self.b_m, "Width must be positive")?;
        check_positive("h_m", self.h_m, "Depth must be positive")?;
        check_at_least_zero("d1_m", self.d1_m, "Cover cannot be negative")?;
        check_positive("fyk_mpa", self.fyk_mpa, "Steel yield strength must be positive")?;
        check_positive("fck_mpa", self.fck_mpa, "Concrete strength must be positive")?;

        if self.d1_m >= self.h_m {
            return Err(CalcError::invalid_geometry(
                self.h_m,
                self.d1_m,
                "Cover d1 must be smaller than total depth h",
            ));
        }
        Ok(())
    }

    pub fn vertical_force(&self) -> KiloNewtons {
        KiloNewtons(self.fed_kn)
    }

    pub fn horizontal_force(&self) -> KiloNewtons {
        KiloNewtons(self.hed_kn)
    }

    pub fn width(&self) -> Meters {
        Meters(self.b_m)
    }

    pub fn depth(&self) -> Meters {
        Meters(self.h_m)
    }

    pub fn cover(&self) -> Meters {
        Meters(self.d1_m)
    }

    pub fn steel_strength(&self) -> MegaPascals {
        MegaPascals(self.fyk_mpa)
    }

    pub fn concrete_strength(&self) -> MegaPascals {
        MegaPascals(self.fck_mpa)
    }

    /// True when a horizontal action is present
    pub fn has_horizontal_force(&self) -> bool {
        self.hed_kn > 0.0
    }
}

fn check_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

fn check_at_least_zero(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

fn check_finite(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}

/// Results from a corbel check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "lever_arm_m": 0.1,
///   "design_moment_knm": 3.225,
///   "max_resisting_moment_knm": 0.12,
///   "verified": false
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorbelResult {
    /// Lever arm d = h - d1 (m)
    pub lever_arm_m: f64,

    /// Design moment Md = Fed * d (kNm)
    pub design_moment_knm: f64,

    /// Maximum resisting moment Rd,max (kNm)
    pub max_resisting_moment_knm: f64,

    /// Md <= Rd,max
    pub verified: bool,
}

impl CorbelResult {
    /// Check if the corbel passes
    pub fn passes(&self) -> bool {
        self.verified
    }

    /// Md / Rd,max
    ///
    /// When Rd,max is zero this is 0.0 for a zero moment and infinity otherwise.
    pub fn utilization(&self) -> f64 {
        if self.max_resisting_moment_knm > 0.0 {
            self.design_moment_knm / self.max_resisting_moment_knm
        } else if self.design_moment_knm == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    }

    pub fn lever_arm(&self) -> Meters {
        Meters(self.lever_arm_m)
    }

    pub fn design_moment(&self) -> KiloNewtonMeters {
        KiloNewtonMeters(self.design_moment_knm)
    }

    pub fn max_resisting_moment(&self) -> KiloNewtonMeters {
        KiloNewtonMeters(self.max_resisting_moment_knm)
    }
}

/// Evaluate the corbel check.
///
/// # Returns
///
/// * `Ok(CorbelResult)` - Derived values and verdict
/// * `Err(CalcError::InvalidInput)` - A value is negative, non-positive or not finite
/// * `Err(CalcError::InvalidGeometry)` - d1 >= h, so the lever arm is not positive
pub fn evaluate(input: &CorbelInput) -> CalcResult<CorbelResult> {
    input.validate()?;

    let d = lever_arm(input.depth(), input.cover());
    if d.0 <= 0.0 {
        return Err(CalcError::invalid_geometry(
            input.h_m,
            input.d1_m,
            "Lever arm h - d1 must be positive",
        ));
    }

    let md = design_moment(input.vertical_force(), d);
    let rd_max = max_resisting_moment(input.concrete_strength(), input.width(), d);
    check_finite("design_moment_knm", md.0, "Design moment overflows; inputs are out of range")?;
    check_finite(
        "max_resisting_moment_knm",
        rd_max.0,
        "Resisting moment overflows; inputs are out of range",
    )?;
    let verified = moment_check(md, rd_max);

    debug!(
        label = %input.label,
        lever_arm_m = d.0,
        design_moment_knm = md.0,
        max_resisting_moment_knm = rd_max.0,
        verified,
        "corbel evaluated"
    );

    Ok(CorbelResult {
        lever_arm_m: d.0,
        design_moment_knm: md.0,
        max_resisting_moment_knm: rd_max.0,
        verified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_default_scenario_fails() {
        let result = evaluate(&CorbelInput::default()).unwrap();
        assert!((result.lever_arm_m - 0.100).abs() < TOL);
        assert!((result.design_moment_knm - 3.225).abs() < TOL);
        assert!((result.max_resisting_moment_knm - 0.12).abs() < TOL);
        assert!(!result.verified);
        assert!(!result.passes());
    }

    #[test]
    fn test_light_load_passes() {
        let input = CorbelInput { fed_kn: 0.05, ..CorbelInput::default() };
        let result = evaluate(&input).unwrap();
        assert!((result.design_moment_knm - 0.005).abs() < TOL);
        assert!(result.verified);
        assert!(result.utilization() < 1.0);
    }

    #[test]
    fn test_cover_equal_to_depth_is_invalid_geometry() {
        let input = CorbelInput { d1_m: 0.15, h_m: 0.15, ..CorbelInput::default() };
        let err = evaluate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_cover_above_depth_is_invalid_geometry() {
        let input = CorbelInput { d1_m: 0.20, ..CorbelInput::default() };
        assert!(matches!(evaluate(&input), Err(CalcError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_negative_concrete_strength_is_invalid_input() {
        let input = CorbelInput { fck_mpa: -5.0, ..CorbelInput::default() };
        match evaluate(&input) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "fck_mpa"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_width_and_depth_are_invalid_input() {
        let input = CorbelInput { b_m: 0.0, ..CorbelInput::default() };
        assert_eq!(evaluate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        // h <= 0 is reported as a field error before the geometry check
        let input = CorbelInput { h_m: 0.0, d1_m: 0.0, ..CorbelInput::default() };
        assert_eq!(evaluate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_forces_rejected() {
        let input = CorbelInput { fed_kn: -1.0, ..CorbelInput::default() };
        assert!(evaluate(&input).is_err());
        let input = CorbelInput { hed_kn: -1.0, ..CorbelInput::default() };
        assert!(evaluate(&input).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let input = CorbelInput { fck_mpa: f64::NAN, ..CorbelInput::default() };
        assert!(evaluate(&input).is_err());
        let input = CorbelInput { fed_kn: f64::INFINITY, ..CorbelInput::default() };
        assert!(evaluate(&input).is_err());
    }

    #[test]
    fn test_overflowing_moments_are_rejected() {
        let input = CorbelInput {
            fed_kn: 1e200,
            b_m: 1e200,
            h_m: 1e200,
            d1_m: 0.0,
            fck_mpa: 1.0,
            ..CorbelInput::default()
        };
        let err = evaluate(&input).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "design_moment_knm"));
    }

    #[test]
    fn test_overflowing_resistance_is_rejected() {
        let input = CorbelInput {
            fed_kn: 1.0,
            b_m: 1e300,
            h_m: 1e10,
            d1_m: 0.0,
            fck_mpa: 1.0,
            ..CorbelInput::default()
        };
        let err = evaluate(&input).unwrap_err();
        assert!(
            matches!(err, CalcError::InvalidInput { ref field, .. } if field == "max_resisting_moment_knm")
        );
    }

    #[test]
    fn test_underflowing_resistance_has_defined_utilization() {
        let input = CorbelInput {
            fed_kn: 0.0,
            b_m: 1e-200,
            h_m: 1e-100,
            d1_m: 0.0,
            fck_mpa: 1e-100,
            ..CorbelInput::default()
        };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.max_resisting_moment_knm, 0.0);
        assert_eq!(result.utilization(), 0.0);

        let loaded = CorbelResult { design_moment_knm: 1.0, ..result };
        assert_eq!(loaded.utilization(), f64::INFINITY);
    }

    #[test]
    fn test_zero_cover_is_allowed() {
        let input = CorbelInput { d1_m: 0.0, ..CorbelInput::default() };
        let result = evaluate(&input).unwrap();
        assert_eq!(result.lever_arm_m, 0.15);
    }

    #[test]
    fn test_horizontal_force_does_not_change_verdict() {
        let base = evaluate(&CorbelInput::default()).unwrap();
        let with_h = evaluate(&CorbelInput { hed_kn: 10.0, ..CorbelInput::default() }).unwrap();
        assert_eq!(base, with_h);
    }

    #[test]
    fn test_serialization() {
        let input = CorbelInput::default();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CorbelInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_missing_label_and_hed_use_defaults() {
        let json = r#"{"fed_kn": 10.0, "b_m": 1.0, "h_m": 0.2, "d1_m": 0.05, "fyk_mpa": 500.0, "fck_mpa": 25.0}"#;
        let input: CorbelInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.label, "Console");
        assert_eq!(input.hed_kn, 0.0);
    }

    fn arb_input() -> impl Strategy<Value = CorbelInput> {
        (
            0.0f64..1_000.0,
            0.0f64..500.0,
            0.05f64..5.0,
            0.05f64..2.0,
            0.0f64..0.95,
            200.0f64..600.0,
            1.0f64..100.0,
        )
            .prop_map(|(fed, hed, b, h, cover_ratio, fyk, fck)| CorbelInput {
                label: "P".to_string(),
                fed_kn: fed,
                hed_kn: hed,
                b_m: b,
                h_m: h,
                d1_m: h * cover_ratio,
                fyk_mpa: fyk,
                fck_mpa: fck,
            })
    }

    proptest! {
        #[test]
        fn lever_arm_is_exact_difference(input in arb_input()) {
            let result = evaluate(&input).unwrap();
            prop_assert_eq!(result.lever_arm_m, input.h_m - input.d1_m);
            prop_assert!(result.lever_arm_m > 0.0);
            prop_assert!(result.max_resisting_moment_knm >= 0.0);
        }

        #[test]
        fn evaluation_is_repeatable(input in arb_input()) {
            let first = evaluate(&input).unwrap();
            let second = evaluate(&input).unwrap();
            prop_assert_eq!(first.lever_arm_m.to_bits(), second.lever_arm_m.to_bits());
            prop_assert_eq!(first.design_moment_knm.to_bits(), second.design_moment_knm.to_bits());
            prop_assert_eq!(
                first.max_resisting_moment_knm.to_bits(),
                second.max_resisting_moment_knm.to_bits()
            );
            prop_assert_eq!(first.verified, second.verified);
        }

        #[test]
        fn design_moment_grows_with_vertical_force(input in arb_input(), extra in 0.0f64..100.0) {
            let base = evaluate(&input).unwrap();
            let heavier = CorbelInput { fed_kn: input.fed_kn + extra, ..input.clone() };
            prop_assert!(evaluate(&heavier).unwrap().design_moment_knm >= base.design_moment_knm);
        }

        #[test]
        fn resistance_grows_with_concrete_strength(input in arb_input(), extra in 0.0f64..50.0) {
            let base = evaluate(&input).unwrap();
            let stronger = CorbelInput { fck_mpa: input.fck_mpa + extra, ..input.clone() };
            prop_assert!(
                evaluate(&stronger).unwrap().max_resisting_moment_knm >= base.max_resisting_moment_knm
            );
        }

        #[test]
        fn cover_at_or_beyond_depth_is_rejected(input in arb_input(), excess in 0.0f64..1.0) {
            let bad = CorbelInput { d1_m: input.h_m + excess, ..input };
            let is_geometry_error = matches!(evaluate(&bad), Err(CalcError::InvalidGeometry { .. }));
            prop_assert!(is_geometry_error);
        }
    }
}
