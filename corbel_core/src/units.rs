//! # Unit Types
//!
//! Lightweight newtype wrappers for the SI units used by the corbel check.
//! JSON stays clean (`#[serde(transparent)]` serializes as a bare number)
//! while code that formats or exports a value knows its unit symbol.
//!
//! ## Units
//!
//! - Length: metres (m)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kNm)
//! - Stress: megapascals (MPa)
//!
//! The simplified resistance formula mixes MPa and m without conversion;
//! its result is reported in kNm as-is.
//!
//! ## Example
//!
//! ```rust
//! use corbel_core::units::{Meters, Unit};
//!
//! let h = Meters(0.15);
//! let d1 = Meters(0.05);
//! assert!(((h - d1).0 - 0.10).abs() < 1e-12);
//! assert_eq!(Meters::SYMBOL, "m");
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Sub};

/// A quantity with a fixed display symbol.
pub trait Unit: Copy {
    /// Unit symbol used in reports and exports
    const SYMBOL: &'static str;

    /// Raw value in this unit
    fn raw(self) -> f64;
}

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

/// Force times lever arm
impl Mul<Meters> for KiloNewtons {
    type Output = KiloNewtonMeters;
    fn mul(self, rhs: Meters) -> Self::Output {
        KiloNewtonMeters(self.0 * rhs.0)
    }
}

macro_rules! impl_unit {
    ($type:ty, $symbol:expr) => {
        impl Unit for $type {
            const SYMBOL: &'static str = $symbol;

            fn raw(self) -> f64 {
                self.0
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_unit!(Meters, "m");
impl_unit!(KiloNewtons, "kN");
impl_unit!(KiloNewtonMeters, "kNm");
impl_unit!(MegaPascals, "MPa");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_times_length() {
        let md = KiloNewtons(32.25) * Meters(0.1);
        assert!((md.0 - 3.225).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(0.15);
        let b = Meters(0.05);
        assert!(((a - b).0 - 0.10).abs() < 1e-12);
        assert_eq!((KiloNewtonMeters(0.18) / 1.5).0, 0.18 / 1.5);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Meters::SYMBOL, "m");
        assert_eq!(KiloNewtons::SYMBOL, "kN");
        assert_eq!(KiloNewtonMeters::SYMBOL, "kNm");
        assert_eq!(MegaPascals::SYMBOL, "MPa");
    }

    #[test]
    fn test_serialization() {
        let fck = MegaPascals(20.0);
        let json = serde_json::to_string(&fck).unwrap();
        assert_eq!(json, "20.0");

        let roundtrip: MegaPascals = serde_json::from_str(&json).unwrap();
        assert_eq!(fck, roundtrip);
    }
}
