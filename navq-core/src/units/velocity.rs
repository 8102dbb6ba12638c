//! Velocity units.
//!
//! The canonical scaling unit for this dimension is [`MetrePerSecond`]
//! (`MetrePerSecond::RATIO == 1.0`). The knot is carried as the
//! aeronautical speed unit: one nautical mile per hour, which makes its
//! ratio an exact rational derived from
//! [`METRES_PER_NAUTICAL_MILE`](crate::length::METRES_PER_NAUTICAL_MILE).
//!
//! ```rust
//! use navq_core::velocity::Knots;
//!
//! let gs = Knots::new(480.0);
//! let mps = gs.to_metres_per_second();
//! assert!(mps.value() > 246.0 && mps.value() < 247.0);
//! ```

use crate::units::length::METRES_PER_NAUTICAL_MILE;
use crate::{Dimension, Quantity, Unit};
use navq_derive::Unit;

/// Dimension tag for velocity.
pub enum Velocity {}
impl Dimension for Velocity {}

/// Marker trait for any [`Unit`] whose dimension is [`Velocity`].
pub trait VelocityUnit: Unit<Dim = Velocity> {}
impl<T: Unit<Dim = Velocity>> VelocityUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion constants
// ─────────────────────────────────────────────────────────────────────────────

const SECONDS_PER_HOUR: f64 = 3_600.0;

/// The speed of one knot in metres per second: exactly `1852/3600 m/s`,
/// about `0.514444 m/s` (equivalently, `1 m/s ≈ 1.943844 kt`).
///
/// One knot is one nautical mile per hour, so this falls out of the ICAO
/// Annex 5 definition of the nautical mile.
pub const METRES_PER_SECOND_TO_KNOTS: f64 = METRES_PER_NAUTICAL_MILE / SECONDS_PER_HOUR;

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

/// Metre per second, the SI derived unit of velocity.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", dimension = Velocity, ratio = 1.0, name = "MetresPerSecond")]
pub struct MetrePerSecond;
/// A quantity measured in metres per second.
pub type MetresPerSecond = Quantity<MetrePerSecond>;
/// One metre per second.
pub const MPS: MetresPerSecond = MetresPerSecond::new(1.0);

/// Knot, one nautical mile per hour (`1852/3600 m/s` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kt", dimension = Velocity, ratio = METRES_PER_SECOND_TO_KNOTS, name = "Knots")]
pub struct Knot;
/// A quantity measured in knots.
pub type Knots = Quantity<Knot>;
/// One knot.
pub const KT: Knots = Knots::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Named conversions
// ─────────────────────────────────────────────────────────────────────────────

impl Quantity<Knot> {
    /// Converts to metres per second, a single multiplication by
    /// [`METRES_PER_SECOND_TO_KNOTS`].
    ///
    /// ```rust
    /// use navq_core::velocity::{Knots, METRES_PER_SECOND_TO_KNOTS};
    ///
    /// let mps = Knots::new(1.0).to_metres_per_second();
    /// assert_eq!(mps.value(), METRES_PER_SECOND_TO_KNOTS);
    /// ```
    #[inline]
    pub const fn to_metres_per_second(self) -> MetresPerSecond {
        self.to::<MetrePerSecond>()
    }
}

crate::impl_unit_conversions!(MetrePerSecond, Knot);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Constants and ratios
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn constant_is_the_exact_ratio() {
        assert_eq!(METRES_PER_SECOND_TO_KNOTS, 1_852.0 / 3_600.0);
        assert_relative_eq!(
            1.0 / METRES_PER_SECOND_TO_KNOTS,
            1.943_844_492_440_6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn ratios_follow_constants() {
        assert_eq!(MetrePerSecond::RATIO, 1.0);
        assert_eq!(Knot::RATIO, METRES_PER_SECOND_TO_KNOTS);
    }

    #[test]
    fn symbols_and_names() {
        assert_eq!(MetrePerSecond::SYMBOL, "m/s");
        assert_eq!(Knot::SYMBOL, "kt");
        assert_eq!(MetrePerSecond::NAME, "MetresPerSecond");
        assert_eq!(Knot::NAME, "Knots");
    }

    #[test]
    fn unit_constants_are_one() {
        assert_eq!(MPS.value(), 1.0);
        assert_eq!(KT.value(), 1.0);
        assert_eq!((250.0 * KT).value(), 250.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn one_knot_to_metres_per_second_is_exact() {
        let mps = Knots::new(1.0).to_metres_per_second();
        assert_eq!(mps.value(), METRES_PER_SECOND_TO_KNOTS);
        assert_relative_eq!(mps.value(), 0.514_444, max_relative = 1e-5);
    }

    #[test]
    fn one_knot_round_trip_is_exact() {
        let kt = Knots::from(MetresPerSecond::new(METRES_PER_SECOND_TO_KNOTS));
        assert_eq!(kt.value(), 1.0);
    }

    #[test]
    fn to_metres_per_second_matches_generic_conversion() {
        let v = Knots::new(250.0);
        assert_eq!(v.to_metres_per_second(), v.to::<MetrePerSecond>());
    }

    #[test]
    fn approach_speed_in_metres_per_second() {
        // 135 kt × 1852 m/NM ÷ 3600 s/h = 69.45 m/s.
        let vref = Knots::new(135.0);
        assert_relative_eq!(vref.to_metres_per_second().value(), 69.45, max_relative = 1e-12);
    }

    #[test]
    fn from_converts_in_both_directions() {
        let mps = MetresPerSecond::from(Knots::new(2.0));
        assert_relative_eq!(mps.value(), 2.0 * METRES_PER_SECOND_TO_KNOTS, max_relative = 1e-12);

        let kt = Knots::from(MetresPerSecond::new(10.0));
        assert_relative_eq!(kt.value(), 10.0 / METRES_PER_SECOND_TO_KNOTS, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparisons, formatting, defaults
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn comparisons_follow_the_value() {
        let slow = Knots::new(120.0);
        let fast = Knots::new(480.0);
        assert!(slow < fast);
        assert!(slow <= fast);
        assert!(fast > slow);
        assert!(fast >= slow);
        assert_ne!(slow, fast);
        assert_eq!(slow, Knots::new(120.0));
    }

    #[test]
    fn debug_formats_with_six_decimals() {
        assert_eq!(format!("{:?}", Knots::new(1.0)), "Knots(1.000000)");
        assert_eq!(
            format!("{:?}", MetresPerSecond::new(-1.0)),
            "MetresPerSecond(-1.000000)"
        );
    }

    #[test]
    fn display_shows_value_and_symbol() {
        assert_eq!(format!("{}", Knots::new(250.0)), "250 kt");
        assert_eq!(format!("{}", MetresPerSecond::new(9.5)), "9.5 m/s");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Knots::default(), Knots::ZERO);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property tests
    // ─────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_knots_round_trip(v in -1.0e6..1.0e6f64) {
            let back = Knots::from(Knots::new(v).to_metres_per_second());
            assert_relative_eq!(back.value(), v, max_relative = 1e-12);
        }

        #[test]
        fn prop_knot_conversion_is_linear(v in -1.0e6..1.0e6f64) {
            let mps = Knots::new(v).to_metres_per_second();
            assert_relative_eq!(mps.value(), v * METRES_PER_SECOND_TO_KNOTS, max_relative = 1e-12);
        }
    }
}
