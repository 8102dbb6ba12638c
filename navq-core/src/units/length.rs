//! Length units.
//!
//! The canonical scaling unit for this dimension is [`Metre`]
//! (`Metre::RATIO == 1.0`). The non-SI units carried here are the two an
//! air-navigation stack actually meets: feet for altitudes and flight
//! levels, nautical miles for along-track distances. Both are defined as
//! exact multiples of the metre, so their ratios are spelled as exact
//! rationals rather than rounded factors.
//!
//! ```rust
//! use navq_core::length::{Feet, Metre};
//!
//! let ft = Feet::new(1_000.0);
//! let m = ft.to::<Metre>();
//! assert_eq!(m.value(), 304.8);
//! ```

use crate::{Dimension, Quantity, Unit};
use navq_derive::Unit;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {}

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
///
/// Implemented automatically for every length unit; useful as a bound when
/// code should take a distance in whatever unit the caller has:
///
/// ```rust
/// use navq_core::length::{Feet, LengthUnit, Metre, Metres, NauticalMiles};
/// use navq_core::Quantity;
///
/// fn as_metres<U: LengthUnit>(d: Quantity<U>) -> Metres {
///     d.to::<Metre>()
/// }
///
/// assert_eq!(as_metres(Feet::new(1_000.0)).value(), 304.8);
/// assert_eq!(as_metres(NauticalMiles::new(1.0)).value(), 1_852.0);
/// ```
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion constants
// ─────────────────────────────────────────────────────────────────────────────

/// The length of one foot in metres: exactly `0.3048 m`.
///
/// Definition from ICAO Annex 5, Table 3-3.
pub const METRES_PER_FOOT: f64 = 3_048.0 / 10_000.0;

/// The length of one nautical mile in metres: exactly `1852 m`.
///
/// Definition from ICAO Annex 5, Table 3-3.
pub const METRES_PER_NAUTICAL_MILE: f64 = 1_852.0;

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

/// Metre, the SI base unit of length.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length, ratio = 1.0, name = "Metres")]
pub struct Metre;
/// A quantity measured in metres.
pub type Metres = Quantity<Metre>;
/// One metre.
pub const M: Metres = Metres::new(1.0);

/// Foot (`0.3048 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Length, ratio = METRES_PER_FOOT, name = "Feet")]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// Nautical mile (`1852 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "NM", dimension = Length, ratio = METRES_PER_NAUTICAL_MILE, name = "NauticalMiles")]
pub struct NauticalMile;
/// A quantity measured in nautical miles.
pub type NauticalMiles = Quantity<NauticalMile>;
/// One nautical mile.
pub const NMI: NauticalMiles = NauticalMiles::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Named conversions
// ─────────────────────────────────────────────────────────────────────────────

impl Quantity<Foot> {
    /// Converts to metres, a single multiplication by [`METRES_PER_FOOT`].
    ///
    /// ```rust
    /// use navq_core::length::{Feet, METRES_PER_FOOT};
    ///
    /// let m = Feet::new(1.0).to_metres();
    /// assert_eq!(m.value(), METRES_PER_FOOT);
    /// ```
    #[inline]
    pub const fn to_metres(self) -> Metres {
        self.to::<Metre>()
    }
}

impl Quantity<NauticalMile> {
    /// Converts to metres, a single multiplication by
    /// [`METRES_PER_NAUTICAL_MILE`].
    ///
    /// ```rust
    /// use navq_core::length::{NauticalMiles, METRES_PER_NAUTICAL_MILE};
    ///
    /// let m = NauticalMiles::new(1.0).to_metres();
    /// assert_eq!(m.value(), METRES_PER_NAUTICAL_MILE);
    /// ```
    #[inline]
    pub const fn to_metres(self) -> Metres {
        self.to::<Metre>()
    }
}

crate::impl_unit_conversions!(Metre, Foot, NauticalMile);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Constants and ratios
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn constants_match_icao_definitions() {
        assert_eq!(METRES_PER_FOOT, 0.3048);
        assert_eq!(METRES_PER_NAUTICAL_MILE, 1_852.0);
    }

    #[test]
    fn ratios_follow_constants() {
        assert_eq!(Metre::RATIO, 1.0);
        assert_eq!(Foot::RATIO, METRES_PER_FOOT);
        assert_eq!(NauticalMile::RATIO, METRES_PER_NAUTICAL_MILE);
    }

    #[test]
    fn symbols_and_names() {
        assert_eq!(Metre::SYMBOL, "m");
        assert_eq!(Foot::SYMBOL, "ft");
        assert_eq!(NauticalMile::SYMBOL, "NM");
        assert_eq!(Metre::NAME, "Metres");
        assert_eq!(Foot::NAME, "Feet");
        assert_eq!(NauticalMile::NAME, "NauticalMiles");
    }

    #[test]
    fn unit_constants_are_one() {
        assert_eq!(M.value(), 1.0);
        assert_eq!(FT.value(), 1.0);
        assert_eq!(NMI.value(), 1.0);
        assert_eq!((35.0 * NMI).value(), 35.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn one_foot_to_metres_is_exact() {
        let m = Feet::new(1.0).to_metres();
        assert_eq!(m.value(), METRES_PER_FOOT);
    }

    #[test]
    fn one_foot_round_trip_is_exact() {
        let ft = Feet::from(Metres::new(METRES_PER_FOOT));
        assert_eq!(ft.value(), 1.0);
    }

    #[test]
    fn one_nautical_mile_to_metres_is_exact() {
        let m = NauticalMiles::new(1.0).to_metres();
        assert_eq!(m.value(), METRES_PER_NAUTICAL_MILE);
    }

    #[test]
    fn one_nautical_mile_round_trip_is_exact() {
        let nm = NauticalMiles::from(Metres::new(METRES_PER_NAUTICAL_MILE));
        assert_eq!(nm.value(), 1.0);
    }

    #[test]
    fn nautical_mile_integer_multiples_are_exact() {
        // 1852 and the multiplier are both exactly representable, so the
        // product is too.
        let m = NauticalMiles::new(120.0).to_metres();
        assert_eq!(m.value(), 222_240.0);
    }

    #[test]
    fn to_metres_matches_generic_conversion() {
        let d = Feet::new(2_500.0);
        assert_eq!(d.to_metres(), d.to::<Metre>());
        let d = NauticalMiles::new(120.0);
        assert_eq!(d.to_metres(), d.to::<Metre>());
    }

    #[test]
    fn from_converts_in_both_directions() {
        let m = Metres::from(Feet::new(1_000.0));
        assert_relative_eq!(m.value(), 304.8, max_relative = 1e-12);

        let ft = Feet::from(Metres::new(304.8));
        assert_relative_eq!(ft.value(), 1_000.0, max_relative = 1e-12);
    }

    #[test]
    fn feet_per_nautical_mile() {
        let ft = NauticalMiles::new(1.0).to::<Foot>();
        assert_relative_eq!(ft.value(), 6_076.115_485_564_304, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Formatting and defaults
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn debug_formats_with_six_decimals() {
        assert_eq!(format!("{:?}", Metres::new(1.0)), "Metres(1.000000)");
        assert_eq!(format!("{:?}", Feet::new(-1.0)), "Feet(-1.000000)");
        assert_eq!(format!("{:?}", NauticalMiles::new(0.5)), "NauticalMiles(0.500000)");
    }

    #[test]
    fn display_shows_value_and_symbol() {
        assert_eq!(format!("{}", Metres::new(1.5)), "1.5 m");
        assert_eq!(format!("{}", Feet::new(35_000.0)), "35000 ft");
        assert_eq!(format!("{}", NauticalMiles::new(0.25)), "0.25 NM");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Metres::default(), Metres::ZERO);
        assert_eq!(Feet::default().value(), 0.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property tests
    // ─────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_feet_round_trip(v in -1.0e6..1.0e6f64) {
            let back = Feet::from(Feet::new(v).to_metres());
            assert_relative_eq!(back.value(), v, max_relative = 1e-12);
        }

        #[test]
        fn prop_nautical_mile_round_trip(v in -1.0e6..1.0e6f64) {
            let back = NauticalMiles::from(NauticalMiles::new(v).to_metres());
            assert_relative_eq!(back.value(), v, max_relative = 1e-12);
        }

        #[test]
        fn prop_foot_conversion_is_linear(v in -1.0e6..1.0e6f64) {
            let m = Feet::new(v).to_metres();
            assert_relative_eq!(m.value(), v * METRES_PER_FOOT, max_relative = 1e-12);
        }
    }
}
