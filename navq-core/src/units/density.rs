//! Density units.
//!
//! The canonical scaling unit for this dimension is
//! [`KilogramPerCubicMetre`], the unit air-data and performance work
//! quotes air density in.

use crate::{Dimension, Quantity, Unit};
use navq_derive::Unit;

/// Dimension tag for density.
pub enum Density {}
impl Dimension for Density {}

/// Marker trait for any [`Unit`] whose dimension is [`Density`].
pub trait DensityUnit: Unit<Dim = Density> {}
impl<T: Unit<Dim = Density>> DensityUnit for T {}

/// Kilogram per cubic metre, the SI derived unit of density.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg/m³", dimension = Density, ratio = 1.0, name = "KilogramsPerCubicMetre")]
pub struct KilogramPerCubicMetre;
/// A quantity measured in kilograms per cubic metre.
pub type KilogramsPerCubicMetre = Quantity<KilogramPerCubicMetre>;
/// One kilogram per cubic metre.
pub const KG_PER_M3: KilogramsPerCubicMetre = KilogramsPerCubicMetre::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_symbol_and_name() {
        assert_eq!(KilogramPerCubicMetre::RATIO, 1.0);
        assert_eq!(KilogramPerCubicMetre::SYMBOL, "kg/m³");
        assert_eq!(KilogramPerCubicMetre::NAME, "KilogramsPerCubicMetre");
        assert_eq!(KG_PER_M3.value(), 1.0);
    }

    #[test]
    fn comparisons_follow_the_value() {
        // ISA sea level density against a hot-and-high day.
        let isa = KilogramsPerCubicMetre::new(1.225);
        let thin = KilogramsPerCubicMetre::new(0.9);
        assert!(thin < isa);
        assert!(thin <= isa);
        assert!(isa > thin);
        assert!(isa >= thin);
        assert_ne!(isa, thin);
        assert_eq!(isa, KilogramsPerCubicMetre::new(1.225));
    }

    #[test]
    fn debug_formats_with_six_decimals() {
        assert_eq!(
            format!("{:?}", KilogramsPerCubicMetre::new(1.0)),
            "KilogramsPerCubicMetre(1.000000)"
        );
        assert_eq!(
            format!("{:?}", KilogramsPerCubicMetre::new(1.225)),
            "KilogramsPerCubicMetre(1.225000)"
        );
    }

    #[test]
    fn display_shows_value_and_symbol() {
        assert_eq!(format!("{}", KilogramsPerCubicMetre::new(1.225)), "1.225 kg/m³");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(KilogramsPerCubicMetre::default(), KilogramsPerCubicMetre::ZERO);
    }
}
