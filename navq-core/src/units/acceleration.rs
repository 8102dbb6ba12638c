//! Acceleration units.
//!
//! The canonical scaling unit for this dimension is
//! [`MetrePerSecondSquared`]. No other acceleration unit is carried;
//! vertical-speed work that wants feet per minute per second converts at
//! the edges.

use crate::{Dimension, Quantity, Unit};
use navq_derive::Unit;

/// Dimension tag for acceleration.
pub enum Acceleration {}
impl Dimension for Acceleration {}

/// Marker trait for any [`Unit`] whose dimension is [`Acceleration`].
pub trait AccelerationUnit: Unit<Dim = Acceleration> {}
impl<T: Unit<Dim = Acceleration>> AccelerationUnit for T {}

/// Metre per second squared, the SI derived unit of acceleration.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s²", dimension = Acceleration, ratio = 1.0, name = "MetresPerSecondSquared")]
pub struct MetrePerSecondSquared;
/// A quantity measured in metres per second squared.
pub type MetresPerSecondSquared = Quantity<MetrePerSecondSquared>;
/// One metre per second squared.
pub const MPS2: MetresPerSecondSquared = MetresPerSecondSquared::new(1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_symbol_and_name() {
        assert_eq!(MetrePerSecondSquared::RATIO, 1.0);
        assert_eq!(MetrePerSecondSquared::SYMBOL, "m/s²");
        assert_eq!(MetrePerSecondSquared::NAME, "MetresPerSecondSquared");
        assert_eq!(MPS2.value(), 1.0);
    }

    #[test]
    fn comparisons_follow_the_value() {
        let one = MetresPerSecondSquared::new(1.0);
        let minus_one = MetresPerSecondSquared::new(-1.0);
        assert!(minus_one < one);
        assert!(minus_one <= one);
        assert!(one > minus_one);
        assert!(one >= minus_one);
        assert_ne!(one, minus_one);
        assert_eq!(minus_one, -one);
    }

    #[test]
    fn debug_formats_with_six_decimals() {
        assert_eq!(
            format!("{:?}", MetresPerSecondSquared::new(1.0)),
            "MetresPerSecondSquared(1.000000)"
        );
        assert_eq!(
            format!("{:?}", MetresPerSecondSquared::new(-1.0)),
            "MetresPerSecondSquared(-1.000000)"
        );
    }

    #[test]
    fn display_shows_value_and_symbol() {
        assert_eq!(format!("{}", MetresPerSecondSquared::new(9.80665)), "9.80665 m/s²");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(MetresPerSecondSquared::default(), MetresPerSecondSquared::ZERO);
    }
}
