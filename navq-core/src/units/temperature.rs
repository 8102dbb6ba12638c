//! Temperature units.
//!
//! The canonical scaling unit for this dimension is [`KelvinUnit`], the SI
//! base unit of thermodynamic temperature. Celsius and Fahrenheit are
//! affine scales rather than pure rescalings, so they have no place in a
//! ratio-based unit system and are converted at the edges instead.

use crate::{Dimension, Quantity, Unit};
use navq_derive::Unit;

/// Dimension tag for thermodynamic temperature.
pub enum Temperature {}
impl Dimension for Temperature {}

/// Marker trait for any [`Unit`] whose dimension is [`Temperature`].
pub trait TemperatureUnit: Unit<Dim = Temperature> {}
impl<T: Unit<Dim = Temperature>> TemperatureUnit for T {}

/// Kelvin, the SI base unit of thermodynamic temperature.
///
/// The marker carries a `Unit` suffix because the quantity alias below
/// takes the unit's own name: the kelvin reads the same in singular and
/// plural.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", dimension = Temperature, ratio = 1.0, name = "Kelvin")]
pub struct KelvinUnit;
/// A quantity measured in kelvins.
pub type Kelvin = Quantity<KelvinUnit>;
/// One kelvin.
pub const K: Kelvin = Kelvin::new(1.0);
