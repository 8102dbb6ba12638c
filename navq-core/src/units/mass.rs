//! Mass units.
//!
//! The canonical scaling unit for this dimension is [`Kilogram`]. Fuel
//! planning in pounds or tonnes converts at the edges.

use crate::{Dimension, Quantity, Unit};
use navq_derive::Unit;

/// Dimension tag for mass.
pub enum Mass {}
impl Dimension for Mass {}

/// Marker trait for any [`Unit`] whose dimension is [`Mass`].
pub trait MassUnit: Unit<Dim = Mass> {}
impl<T: Unit<Dim = Mass>> MassUnit for T {}

/// Kilogram, the SI base unit of mass.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = Mass, ratio = 1.0, name = "Kilograms")]
pub struct Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kilogram>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);
