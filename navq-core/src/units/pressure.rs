//! Pressure units.
//!
//! The canonical scaling unit for this dimension is [`Pascal`]. Altimetry
//! formats (hectopascals, inches of mercury) are presentation concerns and
//! convert at the edges.

use crate::{Dimension, Quantity, Unit};
use navq_derive::Unit;

/// Dimension tag for pressure.
pub enum Pressure {}
impl Dimension for Pressure {}

/// Marker trait for any [`Unit`] whose dimension is [`Pressure`].
pub trait PressureUnit: Unit<Dim = Pressure> {}
impl<T: Unit<Dim = Pressure>> PressureUnit for T {}

/// Pascal, the SI derived unit of pressure.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Pa", dimension = Pressure, ratio = 1.0, name = "Pascals")]
pub struct Pascal;
/// A quantity measured in pascals.
pub type Pascals = Quantity<Pascal>;
/// One pascal.
pub const PA: Pascals = Pascals::new(1.0);
