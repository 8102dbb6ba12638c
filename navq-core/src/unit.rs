//! Unit types and traits.

use crate::dimension::Dimension;
use core::fmt::Debug;

/// Trait implemented by every **unit** marker type.
///
/// A unit ties three pieces of information together at compile time: the
/// [`Dimension`] it measures, the conversion [`RATIO`](Unit::RATIO) to that
/// dimension's canonical scaling unit, and the strings used when a
/// [`Quantity`](crate::Quantity) of this unit is formatted.
///
/// Implementations are normally generated with `#[derive(Unit)]` from
/// `navq-derive` rather than written by hand:
///
/// ```rust
/// use navq_core::{Dimension, Quantity, Unit};
///
/// pub enum Depth {}
/// impl Dimension for Depth {}
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub struct Fathom;
///
/// impl Unit for Fathom {
///     const RATIO: f64 = 1.8288;
///     type Dim = Depth;
///     const SYMBOL: &'static str = "ftm";
///     const NAME: &'static str = "Fathoms";
/// }
///
/// let d = Quantity::<Fathom>::new(100.0);
/// assert_eq!(d.value(), 100.0);
/// ```
///
/// # Invariants
///
/// * `RATIO` is a finite, positive constant. The canonical unit of a
///   dimension has `RATIO == 1.0`; every other unit's ratio is its size
///   expressed in the canonical unit.
/// * `NAME` matches the public quantity alias (`Feet`, `Knots`, …), since
///   it is what `Debug` output prints.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Conversion factor from this unit to the canonical unit of its
    /// dimension (how many canonical units one of this unit is worth).
    const RATIO: f64;

    /// The dimension this unit measures.
    type Dim: Dimension;

    /// Short printable symbol (`"m"`, `"kt"`, `"kg/m³"`), used by
    /// [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// The public quantity type name (`"Metres"`, `"Knots"`), used by
    /// [`core::fmt::Debug`].
    const NAME: &'static str;
}
