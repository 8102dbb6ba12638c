//! Dimension types and traits.

/// Marker trait for **dimensions** (length, velocity, mass, …).
///
/// A dimension is the physical category a unit measures. Units sharing a
/// dimension convert into each other; units of different dimensions never
/// mix, and the compiler enforces that separation.
///
/// Dimensions are usually modelled as empty enums, so they can never be
/// instantiated at runtime:
///
/// ```rust
/// use navq_core::Dimension;
///
/// pub enum Depth {}
/// impl Dimension for Depth {}
/// ```
pub trait Dimension {}
