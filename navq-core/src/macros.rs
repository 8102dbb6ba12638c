//! Internal macros for navq-core.

/// Implements [`From`] conversions between every pair of units in the list.
///
/// For each pair of units `(A, B)` drawn from the list, this generates
/// `impl From<Quantity<A>> for Quantity<B>` and the reverse impl, both
/// delegating to [`Quantity::to`](crate::Quantity::to). All listed units
/// must share a dimension.
///
/// The generated impls are for foreign trait and foreign type from any
/// other crate's point of view, so coherence confines invocations to
/// `navq-core` itself; the unit modules call it once per dimension, e.g.
/// `impl_unit_conversions!(Metre, Foot, NauticalMile)`.
#[macro_export]
macro_rules! impl_unit_conversions {
    // A single unit has nothing to convert with.
    ($unit:ty) => {};

    // Pair the first unit with each remaining unit, then recurse on the
    // remainder so every pair is covered exactly once.
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Quantity<$first>> for $crate::Quantity<$rest> {
                fn from(q: $crate::Quantity<$first>) -> Self {
                    q.to::<$rest>()
                }
            }

            impl From<$crate::Quantity<$rest>> for $crate::Quantity<$first> {
                fn from(q: $crate::Quantity<$rest>) -> Self {
                    q.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}
