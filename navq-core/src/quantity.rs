//! Quantity type and its implementations.

use crate::unit::Unit;
use core::fmt;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A physical quantity tagged with its unit.
///
/// `Quantity<U>` wraps an `f64` together with phantom type information about
/// its unit `U`, keeping different units apart at compile time with zero
/// runtime cost: the wrapper has the same size and layout as a bare `f64`.
///
/// Comparison is inherited from `f64`, so IEEE-754 semantics apply
/// throughout: `NaN` is not equal to itself and does not order against
/// anything, and infinities compare the way the hardware defines.
///
/// # Examples
///
/// ```rust
/// use navq_core::{Dimension, Quantity, Unit};
///
/// pub enum Depth {}
/// impl Dimension for Depth {}
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub struct Fathom;
/// impl Unit for Fathom {
///     const RATIO: f64 = 1.8288;
///     type Dim = Depth;
///     const SYMBOL: &'static str = "ftm";
///     const NAME: &'static str = "Fathoms";
/// }
///
/// let a = Quantity::<Fathom>::new(5.0);
/// let b = Quantity::<Fathom>::new(3.0);
/// assert_eq!((a + b).value(), 8.0);
/// assert!(b < a);
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// Zero magnitude of this quantity type, the value new accumulators
    /// start from.
    ///
    /// ```rust
    /// use navq_core::length::Metres;
    ///
    /// assert_eq!(Metres::ZERO.value(), 0.0);
    /// ```
    pub const ZERO: Self = Self::new(0.0);

    /// The `NaN` magnitude of this quantity type.
    ///
    /// ```rust
    /// use navq_core::length::Metres;
    ///
    /// assert!(Metres::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a new quantity with the given value.
    ///
    /// No validation is performed: `NaN` and infinities are accepted and
    /// propagate through arithmetic per IEEE-754.
    ///
    /// ```rust
    /// use navq_core::length::Feet;
    ///
    /// let d = Feet::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    ///
    /// ```rust
    /// use navq_core::velocity::Knots;
    ///
    /// let v = Knots::new(250.0);
    /// assert_eq!(v.value(), 250.0);
    /// ```
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use navq_core::temperature::Kelvin;
    ///
    /// let t = Kelvin::new(-10.0);
    /// assert_eq!(t.abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(self.0.abs())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(libm::fabs(self.0))
        }
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// The value is multiplied by `U::RATIO` before being divided by
    /// `T::RATIO`, so converting *to* the canonical unit is a single
    /// multiplication and converting *from* it a single division. A round
    /// trip through the canonical unit therefore reproduces exactly
    /// representable magnitudes bit for bit.
    ///
    /// ```rust
    /// use navq_core::length::{Feet, Metre, METRES_PER_FOOT};
    ///
    /// let m = Feet::new(1.0).to::<Metre>();
    /// assert_eq!(m.value(), METRES_PER_FOOT);
    /// ```
    #[inline]
    pub const fn to<T: Unit<Dim = U::Dim>>(self) -> Quantity<T> {
        Quantity::<T>::new(self.0 * U::RATIO / T::RATIO)
    }

    /// Returns the minimum of this quantity and another.
    ///
    /// Follows `f64::min`: if one operand is `NaN`, the other is returned.
    ///
    /// ```rust
    /// use navq_core::length::NauticalMiles;
    ///
    /// let a = NauticalMiles::new(3.0);
    /// let b = NauticalMiles::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the maximum of this quantity and another.
    ///
    /// Follows `f64::max`: if one operand is `NaN`, the other is returned.
    ///
    /// ```rust
    /// use navq_core::length::NauticalMiles;
    ///
    /// let a = NauticalMiles::new(3.0);
    /// let b = NauticalMiles::new(5.0);
    /// assert_eq!(a.max(b).value(), 5.0);
    /// ```
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// Const addition, for building derived constants.
    ///
    /// ```rust
    /// use navq_core::mass::Kilograms;
    ///
    /// const TOTAL: Kilograms = Kilograms::new(1.0).add(Kilograms::new(2.0));
    /// assert_eq!(TOTAL.value(), 3.0);
    /// ```
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }

    /// Const subtraction, for building derived constants.
    ///
    /// ```rust
    /// use navq_core::mass::Kilograms;
    ///
    /// const NET: Kilograms = Kilograms::new(5.0).sub(Kilograms::new(2.0));
    /// assert_eq!(NET.value(), 3.0);
    /// ```
    #[inline]
    pub const fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl<U: Unit> Default for Quantity<U> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> fmt::Debug for Quantity<U> {
    /// Formats as `<Name>(<value>)` with six fixed decimal places, e.g.
    /// `Metres(1.000000)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:.6})", U::NAME, self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.0)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> MulAssign<f64> for Quantity<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit> DivAssign<f64> for Quantity<U> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl<U: Unit> From<f64> for Quantity<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    /// Serializes as a bare `f64`, the compact default.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    /// Deserializes from a bare `f64`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helpers that keep the unit symbol next to the value.
///
/// By default a [`Quantity`] serializes as a bare number. For data that
/// leaves the process (config files, logged state, external APIs), use this
/// module with `#[serde(with = "...")]` to emit a self-describing
/// `{"value": …, "unit": …}` pair instead. On the way back in, the `unit`
/// field is required and must match the target unit's symbol, so a value
/// recorded in the wrong unit fails loudly instead of being misread.
///
/// # Examples
///
/// ```rust
/// use navq_core::length::Feet;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Clearance {
///     #[serde(with = "navq_core::serde_with_unit")]
///     altitude: Feet,
/// }
///
/// let c = Clearance { altitude: Feet::new(35_000.0) };
/// let json = serde_json::to_string(&c).unwrap();
/// assert_eq!(json, r#"{"altitude":{"value":35000.0,"unit":"ft"}}"#);
///
/// let back: Clearance = serde_json::from_str(&json).unwrap();
/// assert_eq!(back.altitude, c.altitude);
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a quantity as a struct with `value` and `unit` fields.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a quantity from a struct with `value` and `unit` fields.
    ///
    /// Both fields are required; a `unit` other than `U::SYMBOL` is
    /// rejected.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        // Accepts exactly U::SYMBOL, without allocating for the comparison.
        struct SymbolCheck<U>(PhantomData<U>);

        impl<'de, U: Unit> Deserialize<'de> for SymbolCheck<U> {
            fn deserialize<D2>(deserializer: D2) -> Result<Self, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                struct SymbolVisitor<U>(PhantomData<U>);

                impl<'de, U: Unit> Visitor<'de> for SymbolVisitor<U> {
                    type Value = SymbolCheck<U>;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        write!(formatter, "unit symbol \"{}\"", U::SYMBOL)
                    }

                    fn visit_str<E>(self, symbol: &str) -> Result<Self::Value, E>
                    where
                        E: de::Error,
                    {
                        if symbol == U::SYMBOL {
                            Ok(SymbolCheck(PhantomData))
                        } else {
                            Err(E::invalid_value(de::Unexpected::Str(symbol), &self))
                        }
                    }
                }

                deserializer.deserialize_str(SymbolVisitor(PhantomData))
            }
        }

        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a struct with `value` and `unit` fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<SymbolCheck<U>> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                if unit.is_none() {
                    return Err(de::Error::missing_field("unit"));
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}
