//! Strongly typed quantities for air navigation.
//!
//! `navq` is the user-facing crate in this workspace. It re-exports the full
//! API from `navq-core`: altitudes in feet, distances in nautical miles,
//! speeds in knots, and the SI units they convert to.
//!
//! The core idea is: a value is always a `Quantity<U>`, where `U` is a
//! zero-sized type describing the unit. This keeps units at compile time
//! with no runtime overhead beyond an `f64`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to
//!   knots) and incompatible units of the same dimension (feet to metres
//!   takes an explicit conversion).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`,
//!   the generated `From` impls, or named helpers like
//!   [`Knots::to_metres_per_second`](crate::velocity::Knots)).
//! - Carries the exact ICAO conversion factors as published constants, so
//!   round trips through the SI unit are bit-exact at the definition
//!   points.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional algebra: multiplying a velocity by a time does not produce
//!   a length. Derived values are computed on raw `f64`s and re-wrapped at
//!   the edges.
//! - Exact arithmetic: quantities are backed by `f64` and follow IEEE-754.
//! - Affine temperature scales (Celsius, Fahrenheit); only kelvins are
//!   carried.
//!
//! # Quick start
//!
//! ```rust
//! use navq::length::{Feet, Metres, NauticalMiles};
//! use navq::velocity::{Knots, MetresPerSecond};
//!
//! // Cleared to FL350: an altitude in feet, not a bare number.
//! let cruise = Feet::new(35_000.0);
//! let metric: Metres = cruise.into();
//! assert!((metric.value() - 10_668.0).abs() < 1e-9);
//!
//! // Same-type arithmetic works as expected.
//! let leg = NauticalMiles::new(250.0) + NauticalMiles::new(180.0);
//! assert_eq!(leg.value(), 430.0);
//!
//! // Ground speed to SI for the wind triangle.
//! let gs: MetresPerSecond = Knots::new(480.0).to_metres_per_second();
//! assert!((gs.value() - 246.933).abs() < 1e-3);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! Quantities of different dimensions never mix:
//!
//! ```compile_fail
//! use navq::length::Metres;
//! use navq::velocity::Knots;
//!
//! let d = Metres::new(1.0);
//! let v = Knots::new(1.0);
//! let _ = d + v; // cannot add different unit types
//! ```
//!
//! Neither do different units of the same dimension; convert first:
//!
//! ```compile_fail
//! use navq::length::{Feet, Metres};
//!
//! let m = Metres::new(1.0);
//! let ft = Feet::new(1.0);
//! let _ = m + ft; // convert explicitly before adding
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the
//! crate root for convenience):
//!
//! - `navq::length` (metres, feet, nautical miles)
//! - `navq::velocity` (metres per second, knots)
//! - `navq::acceleration` (metres per second squared)
//! - `navq::temperature` (kelvins)
//! - `navq::pressure` (pascals)
//! - `navq::mass` (kilograms)
//! - `navq::density` (kilograms per cubic metre)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `navq-core`.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is
//!   the raw `f64` value by default, or `{"value", "unit"}` pairs via the
//!   `serde_with_unit` module.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! navq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result`
//! from its core operations. Conversions and arithmetic are pure `f64`
//! computations; they do not panic on their own, but they follow IEEE-754
//! behavior (NaN and infinities propagate according to the underlying
//! operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use navq_core::*;

/// Derive macro used by `navq-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Quantity`, so it
/// is intended for use inside `navq-core` (or crates exposing the same
/// crate-root API). Most users should not need this.
pub use navq_derive::Unit;

pub use navq_core::units::acceleration;
pub use navq_core::units::density;
pub use navq_core::units::length;
pub use navq_core::units::mass;
pub use navq_core::units::pressure;
pub use navq_core::units::temperature;
pub use navq_core::units::velocity;

pub use navq_core::units::acceleration::*;
pub use navq_core::units::density::*;
pub use navq_core::units::length::*;
pub use navq_core::units::mass::*;
pub use navq_core::units::pressure::*;
pub use navq_core::units::temperature::*;
pub use navq_core::units::velocity::*;
