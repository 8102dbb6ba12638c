//! Core type system for strongly typed air-navigation quantities.
//!
//! `navq-core` provides a minimal, zero-cost units model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`].
//! - A value tagged with a unit is a [`Quantity<U>`], backed by an `f64`.
//! - Conversion is an explicit, type-checked scaling via [`Quantity::to`],
//!   the generated [`From`] impls, or named helpers such as
//!   `Feet::to_metres`.
//!
//! Most users should depend on `navq` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (length vs velocity vs mass, …)
//!   and of units within a dimension (feet vs metres).
//! - Zero runtime overhead for unit tags (phantom types only).
//! - Exact ICAO conversion factors, published as constants, with
//!   bit-exact round trips at the definition points.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Dimensional algebra: no product or quotient dimensions are derived;
//!   computations that cross dimensions happen on raw `f64`s and re-wrap
//!   at the edges.
//! - Affine temperature scales (Celsius, Fahrenheit); only kelvins are
//!   carried.
//!
//! # Quick start
//!
//! ```rust
//! use navq_core::length::{Feet, Metres};
//!
//! let cruise = Feet::new(35_000.0);
//! let in_metres: Metres = cruise.into();
//! assert!((in_metres.value() - 10_668.0).abs() < 1e-9);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `navq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! navq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in
//! `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is
//!   the raw `f64` value by default, or tagged `{"value", "unit"}` pairs
//!   via the `serde_with_unit` module.
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
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod macros;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::Dimension;
pub use quantity::Quantity;
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `navq-core` so they can implement formatting and
/// helper traits without running into Rust's orphan rules.
pub mod units;

pub use units::acceleration;
pub use units::density;
pub use units::length;
pub use units::mass;
pub use units::pressure;
pub use units::temperature;
pub use units::velocity;
