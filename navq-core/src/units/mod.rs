//! Predefined unit modules grouped by dimension.
//!
//! `navq-core` ships the units an air-navigation stack actually meets, so
//! that conversions and formatting work out of the box without downstream
//! crates having to fight Rust's orphan rules. Each module defines one
//! dimension: its tag type, a per-dimension marker trait, the unit markers
//! with their quantity aliases and one-unit constants, and the published
//! conversion constants.
//!
//! ## Modules
//!
//! - [`length`]: length units (SI metre is canonical scaling unit) plus
//!   feet and nautical miles.
//! - [`velocity`]: velocity units (metre per second is canonical scaling
//!   unit) plus knots.
//! - [`acceleration`]: acceleration units (metre per second squared is
//!   canonical scaling unit).
//! - [`temperature`]: thermodynamic temperature (kelvin is canonical
//!   scaling unit).
//! - [`pressure`]: pressure units (pascal is canonical scaling unit).
//! - [`mass`]: mass units (kilogram is canonical scaling unit).
//! - [`density`]: density units (kilogram per cubic metre is canonical
//!   scaling unit).

pub mod acceleration;
pub mod density;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod velocity;
