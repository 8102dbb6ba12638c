//! Minimal end-to-end example: typed altitudes, distances, and speeds.

use navq::length::{Feet, Metres, NauticalMiles};
use navq::velocity::{Knots, MetresPerSecond};

fn main() {
    // Cleared to FL350: an altitude in feet, converted once for SI consumers.
    let cruise = Feet::new(35_000.0);
    let metric: Metres = cruise.into();
    assert!((metric.value() - 10_668.0).abs() < 1e-9);

    // Track miles add up in their own unit.
    let leg = NauticalMiles::new(250.0) + NauticalMiles::new(180.0);
    assert_eq!(leg.value(), 430.0);

    // Ground speed to metres per second for the wind triangle.
    let gs: MetresPerSecond = Knots::new(480.0).to_metres_per_second();
    assert!((gs.value() - 246.933).abs() < 1e-3);

    println!("cruise {cruise} = {metric}, leg {leg}, ground speed {gs}");
}
