// Hohmann and bi-elliptic transfer calculations
//
// Everything here is closed-form vis-viva algebra: v² = μ(2/r - 1/a).
// Units follow the `Body` constants: km, km/s, seconds.

use std::f64::consts::PI;

use crate::kepler::solve_eccentric_anomaly;

// ============================================================================
// TRANSFER GEOMETRY
// ============================================================================

// The intermediate ellipse a transfer coasts along
#[derive(Debug, Clone, Copy)]
pub struct TransferOrbit {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    // Closest approach to the central body, in km
    pub periapsis: f64,
    // Farthest point, in km
    pub apoapsis: f64,
}

impl TransferOrbit {
    // Ellipse touching r_periapsis and r_apoapsis at its apsides
    fn between(r_periapsis: f64, r_apoapsis: f64) -> Self {
        let a = (r_periapsis + r_apoapsis) / 2.0;
        Self {
            semi_major_axis: a,
            eccentricity: (r_apoapsis - r_periapsis) / (r_apoapsis + r_periapsis),
            periapsis: r_periapsis,
            apoapsis: r_apoapsis,
        }
    }
}

// Circular orbit speed at radius r
#[inline]
fn circular_speed(r: f64, mu: f64) -> f64 {
    (mu / r).sqrt()
}

// Vis-viva speed at radius r on an orbit with semi-major axis a
#[inline]
fn vis_viva(r: f64, a: f64, mu: f64) -> f64 {
    (mu * (2.0 / r - 1.0 / a)).sqrt()
}

// Orbital period via Kepler's third law: T = 2π√(a³/μ)
#[inline]
fn period(a: f64, mu: f64) -> f64 {
    2.0 * PI * (a * a * a / mu).sqrt()
}

// ============================================================================
// HOHMANN TRANSFER
// ============================================================================

// Two-burn transfer between circular orbits at r1 and r2
#[derive(Debug, Clone, Copy)]
pub struct HohmannTransfer {
    // Departure burn at r1, km/s
    pub delta_v1: f64,
    // Circularization burn at r2, km/s
    pub delta_v2: f64,
    pub total_delta_v: f64,
    // Coast time: half the transfer ellipse period, seconds
    pub transfer_time: f64,
    pub transfer_orbit: TransferOrbit,
}

// Compute the minimum-energy two-burn transfer from a circular orbit at r1 to
// a circular orbit at r2 around a body with gravitational parameter μ.
//
// Requires r1, r2, μ > 0. Equal radii produce a well-defined zero-Δv result
// (the degenerate "transfer" is staying put).
pub fn hohmann_transfer(r1: f64, r2: f64, mu: f64) -> HohmannTransfer {
    assert!(r1 > 0.0 && r2 > 0.0 && mu > 0.0, "radii and mu must be positive");

    let transfer_orbit = TransferOrbit::between(r1.min(r2), r1.max(r2));
    let a_t = transfer_orbit.semi_major_axis;

    // Burn at r1: circular speed -> transfer-ellipse speed at r1
    let delta_v1 = (vis_viva(r1, a_t, mu) - circular_speed(r1, mu)).abs();
    // Burn at r2: transfer-ellipse speed at r2 -> circular speed
    let delta_v2 = (circular_speed(r2, mu) - vis_viva(r2, a_t, mu)).abs();

    HohmannTransfer {
        delta_v1,
        delta_v2,
        total_delta_v: delta_v1 + delta_v2,
        transfer_time: period(a_t, mu) / 2.0,
        transfer_orbit,
    }
}

// ============================================================================
// BI-ELLIPTIC TRANSFER
// ============================================================================

// Three-burn transfer through a distant intermediate apoapsis
#[derive(Debug, Clone, Copy)]
pub struct BiellipticTransfer {
    pub delta_v1: f64,
    // Burn at the intermediate apoapsis, km/s
    pub delta_v2: f64,
    // Circularization at r2, km/s
    pub delta_v3: f64,
    pub total_delta_v: f64,
    pub transfer_time: f64,
    // The first of the two coast ellipses (r1 -> r_intermediate)
    pub transfer_orbit: TransferOrbit,
}

// Compute the three-burn transfer r1 -> r_intermediate -> r2.
//
// The crossover property falls out of the vis-viva algebra, not a constant in
// this file: once r2/r1 exceeds ≈ 11.94, a bi-elliptic transfer with a
// sufficiently distant intermediate apoapsis beats Hohmann on total Δv.
pub fn bielliptic_transfer(r1: f64, r2: f64, r_intermediate: f64, mu: f64) -> BiellipticTransfer {
    assert!(
        r1 > 0.0 && r2 > 0.0 && r_intermediate > 0.0 && mu > 0.0,
        "radii and mu must be positive"
    );
    assert!(
        r_intermediate >= r1.max(r2),
        "intermediate apoapsis must lie outside both circular orbits"
    );

    let first = TransferOrbit::between(r1, r_intermediate);
    let second = TransferOrbit::between(r2, r_intermediate);

    // Burn 1: leave the r1 circle onto the first ellipse
    let delta_v1 = (vis_viva(r1, first.semi_major_axis, mu) - circular_speed(r1, mu)).abs();
    // Burn 2: at the shared apoapsis, hop from the first ellipse to the second
    let delta_v2 = (vis_viva(r_intermediate, second.semi_major_axis, mu)
        - vis_viva(r_intermediate, first.semi_major_axis, mu))
    .abs();
    // Burn 3: circularize at r2
    let delta_v3 = (circular_speed(r2, mu) - vis_viva(r2, second.semi_major_axis, mu)).abs();

    BiellipticTransfer {
        delta_v1,
        delta_v2,
        delta_v3,
        total_delta_v: delta_v1 + delta_v2 + delta_v3,
        // Half of each ellipse's period: out on the first, back on the second
        transfer_time: (period(first.semi_major_axis, mu) + period(second.semi_major_axis, mu))
            / 2.0,
        transfer_orbit: first,
    }
}

// ============================================================================
// ANIMATED TRANSFER STATE
// ============================================================================

// Spacecraft state at a moment along a transfer coast, for the mission
// animation: position in the transfer plane, distance, and current speed.
#[derive(Debug, Clone, Copy)]
pub struct TransferState {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub v: f64,
    pub true_anomaly_deg: f64,
}

// Sample the spacecraft along a transfer ellipse at mission time t (seconds
// since the departure burn). Departure is at periapsis on the +x axis; the
// coast runs counter-clockwise toward apoapsis.
pub fn transfer_state(orbit: &TransferOrbit, t: f64, mu: f64) -> TransferState {
    let a = orbit.semi_major_axis;
    let e = orbit.eccentricity;

    // Mean motion n = √(μ/a³); mean anomaly grows linearly from periapsis
    let n = (mu / (a * a * a)).sqrt();
    let big_e = solve_eccentric_anomaly(n * t, e);

    let r = a * (1.0 - e * big_e.cos());
    let cos_v = (big_e.cos() - e) / (1.0 - e * big_e.cos());
    let sin_v = (1.0 - e * e).sqrt() * big_e.sin() / (1.0 - e * big_e.cos());
    let v_anomaly = sin_v.atan2(cos_v);

    TransferState {
        x: r * v_anomaly.cos(),
        y: r * v_anomaly.sin(),
        r,
        v: vis_viva(r, a, mu),
        true_anomaly_deg: v_anomaly.to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EARTH;

    const MU: f64 = EARTH.mu;

    #[test]
    fn test_leo_to_geo_reference_values() {
        // Textbook LEO (6771 km) -> GEO (42164 km): total Δv ≈ 3.85 km/s,
        // transfer time ≈ 5.25 hours
        let transfer = hohmann_transfer(6_771.0, 42_164.0, MU);
        assert!((transfer.total_delta_v - 3.85).abs() < 0.05, "Δv = {}", transfer.total_delta_v);
        let hours = transfer.transfer_time / 3_600.0;
        assert!((hours - 5.25).abs() < 0.1, "time = {} h", hours);
    }

    #[test]
    fn test_equal_radii_is_zero_delta_v() {
        let transfer = hohmann_transfer(10_000.0, 10_000.0, MU);
        assert!(transfer.total_delta_v.abs() < 1e-9);
        assert!(transfer.transfer_orbit.eccentricity.abs() < 1e-12);
    }

    #[test]
    fn test_crossover_ratio_small_favors_hohmann() {
        // r2/r1 = 5: Hohmann must be strictly cheaper than any bi-elliptic
        let r1 = 7_000.0;
        let r2 = 5.0 * r1;
        let hohmann = hohmann_transfer(r1, r2, MU);
        let bielliptic = bielliptic_transfer(r1, r2, 50.0 * r1, MU);
        assert!(hohmann.total_delta_v < bielliptic.total_delta_v);
    }

    #[test]
    fn test_crossover_ratio_large_favors_bielliptic() {
        // r2/r1 = 20: a distant intermediate apoapsis beats Hohmann
        let r1 = 7_000.0;
        let r2 = 20.0 * r1;
        let hohmann = hohmann_transfer(r1, r2, MU);
        let bielliptic = bielliptic_transfer(r1, r2, 100.0 * r1, MU);
        assert!(bielliptic.total_delta_v < hohmann.total_delta_v);
    }

    #[test]
    fn test_crossover_ratio_boundary() {
        // At r2/r1 = 11.94 the two strategies converge as the intermediate
        // apoapsis goes to infinity; at a very distant apoapsis they should
        // agree to a fraction of a percent.
        let r1 = 7_000.0;
        let r2 = 11.94 * r1;
        let hohmann = hohmann_transfer(r1, r2, MU);
        let bielliptic = bielliptic_transfer(r1, r2, 5_000.0 * r1, MU);
        let relative = (hohmann.total_delta_v - bielliptic.total_delta_v).abs()
            / hohmann.total_delta_v;
        assert!(relative < 5e-3, "relative gap at crossover: {}", relative);
    }

    #[test]
    fn test_transfer_state_endpoints() {
        let r1 = 6_771.0;
        let r2 = 384_400.0;
        let transfer = hohmann_transfer(r1, r2, MU);

        // t = 0: at periapsis, moving at the post-burn speed
        let start = transfer_state(&transfer.transfer_orbit, 0.0, MU);
        assert!((start.r - r1).abs() < 1.0);
        assert!((start.x - r1).abs() < 1.0);

        // t = transfer_time: at apoapsis on the far side
        let end = transfer_state(&transfer.transfer_orbit, transfer.transfer_time, MU);
        assert!((end.r - r2).abs() / r2 < 1e-6);
        assert!(end.x < 0.0, "apoapsis should be opposite departure");
    }

    #[test]
    fn test_transfer_state_radius_is_monotonic_outbound() {
        let transfer = hohmann_transfer(6_771.0, 42_164.0, MU);
        let mut last_r = 0.0;
        for step in 0..=50 {
            let t = transfer.transfer_time * step as f64 / 50.0;
            let state = transfer_state(&transfer.transfer_orbit, t, MU);
            assert!(state.r >= last_r - 1e-6);
            last_r = state.r;
        }
    }
}
