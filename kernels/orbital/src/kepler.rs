// Kepler's equation and the orbital-elements → Cartesian transform

// Newton-Raphson iteration budget. Ten iterations converge to machine
// precision for any e < 0.98; the early exit usually fires after 3-4.
const MAX_ITERATIONS: usize = 10;
const CONVERGENCE: f64 = 1e-8;

// Solve Kepler's equation M = E - e·sin(E) for the eccentric anomaly E
//
// Input and output in radians. Valid for elliptical orbits, 0 ≤ e < 1;
// callers are responsible for keeping e in range (the iteration diverges for
// hyperbolic orbits).
//
// Physics: the mean anomaly M grows linearly with time, but the body moves
// faster near perihelion. E is the geometric angle that bridges the two; there
// is no closed form, so we iterate.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly;
    let e = eccentricity;

    // M itself is a good starting guess for moderate eccentricity
    let mut big_e = m;
    for _ in 0..MAX_ITERATIONS {
        // f(E) = E - e·sin(E) - M, f'(E) = 1 - e·cos(E)
        let delta = (big_e - e * big_e.sin() - m) / (1.0 - e * big_e.cos());
        big_e -= delta;
        if delta.abs() < CONVERGENCE {
            break;
        }
    }
    big_e
}

// Solve Kepler's equation and convert through to the true anomaly
//
// Takes the mean anomaly in DEGREES and returns the true anomaly in DEGREES,
// matching how the catalogs store angles.
pub fn solve_kepler_equation(mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
    let e = eccentricity;
    let big_e = solve_eccentric_anomaly(mean_anomaly_deg.to_radians(), e);

    // True anomaly from eccentric anomaly via the standard atan2 form,
    // which is stable at all quadrants (unlike the half-angle tangent form)
    let cos_e = big_e.cos();
    let sin_e = big_e.sin();
    let cos_v = (cos_e - e) / (1.0 - e * cos_e);
    let sin_v = (1.0 - e * e).sqrt() * sin_e / (1.0 - e * cos_e);

    sin_v.atan2(cos_v).to_degrees()
}

// Orbital radius from the conic equation r = a(1 - e²) / (1 + e·cos ν)
#[inline]
pub fn orbital_radius(a: f64, e: f64, true_anomaly_deg: f64) -> f64 {
    a * (1.0 - e * e) / (1.0 + e * true_anomaly_deg.to_radians().cos())
}

// Project orbital elements to a heliocentric-plane (x, y) position
//
// All angles in degrees. Applies the node / argument-of-perihelion /
// inclination rotations and drops the z component: the explorer displays the
// belt face-on, so only the ecliptic-plane projection is needed.
pub fn elements_to_cartesian(
    a: f64,
    e: f64,
    inclination_deg: f64,
    node_deg: f64,
    peri_deg: f64,
    true_anomaly_deg: f64,
) -> (f64, f64) {
    let r = orbital_radius(a, e, true_anomaly_deg);

    let node = node_deg.to_radians();
    // Argument of latitude: perihelion argument plus true anomaly
    let arg = (peri_deg + true_anomaly_deg).to_radians();
    let inc = inclination_deg.to_radians();

    let (cos_node, sin_node) = (node.cos(), node.sin());
    let (cos_arg, sin_arg) = (arg.cos(), arg.sin());
    let cos_inc = inc.cos();

    let x = r * (cos_node * cos_arg - sin_node * sin_arg * cos_inc);
    let y = r * (sin_node * cos_arg + cos_node * sin_arg * cos_inc);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    // For all e in [0, 0.95] and M in [0°, 360°), the solved E must satisfy
    // M = E - e·sin(E) to within 1e-6 after the fixed iteration budget.
    #[test]
    fn test_kepler_convergence_grid() {
        for e_step in 0..=19 {
            let e = e_step as f64 * 0.05;
            for m_step in 0..360 {
                let m = (m_step as f64).to_radians();
                let big_e = solve_eccentric_anomaly(m, e);
                let residual = (big_e - e * big_e.sin() - m).abs();
                assert!(
                    residual < 1e-6,
                    "Kepler residual {:.2e} at e={}, M={}°",
                    residual,
                    e,
                    m_step
                );
            }
        }
    }

    #[test]
    fn test_circular_orbit_anomalies_coincide() {
        // For e = 0 the mean, eccentric, and true anomalies are identical
        for m in [0.0, 45.0, 90.0, 180.0, 270.0] {
            let v = solve_kepler_equation(m, 0.0);
            let expected = if m > 180.0 { m - 360.0 } else { m };
            assert!((v - expected).abs() < 1e-9, "e=0, M={}: got ν={}", m, v);
        }
    }

    #[test]
    fn test_radius_extremes() {
        let a = 2.5;
        let e = 0.3;
        // Perihelion at ν = 0, aphelion at ν = 180
        assert!((orbital_radius(a, e, 0.0) - a * (1.0 - e)).abs() < 1e-12);
        assert!((orbital_radius(a, e, 180.0) - a * (1.0 + e)).abs() < 1e-12);
    }

    #[test]
    fn test_cartesian_distance_matches_conic_radius() {
        let (a, e) = (2.7, 0.2);
        for m in [10.0, 100.0, 200.0, 300.0] {
            let v = solve_kepler_equation(m, e);
            let (x, y) = elements_to_cartesian(a, e, 0.0, 30.0, 60.0, v);
            let r = (x * x + y * y).sqrt();
            // Zero inclination: the projection preserves distance
            assert!((r - orbital_radius(a, e, v)).abs() < 1e-9);
        }
    }
}
