// Type definitions for the orbital mechanics and sky-survey datasets

use serde::{Deserialize, Serialize};

// ============================================================================
// ORBIT CLASSIFICATION
// ============================================================================

// Dynamical class of a small body
//
// Physics: asteroids cluster into families by where they can survive Jupiter's
// gravitational stirring. The class drives the categorical color channel in the
// explorer and the stratified sampling weights in the belt generator.
//
// The numeric values match the precomputed JSON catalogs, which store the
// class as a small integer per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrbitClass {
    // Main Belt Asteroid: the 2.1-3.3 AU bulk population
    Mba = 0,
    // Hungarias: inner edge of the belt, high inclination
    Hungaria = 1,
    // Phocaeas (present in real catalogs; the generator does not sample them)
    Phocaea = 2,
    // Hildas: locked in the 3:2 resonance with Jupiter, a ≈ 3.97 AU
    Hilda = 3,
    // Jupiter Trojans: share Jupiter's orbit at the L4/L5 points
    Trojan = 4,
    // Near-Earth Object (generic)
    Neo = 5,
    // Interior to Earth's orbit
    Atira = 6,
    // Earth-crossing, a < 1 AU
    Aten = 7,
    // Earth-crossing, a > 1 AU
    Apollo = 8,
    // Mars-crossing, approaching Earth
    Amor = 9,
}

impl From<OrbitClass> for u8 {
    fn from(class: OrbitClass) -> u8 {
        class as u8
    }
}

impl TryFrom<u8> for OrbitClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Mba),
            1 => Ok(Self::Hungaria),
            2 => Ok(Self::Phocaea),
            3 => Ok(Self::Hilda),
            4 => Ok(Self::Trojan),
            5 => Ok(Self::Neo),
            6 => Ok(Self::Atira),
            7 => Ok(Self::Aten),
            8 => Ok(Self::Apollo),
            9 => Ok(Self::Amor),
            other => Err(format!("unknown orbit class: {}", other)),
        }
    }
}

// ============================================================================
// ASTEROID RECORD
// ============================================================================

// One asteroid: osculating elements plus the precomputed heliocentric position
//
// The (x, y) position is the ecliptic-plane projection at the catalog epoch,
// computed from the elements by the Kepler solver. Storing it in the record
// means the renderer never has to re-solve Kepler's equation per frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    // Semi-major axis in AU
    pub a: f64,
    // Eccentricity (0 = circle, approaching 1 = highly elongated)
    pub e: f64,
    // Inclination in degrees
    pub i: f64,
    // Longitude of ascending node in degrees
    pub node: f64,
    // Argument of perihelion in degrees
    pub peri: f64,
    // Mean anomaly at epoch in degrees
    #[serde(rename = "M")]
    pub mean_anomaly: f64,
    // Heliocentric x position in AU
    pub x: f64,
    // Heliocentric y position in AU
    pub y: f64,
    // Dynamical classification
    pub class: OrbitClass,
    // Absolute magnitude (brightness/size proxy, roughly 10-22)
    #[serde(rename = "H")]
    pub h: f64,
}

// ============================================================================
// STAR RECORD
// ============================================================================

// Luminosity class of a synthetic star, used for the categorical color channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StarClass {
    MainSequence = 0,
    Giant = 1,
    WhiteDwarf = 2,
}

impl From<StarClass> for u8 {
    fn from(class: StarClass) -> u8 {
        class as u8
    }
}

impl TryFrom<u8> for StarClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::MainSequence),
            1 => Ok(Self::Giant),
            2 => Ok(Self::WhiteDwarf),
            other => Err(format!("unknown star class: {}", other)),
        }
    }
}

// One star: a sky position plus the two physical quantities that place it on
// the HR diagram. The HR layout is derived, not stored (see `stars`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    // Sky position in normalized device coordinates [-1, 1]
    pub sky_x: f64,
    pub sky_y: f64,
    // Effective temperature in Kelvin (drives point color)
    pub temperature: f64,
    // Absolute magnitude (drives point size; smaller = brighter)
    pub abs_mag: f64,
    pub class: StarClass,
}

// ============================================================================
// RESONANCE GAPS
// ============================================================================

// A Kirkwood gap: a semi-major-axis interval depleted by resonance with Jupiter
#[derive(Debug, Clone, Copy)]
pub struct KirkwoodGap {
    // Gap center in AU
    pub a: f64,
    // Resonance ratio label (asteroid orbits : Jupiter orbits)
    pub ratio: &'static str,
    // Half-width of the depleted interval in AU
    pub half_width: f64,
}

// The documented gaps, strongest first by visual prominence. The 3:1 gap is
// the deepest and feeds much of the near-Earth population.
pub const KIRKWOOD_GAPS: [KirkwoodGap; 5] = [
    KirkwoodGap { a: 2.065, ratio: "4:1", half_width: 0.015 },
    KirkwoodGap { a: 2.502, ratio: "3:1", half_width: 0.02 },
    KirkwoodGap { a: 2.825, ratio: "5:2", half_width: 0.015 },
    KirkwoodGap { a: 2.958, ratio: "7:3", half_width: 0.01 },
    KirkwoodGap { a: 3.279, ratio: "2:1", half_width: 0.025 },
];

// ============================================================================
// PLANETS
// ============================================================================

// A planet as the explorer draws it: orbit radius, a fixed display position at
// the catalog epoch, and an RGBA orbit-ring color.
#[derive(Debug, Clone, Copy)]
pub struct Planet {
    pub name: &'static str,
    // Semi-major axis in AU (orbits drawn as circles at this radius)
    pub a: f64,
    // Position at epoch, in AU
    pub x: f64,
    pub y: f64,
    pub color: [f32; 4],
}

pub const PLANET_ORBITS: [Planet; 5] = [
    Planet { name: "Mercury", a: 0.387, x: 0.35, y: 0.15, color: [0.5, 0.5, 0.5, 0.15] },
    Planet { name: "Venus", a: 0.723, x: -0.51, y: 0.52, color: [0.6, 0.5, 0.4, 0.15] },
    Planet { name: "Earth", a: 1.000, x: -0.17, y: 0.98, color: [0.3, 0.5, 0.8, 0.25] },
    Planet { name: "Mars", a: 1.524, x: 1.38, y: -0.64, color: [0.8, 0.4, 0.3, 0.20] },
    Planet { name: "Jupiter", a: 5.203, x: 4.95, y: 1.61, color: [0.7, 0.6, 0.5, 0.30] },
];

// ============================================================================
// CENTRAL BODIES
// ============================================================================

// A gravitating central body for the transfer designer
//
// Units: km and km³/s², so delta-v comes out in km/s and times in seconds.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub name: &'static str,
    // Standard gravitational parameter μ = GM in km³/s²
    pub mu: f64,
    // Mean radius in km
    pub radius: f64,
    // Orbit radius around its primary in km, where meaningful
    pub orbit_radius: Option<f64>,
}

pub const EARTH: Body = Body {
    name: "Earth",
    mu: 398_600.4418,
    radius: 6_371.0,
    orbit_radius: Some(149_598_023.0),
};

pub const MOON: Body = Body {
    name: "Moon",
    mu: 4_902.8,
    radius: 1_737.4,
    orbit_radius: Some(384_400.0),
};

pub const SUN: Body = Body {
    name: "Sun",
    mu: 1.327_124_400_18e11,
    radius: 695_700.0,
    orbit_radius: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_class_roundtrip() {
        for value in 0u8..=9 {
            let class = OrbitClass::try_from(value).unwrap();
            assert_eq!(u8::from(class), value);
        }
        assert!(OrbitClass::try_from(10).is_err());
    }

    #[test]
    fn test_gaps_are_ordered_and_disjoint() {
        for pair in KIRKWOOD_GAPS.windows(2) {
            assert!(pair[0].a + pair[0].half_width < pair[1].a - pair[1].half_width);
        }
    }
}
