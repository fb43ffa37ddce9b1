// Point color model: a continuous attribute gradient blended with a
// categorical class palette at a fixed weight.

// Weight of the class color in the final blend
const CLASS_BLEND: f32 = 0.3;

// Categorical palette for the asteroid orbit classes, indexed by the numeric
// class value. Near-Earth classes read red on purpose.
const BELT_CLASS_COLORS: [[f32; 3]; 10] = [
    [0.7, 0.7, 0.65],  // main belt, neutral gray
    [0.85, 0.75, 0.5], // Hungaria, yellow
    [0.8, 0.7, 0.6],   // Phocaea
    [0.6, 0.7, 0.8],   // Hilda, blue-ish
    [0.5, 0.6, 0.85],  // Trojan, bluer
    [0.9, 0.4, 0.3],   // NEO
    [0.95, 0.3, 0.25], // Atira
    [0.9, 0.35, 0.3],  // Aten
    [0.85, 0.4, 0.35], // Apollo
    [0.8, 0.5, 0.4],   // Amor
];

// Luminosity classes: main sequence, giants, white dwarfs
const STAR_CLASS_COLORS: [[f32; 3]; 3] = [
    [0.8, 0.8, 0.85], // main sequence, near-white
    [0.9, 0.6, 0.4],  // giant, orange
    [0.7, 0.8, 1.0],  // white dwarf, pale blue
];

const FALLBACK_COLOR: [f32; 3] = [0.6, 0.6, 0.6];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Belt,
    Stars,
}

#[inline]
fn mix3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

impl Palette {
    // Continuous gradient over the normalized color attribute t in [0, 1]
    //
    // Belt: warm inner belt through neutral to the cool outer belt.
    // Stars: cool red through white to hot blue (t is normalized temperature).
    pub fn attribute_color(self, t: f32) -> [f32; 3] {
        let t = t.clamp(0.0, 1.0);
        let (low, mid, high) = match self {
            Palette::Belt => ([0.9, 0.6, 0.3], [0.7, 0.7, 0.6], [0.4, 0.5, 0.7]),
            Palette::Stars => ([1.0, 0.5, 0.3], [0.9, 0.9, 0.85], [0.6, 0.7, 1.0]),
        };
        if t < 0.5 {
            mix3(low, mid, t * 2.0)
        } else {
            mix3(mid, high, (t - 0.5) * 2.0)
        }
    }

    pub fn class_color(self, class: u8) -> [f32; 3] {
        let table: &[[f32; 3]] = match self {
            Palette::Belt => &BELT_CLASS_COLORS,
            Palette::Stars => &STAR_CLASS_COLORS,
        };
        table.get(class as usize).copied().unwrap_or(FALLBACK_COLOR)
    }

    // Final base color for a point, before the per-fragment glow terms
    #[inline]
    pub fn point_color(self, t: f32, class: u8) -> [f32; 3] {
        mix3(self.attribute_color(t), self.class_color(class), CLASS_BLEND)
    }
}
