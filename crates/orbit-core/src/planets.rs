//! Per-planet surface styles.
//!
//! Planet surfaces are shaded procedurally from a three-color palette and a
//! noise seed, so the scene ships without texture assets.

use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetStyle {
    pub name: &'static str,
    pub base: [f32; 3],
    pub accent: [f32; 3],
    pub highlight: [f32; 3],
    /// Offset into the surface noise field, in noise-space units.
    pub seed: f32,
    /// Latitude banding strength in \[0, 1\].
    pub banding: f32,
}

// (name, base, accent, highlight, banding)
const PALETTES: [(&str, [f32; 3], [f32; 3], [f32; 3], f32); 4] = [
    ("earth", [0.05, 0.18, 0.45], [0.16, 0.40, 0.14], [0.92, 0.94, 0.96], 0.1),
    ("venus", [0.72, 0.52, 0.26], [0.88, 0.74, 0.48], [0.97, 0.90, 0.72], 0.7),
    ("volcanic", [0.10, 0.07, 0.06], [0.32, 0.12, 0.06], [1.00, 0.42, 0.08], 0.2),
    ("csilla", [0.62, 0.72, 0.82], [0.34, 0.46, 0.62], [0.95, 0.97, 1.00], 0.5),
];

/// Styles for `count` planets, cycling through the built-in palettes. Noise
/// seeds are drawn from an RNG seeded with `seed`, so layouts are repeatable.
pub fn planet_styles(count: usize, seed: u64) -> Vec<PlanetStyle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let (name, base, accent, highlight, banding) = PALETTES[i % PALETTES.len()];
            PlanetStyle {
                name,
                base,
                accent,
                highlight,
                seed: rng.gen_range(0.0..100.0),
                banding,
            }
        })
        .collect()
}
