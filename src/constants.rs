//! Physical constants and the reference bodies the driver reports on.
//!
//! Values are the ones the loka model was tuned with (c = 2.998e8 rather than
//! the exact SI definition).

// ---------------------------------------------------------------------------
// Physical Constants (SI)
// ---------------------------------------------------------------------------
pub const G: f64 = 6.674_30e-11; // Gravitational constant (m^3 kg^-1 s^-2)
pub const C: f64 = 2.998e8; // Speed of light (m/s)

// ---------------------------------------------------------------------------
// Solar System
// ---------------------------------------------------------------------------
pub const MASS_OF_EARTH: f64 = 5.972e24; // kg
pub const RADIUS_OF_EARTH: f64 = 6_378_137.0; // m, equatorial
pub const MASS_OF_JUPITER: f64 = 1.8987e27; // kg
pub const RADIUS_OF_JUPITER: f64 = 69_911_000.0; // m
pub const MASS_OF_SUN: f64 = 1.989e30; // kg
pub const RADIUS_OF_SUN: f64 = 695_700_000.0; // m
pub const ONE_AU: f64 = 149_597_870_700.0; // m, Earth to Sun

// ---------------------------------------------------------------------------
// HD 100546 system
// ---------------------------------------------------------------------------
pub const MASS_OF_HD100546B: f64 = 25.0 * MASS_OF_JUPITER; // protoplanet
pub const RADIUS_OF_HD100546B: f64 = 482_385_900.0;
pub const MASS_OF_HD100546C: f64 = 20.0 * MASS_OF_JUPITER; // possibly a brown dwarf
pub const RADIUS_OF_HD100546C: f64 = 1.4960e10;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------
pub const MASS_LIMIT_OF_PLANET: f64 = 75.0 * MASS_OF_JUPITER; // above this fusion starts
pub const RADIUS_LIMIT_OF_HABITABLE_PLANET: f64 = 2.2 * RADIUS_OF_EARTH;
pub const MIN_RADIUS_OF_PLANET: f64 = 300.0; // smallest radius that reliably rounds out

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// G and c for one run. Built once by the driver and shared by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub g: f64,
    pub c: f64,
    /// Reference mass for classification.
    pub solar_mass: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self { g: G, c: C, solar_mass: MASS_OF_SUN }
    }
}

/// A body with known mass and radius (or orbital distance for field-at-distance entries).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBody {
    pub name: &'static str,
    pub mass: f64,
    pub radius: f64,
}

pub const REFERENCE_BODIES: [ReferenceBody; 6] = [
    ReferenceBody { name: "HD 100546 b", mass: MASS_OF_HD100546B, radius: RADIUS_OF_HD100546B },
    ReferenceBody { name: "HD 100546 c", mass: MASS_OF_HD100546C, radius: RADIUS_OF_HD100546C },
    ReferenceBody { name: "Jupiter", mass: MASS_OF_JUPITER, radius: RADIUS_OF_JUPITER },
    ReferenceBody { name: "Earth", mass: MASS_OF_EARTH, radius: RADIUS_OF_EARTH },
    ReferenceBody { name: "Sun", mass: MASS_OF_SUN, radius: RADIUS_OF_SUN },
    EARTH_IN_SUN_FIELD,
];

/// Earth sitting in the Sun's field, one AU out.
pub const EARTH_IN_SUN_FIELD: ReferenceBody =
    ReferenceBody { name: "Earth (Sun's field)", mass: MASS_OF_SUN, radius: ONE_AU };
