//! Loka scenarios: back-infer the body a hypothetical world orbits from how
//! fast its time runs compared to Earth.
//!
//! Each scenario runs the same chain: observed ratio → M/r → orbital radius →
//! central mass → Schwarzschild radius → category.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::{Category, classify_mass};
use crate::constants::{EARTH_IN_SUN_FIELD, PhysicalConstants, SECONDS_PER_DAY};
use crate::error::Result;
use crate::relativity::general::{mass_per_radius, orbital_radius, schwarzschild_radius, time_dilation};

/// A loka year is 360 of its days.
pub const LOKA_YEAR: f64 = 360.0 * SECONDS_PER_DAY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Earth seconds that pass during one second of the loka.
    pub reference_time_ratio: f64,
    /// Orbital period of the loka around its central body, seconds.
    pub orbital_period: f64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, reference_time_ratio: f64, orbital_period: f64) -> Self {
        Self { name: name.into(), reference_time_ratio, orbital_period }
    }
}

/// The four lokas and their time relation to Earth (Manushya).
pub fn default_lokas() -> Vec<Scenario> {
    vec![
        Scenario::new("Satya-loka", 3.1104e12, LOKA_YEAR),
        Scenario::new("Manu-loka", 3_067_200.0, LOKA_YEAR),
        Scenario::new("Deva-loka", 360.0, LOKA_YEAR),
        Scenario::new("Pitru-loka", 30.0, LOKA_YEAR),
    ]
}

/// How the orbital radius of a loka is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OrbitAssumption {
    /// Kepler's third law from the scenario's orbital period.
    #[default]
    Kepler,
    /// Fixed orbital radius, ignoring the period.
    FixedRadius(f64),
}

/// Everything inferred about one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalSystem {
    pub name: String,
    pub reference_time_ratio: f64,
    /// Earth-observed interval for one loka second.
    pub delta_t: f64,
    pub mass_per_radius: f64,
    pub orbital_radius: f64,
    pub inferred_mass: f64,
    pub schwarzschild_radius: f64,
    pub category: Category,
}

impl OrbitalSystem {
    pub fn solar_masses(&self, consts: &PhysicalConstants) -> f64 {
        self.inferred_mass / consts.solar_mass
    }
}

/// Dilation of one Earth second in the Sun's field. Loka ratios are relative
/// to this clock.
pub fn earth_sun_factor(consts: &PhysicalConstants) -> Result<f64> {
    time_dilation(EARTH_IN_SUN_FIELD.mass, EARTH_IN_SUN_FIELD.radius, consts.g, consts.c, 1.0)
}

/// Run the inference chain for one scenario.
pub fn infer(
    scenario: &Scenario,
    consts: &PhysicalConstants,
    reference_factor: f64,
    orbit: OrbitAssumption,
) -> Result<OrbitalSystem> {
    let delta_t = reference_factor * scenario.reference_time_ratio;
    let mpr = mass_per_radius(consts.g, consts.c, 1.0, delta_t)?;
    let r_orbit = match orbit {
        OrbitAssumption::Kepler => orbital_radius(consts.g, scenario.orbital_period, mpr)?,
        OrbitAssumption::FixedRadius(r) => r,
    };
    let inferred_mass = mpr * r_orbit;
    let rs = schwarzschild_radius(consts.g, inferred_mass, consts.c);

    Ok(OrbitalSystem {
        name: scenario.name.clone(),
        reference_time_ratio: scenario.reference_time_ratio,
        delta_t,
        mass_per_radius: mpr,
        orbital_radius: r_orbit,
        inferred_mass,
        schwarzschild_radius: rs,
        category: classify_mass(inferred_mass, consts.solar_mass),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub scenario: Scenario,
    pub result: Result<OrbitalSystem>,
}

/// Run every scenario. A failing scenario does not stop the others.
pub fn run_all(
    scenarios: &[Scenario],
    consts: &PhysicalConstants,
    orbit: OrbitAssumption,
) -> Result<Vec<Outcome>> {
    let reference_factor = earth_sun_factor(consts)?;
    debug!("earth-sun dilation factor {reference_factor:.12}");

    let outcomes = scenarios
        .iter()
        .map(|scenario| {
            let result = infer(scenario, consts, reference_factor, orbit);
            match &result {
                Ok(sys) => {
                    debug!(
                        "{}: delta_t={:e} M/r={:e} r={:e} M={:e} rs={:e}",
                        sys.name, sys.delta_t, sys.mass_per_radius, sys.orbital_radius, sys.inferred_mass, sys.schwarzschild_radius
                    );
                    if sys.mass_per_radius < 0.0 {
                        warn!("{}: negative mass per radius {:e}, ratio below unity", sys.name, sys.mass_per_radius);
                    }
                    if sys.inferred_mass < 0.0 {
                        warn!("{}: negative inferred mass {:e}", sys.name, sys.inferred_mass);
                    }
                }
                Err(e) => warn!("{}: {e}", scenario.name),
            }
            Outcome { scenario: scenario.clone(), result }
        })
        .collect();

    Ok(outcomes)
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot open scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scenario table: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario table is empty")]
    Empty,
}

/// Read scenarios from CSV with header `name,reference_time_ratio,orbital_period`.
pub fn read_scenarios<R: Read>(reader: R) -> std::result::Result<Vec<Scenario>, ScenarioError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let scenarios = rdr.deserialize().collect::<std::result::Result<Vec<Scenario>, _>>()?;
    if scenarios.is_empty() {
        return Err(ScenarioError::Empty);
    }
    Ok(scenarios)
}

pub fn load_scenarios(path: &Path) -> std::result::Result<Vec<Scenario>, ScenarioError> {
    let file = File::open(path).map_err(|source| ScenarioError::Io { path: path.to_path_buf(), source })?;
    read_scenarios(file)
}
