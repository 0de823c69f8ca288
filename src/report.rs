//! Console report lines. Values are shown fixed-point and in scientific
//! notation with two decimals.

use crate::constants::{
    MASS_LIMIT_OF_PLANET, MIN_RADIUS_OF_PLANET, PhysicalConstants, RADIUS_LIMIT_OF_HABITABLE_PLANET,
    ReferenceBody,
};
use crate::error::Result;
use crate::relativity::general::{direct_mass_per_radius, time_dilation};
use crate::scenario::{OrbitAssumption, Outcome};

/// `value` as `fixed = sci`, e.g. `1234.50 = 1.23e3`.
pub fn dual(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$} = {value:.2e}")
}

pub fn limits() -> Vec<String> {
    vec![
        format!("Mass limit of a planet before it turns into a star = {} kg", dual(MASS_LIMIT_OF_PLANET, 6)),
        format!("Radius limit of a habitable planet = {} m", dual(RADIUS_LIMIT_OF_HABITABLE_PLANET, 6)),
        format!("Smallest radius of a rounded planet = {} m", dual(MIN_RADIUS_OF_PLANET, 1)),
    ]
}

/// One line per body: how long a local second lasts for a distant observer.
pub fn bodies(bodies: &[ReferenceBody], consts: &PhysicalConstants) -> Vec<String> {
    bodies
        .iter()
        .map(|body| match time_dilation(body.mass, body.radius, consts.g, consts.c, 1.0) {
            Ok(dt) => format!("A second in outer space is {dt:.12} s on {}", body.name),
            Err(e) => format!("{}: {e}", body.name),
        })
        .collect()
}

/// The Earth-Sun clock the loka ratios are measured against.
pub fn earth_sun(body: &ReferenceBody, consts: &PhysicalConstants) -> Result<Vec<String>> {
    let dt = time_dilation(body.mass, body.radius, consts.g, consts.c, 1.0)?;
    let ratio = direct_mass_per_radius(body.mass, body.radius);
    Ok(vec![
        format!("A second in outer space is {dt:.12} s on {}", body.name),
        format!("Mass / radius for {} = {} kg/m", body.name, dual(ratio, 6)),
    ])
}

pub fn outcome_lines(outcomes: &[Outcome], consts: &PhysicalConstants, orbit: OrbitAssumption) -> Vec<String> {
    let mut lines = Vec::new();
    for outcome in outcomes {
        let name = &outcome.scenario.name;
        match &outcome.result {
            Ok(sys) => {
                lines.push(format!("Mass / radius of {name} = {} kg/m", dual(sys.mass_per_radius, 6)));
                let orbit_note = match orbit {
                    OrbitAssumption::Kepler => {
                        format!("period {} s", dual(outcome.scenario.orbital_period, 1))
                    }
                    OrbitAssumption::FixedRadius(_) => "fixed radius".to_string(),
                };
                lines.push(format!("Orbital radius of {name} ({orbit_note}) = {} m", dual(sys.orbital_radius, 6)));
                lines.push(format!(
                    "Mass of the star {name} revolves around = {} kg ({:.3e} solar masses)",
                    dual(sys.inferred_mass, 12),
                    sys.solar_masses(consts)
                ));
                lines.push(format!("Schwarzschild radius of that star = {} m", dual(sys.schwarzschild_radius, 6)));
                lines.push(format!("Star is a {}", sys.category));
            }
            Err(e) => lines.push(format!("{name}: skipped, {e}")),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_IN_SUN_FIELD, REFERENCE_BODIES};
    use crate::scenario::{Scenario, run_all};

    #[test]
    fn dual_formatting() {
        assert_eq!(dual(1234.5, 2), "1234.50 = 1.23e3");
        assert_eq!(dual(0.5, 6), "0.500000 = 5.00e-1");
    }

    #[test]
    fn body_table_has_one_line_each() {
        let lines = bodies(&REFERENCE_BODIES, &PhysicalConstants::default());
        assert_eq!(lines.len(), REFERENCE_BODIES.len());
        assert!(lines[3].ends_with("s on Earth"));
        assert!(lines[3].starts_with("A second in outer space is 0.99999999"));
    }

    #[test]
    fn collapsed_body_reports_error_inline() {
        let dense = ReferenceBody { name: "dense", mass: 1.989e30, radius: 1.0 };
        let lines = bodies(&[dense], &PhysicalConstants::default());
        assert!(lines[0].starts_with("dense: domain error"));
    }

    #[test]
    fn earth_sun_lines() {
        let lines = earth_sun(&EARTH_IN_SUN_FIELD, &PhysicalConstants::default()).unwrap();
        assert_eq!(lines[0], "A second in outer space is 0.999999990127 s on Earth (Sun's field)");
        assert!(lines[1].ends_with("= 1.33e19 kg/m"));
    }

    #[test]
    fn scenario_block_ends_with_category() {
        let consts = PhysicalConstants::default();
        let scenarios = vec![Scenario::new("Deva-loka", 360.0, 31_104_000.0), Scenario::new("broken", 360.0, -1.0)];
        let outcomes = run_all(&scenarios, &consts, OrbitAssumption::Kepler).unwrap();
        let lines = outcome_lines(&outcomes, &consts, OrbitAssumption::Kepler);

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], "Star is a Micro black hole");
        assert!(lines[5].starts_with("broken: skipped, domain error: orbital period"));
    }
}
