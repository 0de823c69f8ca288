use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use maana::constants::{self, EARTH_IN_SUN_FIELD, REFERENCE_BODIES};
use maana::scenario::{self, OrbitAssumption, OrbitalSystem, Scenario};
use maana::{PhysicalConstants, metrics, report, tui};

/// Maana - gravitational time dilation of the lokas
#[derive(Parser)]
#[command(name = "maana", about = "Infer the stars the lokas orbit from their time relation to Earth")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Gravitational constant (m^3 kg^-1 s^-2)
    #[arg(long, global = true, env = "MAANA_G", default_value_t = constants::G)]
    gravitational_constant: f64,

    /// Speed of light (m/s)
    #[arg(long, global = true, env = "MAANA_C", default_value_t = constants::C)]
    speed_of_light: f64,

    /// Reference solar mass used for classification (kg)
    #[arg(long, global = true, default_value_t = constants::MASS_OF_SUN)]
    solar_mass: f64,

    /// CSV scenario table (name,reference_time_ratio,orbital_period)
    #[arg(long, global = true)]
    scenarios: Option<PathBuf>,

    /// How the orbital radius of each loka is obtained
    #[arg(long, global = true, value_enum, default_value_t = Orbit::Kepler)]
    orbit: Orbit,
}

#[derive(Clone, Copy, ValueEnum)]
enum Orbit {
    /// Kepler's third law from the scenario's orbital period
    Kepler,
    /// One astronomical unit, regardless of period
    FixedAu,
}

#[derive(Subcommand)]
enum Commands {
    /// Print reference bodies and every scenario (default)
    Report,
    /// Print time dilation for the reference bodies only
    Bodies,
    /// Export scenario results to CSV and a chart
    Metrics {
        #[arg(long, default_value = "lokas.csv")]
        csv: PathBuf,
        #[arg(long, default_value = "lokas.png")]
        plot: PathBuf,
    },
    /// Run interactive TUI browser
    Tui {
        /// Where `e` writes the CSV export
        #[arg(long, default_value = "realtime.csv")]
        export: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let (consts, orbit) = settings(&cli);
    let scenarios = match &cli.scenarios {
        Some(path) => scenario::load_scenarios(path).with_context(|| format!("loading {}", path.display()))?,
        None => scenario::default_lokas(),
    };
    info!("G = {:e}, c = {:e}, {} scenarios", consts.g, consts.c, scenarios.len());

    match cli.command {
        Some(Commands::Report) | None => run_report(&scenarios, &consts, orbit)?,
        Some(Commands::Bodies) => run_bodies(&consts),
        Some(Commands::Metrics { csv, plot }) => run_metrics(&scenarios, &consts, orbit, &csv, &plot)?,
        Some(Commands::Tui { export }) => tui::start(scenarios, consts, orbit, export)?,
    }

    Ok(())
}

fn settings(cli: &Cli) -> (PhysicalConstants, OrbitAssumption) {
    let consts = PhysicalConstants {
        g: cli.gravitational_constant,
        c: cli.speed_of_light,
        solar_mass: cli.solar_mass,
    };
    let orbit = match cli.orbit {
        Orbit::Kepler => OrbitAssumption::Kepler,
        Orbit::FixedAu => OrbitAssumption::FixedRadius(constants::ONE_AU),
    };
    (consts, orbit)
}

fn run_bodies(consts: &PhysicalConstants) {
    for line in report::limits().into_iter().chain(report::bodies(&REFERENCE_BODIES, consts)) {
        println!(" {line}");
    }
}

fn run_report(scenarios: &[Scenario], consts: &PhysicalConstants, orbit: OrbitAssumption) -> Result<()> {
    run_bodies(consts);
    for line in report::earth_sun(&EARTH_IN_SUN_FIELD, consts)? {
        println!(" {line}");
    }

    let outcomes = scenario::run_all(scenarios, consts, orbit)?;
    for line in report::outcome_lines(&outcomes, consts, orbit) {
        println!(" {line}");
    }
    Ok(())
}

fn run_metrics(
    scenarios: &[Scenario],
    consts: &PhysicalConstants,
    orbit: OrbitAssumption,
    csv: &std::path::Path,
    plot: &std::path::Path,
) -> Result<()> {
    let systems: Vec<OrbitalSystem> = scenario::run_all(scenarios, consts, orbit)?
        .into_iter()
        .filter_map(|o| match o.result {
            Ok(sys) => Some(sys),
            Err(e) => {
                warn!("{} left out of metrics: {e}", o.scenario.name);
                None
            }
        })
        .collect();

    metrics::export_csv(csv, &systems, consts)?;
    println!("✅ Metrics written to {}", csv.display());
    metrics::plot_results(plot, &systems, consts)?;
    println!("✅ Plot saved to {}", plot.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_into_constants_and_orbit() {
        let cli = Cli::try_parse_from([
            "maana",
            "metrics",
            "--orbit",
            "fixed-au",
            "--gravitational-constant",
            "1.5e-10",
            "--csv",
            "out.csv",
        ])
        .unwrap();
        let (consts, orbit) = settings(&cli);

        assert_eq!(consts.g, 1.5e-10);
        assert_eq!(consts.solar_mass, constants::MASS_OF_SUN);
        assert_eq!(orbit, OrbitAssumption::FixedRadius(constants::ONE_AU));
        assert!(matches!(cli.command, Some(Commands::Metrics { ref csv, .. }) if csv == &PathBuf::from("out.csv")));
    }

    #[test]
    fn environment_sets_gravitational_constant() {
        // SAFETY: no other test reads or writes MAANA_G
        unsafe { std::env::set_var("MAANA_G", "2.5e-11") };
        let cli = Cli::try_parse_from(["maana", "--speed-of-light", "3e8"]);
        unsafe { std::env::remove_var("MAANA_G") };

        let (consts, orbit) = settings(&cli.unwrap());
        assert_eq!(consts.g, 2.5e-11);
        assert_eq!(consts.c, 3e8);
        assert_eq!(orbit, OrbitAssumption::Kepler);
    }

    #[test]
    fn unknown_orbit_is_rejected() {
        assert!(Cli::try_parse_from(["maana", "--orbit", "elliptic"]).is_err());
    }
}
