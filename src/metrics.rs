use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use serde::Serialize;

use crate::constants::PhysicalConstants;
use crate::scenario::OrbitalSystem;

#[derive(Debug, Serialize)]
struct Row<'a> {
    name: &'a str,
    reference_time_ratio: f64,
    delta_t: f64,
    mass_per_radius: f64,
    orbital_radius: f64,
    inferred_mass: f64,
    solar_masses: f64,
    schwarzschild_radius: f64,
    category: &'static str,
}

pub fn write_csv<W: Write>(writer: W, systems: &[OrbitalSystem], consts: &PhysicalConstants) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for sys in systems {
        wtr.serialize(Row {
            name: &sys.name,
            reference_time_ratio: sys.reference_time_ratio,
            delta_t: sys.delta_t,
            mass_per_radius: sys.mass_per_radius,
            orbital_radius: sys.orbital_radius,
            inferred_mass: sys.inferred_mass,
            solar_masses: sys.solar_masses(consts),
            schwarzschild_radius: sys.schwarzschild_radius,
            category: sys.category.label(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_csv(path: &Path, systems: &[OrbitalSystem], consts: &PhysicalConstants) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, systems, consts)
}

/// Lower edges of the classification windows, in solar masses.
const THRESHOLDS: [(f64, &str); 5] = [
    (1e11, "ultramassive limit"),
    (1e9, "ultramassive"),
    (1e6, "supermassive"),
    (1e2, "intermediate-mass"),
    (2.0, "stellar"),
];

/// Inferred central mass per scenario (log10 solar masses) against the
/// classification thresholds.
pub fn plot_results(path: &Path, systems: &[OrbitalSystem], consts: &PhysicalConstants) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let points: Vec<(f64, f64)> = systems
        .iter()
        .enumerate()
        .filter(|(_, s)| s.inferred_mass > 0.0)
        .map(|(i, s)| (i as f64, s.solar_masses(consts).log10()))
        .collect();

    let y_max = points.iter().map(|p| p.1).fold(12.0, f64::max).ceil() + 1.0;
    let x_max = systems.len().max(1) as f64;
    let names: Vec<&str> = systems.iter().map(|s| s.name.as_str()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Central mass of each loka", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..x_max - 0.5, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_labels(systems.len().max(1))
        .x_label_formatter(&|x| {
            let i = x.round();
            if i >= 0.0 && (i as usize) < names.len() { names[i as usize].to_string() } else { String::new() }
        })
        .x_desc("Scenario")
        .y_desc("log10(M / M_sun)")
        .draw()?;

    for (solar, label) in THRESHOLDS {
        let y = solar.log10();
        chart
            .draw_series(LineSeries::new(vec![(-0.5, y), (x_max - 0.5, y)], &BLACK.mix(0.3)))?
            .label(label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLACK.mix(0.3)));
    }

    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 6, RED.filled())))?
        .label("inferred mass")
        .legend(|(x, y)| Circle::new((x + 5, y), 4, RED.filled()));

    chart.configure_series_labels().border_style(&BLACK).background_style(&WHITE.mix(0.8)).draw()?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{OrbitAssumption, default_lokas, run_all};

    #[test]
    fn csv_has_header_and_one_row_per_system() {
        let consts = PhysicalConstants::default();
        let systems: Vec<OrbitalSystem> = run_all(&default_lokas(), &consts, OrbitAssumption::Kepler)
            .unwrap()
            .into_iter()
            .filter_map(|o| o.result.ok())
            .collect();

        let mut buf = Vec::new();
        write_csv(&mut buf, &systems, &consts).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "name,reference_time_ratio,delta_t,mass_per_radius,orbital_radius,inferred_mass,solar_masses,schwarzschild_radius,category"
        );
        assert_eq!(lines.len(), 5);
        assert!(lines[3].starts_with("Deva-loka,360.0,"));
        assert!(lines[3].ends_with(",Micro black hole"));
    }

    #[test]
    fn plot_renders_png_with_thresholds() {
        let consts = PhysicalConstants::default();
        let mut systems: Vec<OrbitalSystem> = run_all(&default_lokas(), &consts, OrbitAssumption::Kepler)
            .unwrap()
            .into_iter()
            .filter_map(|o| o.result.ok())
            .collect();
        // non-positive masses are left off the log axis
        let mut empty = systems[0].clone();
        empty.name = "empty".to_string();
        empty.inferred_mass = 0.0;
        systems.push(empty);

        let path = std::env::temp_dir().join(format!("maana_plot_{}.png", std::process::id()));
        plot_results(&path, &systems, &consts).unwrap();

        let size = std::fs::metadata(&path).unwrap().len();
        std::fs::remove_file(&path).unwrap();
        assert!(size > 0);
    }
}
