use std::f64::consts::PI;

use crate::error::{DomainError, FormulaError, Result};

/// Gravitational time dilation: Δt = Δt' * sqrt(1 - 2GM / (r c²))
///
/// `delta_t_prime` is the interval near the body, the result is the interval
/// seen by a distant observer. At exactly the Schwarzschild radius the factor
/// is zero; inside it there is no real solution.
pub fn time_dilation(m: f64, r: f64, g: f64, c: f64, delta_t_prime: f64) -> Result<f64> {
    let arg = 1.0 - (2.0 * g * m) / (r * c * c);
    if arg < 0.0 || arg.is_nan() {
        return Err(DomainError::InsideEventHorizon { mass: m, radius: r }.into());
    }
    Ok(delta_t_prime * arg.sqrt())
}

/// Inverse of [`time_dilation`] solved for M/r:
/// M/r = (c² / 2G) * (1 - (Δt'/Δt)²)
///
/// A negative result means the observed ratio is below unity. It is returned
/// as is.
pub fn mass_per_radius(g: f64, c: f64, delta_t_prime: f64, delta_t: f64) -> Result<f64> {
    if delta_t == 0.0 {
        return Err(FormulaError::DivisionByZero { delta_t_prime });
    }
    let ratio = delta_t_prime / delta_t;
    Ok((c * c / (2.0 * g)) * (1.0 - ratio * ratio))
}

/// M/r straight from a known mass and distance.
pub fn direct_mass_per_radius(m: f64, r: f64) -> f64 {
    m / r
}

/// Circular orbit radius from Kepler's third law with M/r in place of the
/// central mass: r = sqrt(G T² (M/r) / 4π²)
pub fn orbital_radius(g: f64, period: f64, mass_per_radius: f64) -> Result<f64> {
    if period <= 0.0 || period.is_nan() {
        return Err(DomainError::NonPositivePeriod { period }.into());
    }
    if mass_per_radius < 0.0 || mass_per_radius.is_nan() {
        return Err(DomainError::NegativeMassPerRadius { mass_per_radius }.into());
    }
    Ok((g * period * period * mass_per_radius / (4.0 * PI * PI)).sqrt())
}

/// Schwarzschild radius r_s = 2GM / c²
pub fn schwarzschild_radius(g: f64, m: f64, c: f64) -> f64 {
    2.0 * g * m / (c * c)
}
