//! Gravitational time dilation and the central bodies it implies.
//!
//! The formulas in [`relativity::general`] are pure functions over `f64`.
//! [`scenario`] chains them to back-infer the star a loka orbits from how
//! fast its time runs relative to Earth.

pub mod classify;
pub mod constants;
pub mod error;
pub mod metrics;
pub mod relativity;
pub mod report;
pub mod scenario;
pub mod tui;

pub use classify::{Category, classify_mass};
pub use constants::{PhysicalConstants, ReferenceBody};
pub use error::{DomainError, FormulaError};
pub use relativity::general::{
    direct_mass_per_radius, mass_per_radius, orbital_radius, schwarzschild_radius, time_dilation,
};
pub use scenario::{OrbitAssumption, OrbitalSystem, Scenario};
