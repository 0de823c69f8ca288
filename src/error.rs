use thiserror::Error;

/// Result type for the formula library
pub type Result<T> = std::result::Result<T, FormulaError>;

/// Failures of the closed-form formulas. Every variant carries the inputs that
/// violated the precondition.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FormulaError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("division by zero: reference interval delta_t is zero (delta_t_prime = {delta_t_prime:e} s)")]
    DivisionByZero { delta_t_prime: f64 },
}

/// Square-root argument outside the real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("body is denser than its own event horizon (M = {mass:e} kg, r = {radius:e} m)")]
    InsideEventHorizon { mass: f64, radius: f64 },

    #[error("mass per radius must be non-negative for a real orbit, got {mass_per_radius:e} kg/m")]
    NegativeMassPerRadius { mass_per_radius: f64 },

    #[error("orbital period must be positive, got {period:e} s")]
    NonPositivePeriod { period: f64 },
}
