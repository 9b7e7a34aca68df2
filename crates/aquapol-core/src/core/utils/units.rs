//! Internal simulation units: daltons, Ångströms, picoseconds.
//!
//! In this system the energy unit is Da·Å²/ps² (10 J/mol) and charges are
//! scaled so that `q_a * q_b / r` is directly an energy. Model parameters
//! quoted in laboratory units (Kelvin, elementary charges) are converted once
//! at construction; everything downstream works in simulation units.

/// Boltzmann constant, simulation energy per Kelvin.
pub const BOLTZMANN: f64 = 0.831_446_261_8;

/// Coulomb constant N_A·e²/(4πε₀), simulation energy × Å per e².
const COULOMB: f64 = 1.389_354_578e5;

/// Converts a temperature-equivalent energy in Kelvin to simulation units.
#[inline]
pub fn kelvin(t: f64) -> f64 {
    t * BOLTZMANN
}

/// Converts a simulation energy back to its Kelvin equivalent.
#[inline]
pub fn to_kelvin(energy: f64) -> f64 {
    energy / BOLTZMANN
}

/// Converts a charge in elementary charge units to simulation units.
#[inline]
pub fn electron(charge: f64) -> f64 {
    charge * COULOMB.sqrt()
}
