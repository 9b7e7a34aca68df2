//! Short-range screening of Coulomb kernels between Gaussian-smeared
//! charges.
//!
//! Every profile tends to 1 at long range (recovering the bare point-charge
//! kernel) and to 0 as `r → 0` (suppressing the divergence between nearby
//! sites). Width arguments are combined squared smearing widths σ_a² + σ_b²
//! of the two interacting Gaussians.

use libm::erf;
use std::f64::consts::{PI, SQRT_2};

/// Screening factor for a bare `q_a·q_b/r` charge-charge term.
#[inline]
pub fn charge_screening(r: f64, width_sq_sum: f64) -> f64 {
    erf(r / (2.0 * width_sq_sum).sqrt())
}

/// Screening factor for the `1/r³` field of a smeared charge at an
/// induction center.
#[inline]
pub fn field_screening(r: f64, width_sq_sum: f64) -> f64 {
    let gaussian = (-r * r / (2.0 * width_sq_sum)).exp();
    erf(r / (2.0 * width_sq_sum).sqrt()) - SQRT_2 * r / (PI * width_sq_sum).sqrt() * gaussian
}

/// Profile scaling the `3·(Δr⊗Δr)/r⁵` part of the dipole-dipole tensor.
/// `sigma` is the induction-center smearing width.
#[inline]
pub fn dipole_screening_f(r: f64, sigma: f64) -> f64 {
    let gaussian = (-r * r / (4.0 * sigma * sigma)).exp();
    erf(r / (2.0 * sigma))
        - (r / (sigma * PI.sqrt()) + r * r * r / (6.0 * PI.sqrt() * sigma * sigma * sigma))
            * gaussian
}

/// Profile scaling the `I/r³` part of the dipole-dipole tensor.
#[inline]
pub fn dipole_screening_g(r: f64, sigma: f64) -> f64 {
    let gaussian = (-r * r / (4.0 * sigma * sigma)).exp();
    erf(r / (2.0 * sigma)) - r / (sigma * PI.sqrt()) * gaussian
}
