use super::damping;

/// Exponential-6 dispersion/repulsion in the oxygen-oxygen separation.
///
/// Callers are responsible for rejecting hard-core separations first; below
/// the core the exponential term dominates and the value is meaningless.
#[inline]
pub fn exp_6(dist: f64, sigma: f64, well_depth: f64, gamma: f64) -> f64 {
    let r_over_sigma = dist / sigma;
    let sigma2_over_r2 = 1.0 / (r_over_sigma * r_over_sigma);
    let six_over_gamma = 6.0 / gamma;

    well_depth / (1.0 - six_over_gamma)
        * (six_over_gamma * (gamma * (1.0 - r_over_sigma)).exp()
            - sigma2_over_r2 * sigma2_over_r2 * sigma2_over_r2)
}

/// Damped point-charge Coulomb term between two smeared charge sites.
/// `width_sq_sum` is the combined squared smearing width of the pair.
#[inline]
pub fn screened_coulomb(dist: f64, q1: f64, q2: f64, width_sq_sum: f64) -> f64 {
    q1 * q2 / dist * damping::charge_screening(dist, width_sq_sum)
}
