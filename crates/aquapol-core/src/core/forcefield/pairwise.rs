use super::params::GcpmParams;
use super::potentials;
use super::term::EnergyTerm;
use crate::core::models::molecule::WaterMolecule;

/// The pairwise-additive part of the potential for one unordered molecule
/// pair: exponential-6 dispersion in the O-O separation plus the damped
/// fixed-charge Coulomb sum over all cross pairs of charged sites.
///
/// An O-O separation at or inside the hard core yields an infinite
/// dispersion component and skips the Coulomb sum; the core check also
/// guarantees no site-site distance below gets pathologically small, so the
/// Coulomb terms are not individually re-checked.
pub fn pair_energy(params: &GcpmParams, a: &WaterMolecule, b: &WaterMolecule) -> EnergyTerm {
    let r2 = (a.oxygen.position - b.oxygen.position).norm_squared();
    if r2 <= params.core {
        return EnergyTerm::new(f64::INFINITY, 0.0, 0.0);
    }

    let dispersion = potentials::exp_6(r2.sqrt(), params.sigma, params.epsilon, params.gamma);

    let mut electrostatic = 0.0;
    for site_a in a.charged_sites() {
        for site_b in b.charged_sites() {
            let dist = (site_a.position - site_b.position).norm();
            electrostatic += potentials::screened_coulomb(
                dist,
                site_a.charge,
                site_b.charge,
                params.charge_width_sq(site_a.kind, site_b.kind),
            );
        }
    }

    EnergyTerm::new(dispersion, electrostatic, 0.0)
}
