use super::damping;
use super::params::GcpmParams;
use super::workspace::ClusterBuffers;
use crate::core::models::molecule::WaterMolecule;
use nalgebra::{Matrix3, Vector3};

/// The damped dipole-dipole interaction tensor between two induction
/// centers separated by `rij`:
/// `T = (3·f(r)/r² · (Δr⊗Δr) − g(r)·I) / r³`.
///
/// Even in `Δr`, so `T_ij = T_ji` and the blocks satisfy `T_ji = T_ijᵀ`.
pub(crate) fn dipole_tensor(params: &GcpmParams, rij: &Vector3<f64>) -> Matrix3<f64> {
    let r = rij.norm();
    let f = damping::dipole_screening_f(r, params.sigma_m);
    let g = damping::dipole_screening_g(r, params.sigma_m);

    let outer = rij * rij.transpose();
    (outer * (3.0 * f / (r * r)) - Matrix3::identity() * g) / (r * r * r)
}

/// Builds the static field at every induction center and writes the
/// `−α·T_ij` coupling blocks for every unordered pair.
///
/// Expects freshly reset buffers (zero field, identity coupling). Returns
/// `false` when an O-O pair violates the hard core, in which case the
/// assembly is abandoned and no solve should run; the full-energy path never
/// reaches this because the pairwise term short-circuits first.
pub(crate) fn assemble(
    params: &GcpmParams,
    molecules: &[WaterMolecule],
    buffers: &mut ClusterBuffers,
) -> bool {
    buffers
        .centers
        .extend(molecules.iter().map(WaterMolecule::center_of_mass));

    for i in 0..molecules.len() {
        let center_i = buffers.centers[i];

        for (j, other) in molecules.iter().enumerate() {
            if i == j {
                continue;
            }

            // Field at i's induction center from j's permanent charges. The
            // H and M contributions largely cancel at long range, which
            // costs a couple of digits of precision.
            for site in other.charged_sites() {
                let dr = center_i - site.position;
                let dist = dr.norm();
                let fac = site.charge / (dist * dist * dist)
                    * damping::field_screening(dist, params.field_width_sq(site.kind));
                let contribution = dr * fac;
                let mut row = buffers.field.fixed_rows_mut::<3>(3 * i);
                row += contribution;
            }

            if i < j {
                let oo = (molecules[i].oxygen.position - other.oxygen.position).norm_squared();
                if oo < params.core {
                    return false;
                }

                let scaled = dipole_tensor(params, &(buffers.centers[j] - center_i)) * params.alpha;
                buffers
                    .coupling
                    .fixed_view_mut::<3, 3>(3 * i, 3 * j)
                    .copy_from(&(-scaled));
                buffers
                    .coupling
                    .fixed_view_mut::<3, 3>(3 * j, 3 * i)
                    .copy_from(&(-scaled.transpose()));
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::workspace::InductionWorkspace;
    use crate::core::models::molecule::WaterGeometry;
    use nalgebra::{Point3, Rotation3};

    const TOLERANCE: f64 = 1e-12;

    fn gcpm_water(index: usize, oxygen: Point3<f64>) -> WaterMolecule {
        let params = GcpmParams::gcpm();
        WaterGeometry::gcpm().place(
            index,
            oxygen,
            Rotation3::identity(),
            params.charge_h,
            params.charge_m,
        )
    }

    #[test]
    fn dipole_tensor_is_symmetric() {
        let params = GcpmParams::gcpm();
        let tensor = dipole_tensor(&params, &Vector3::new(1.2, -0.7, 2.9));
        assert!((tensor - tensor.transpose()).norm() < TOLERANCE);
    }

    #[test]
    fn dipole_tensor_blocks_satisfy_the_transpose_relation() {
        let params = GcpmParams::gcpm();
        let rij = Vector3::new(-2.0, 0.4, 1.3);
        let forward = dipole_tensor(&params, &rij);
        let backward = dipole_tensor(&params, &(-rij));
        assert!((forward - backward.transpose()).norm() < TOLERANCE);
    }

    #[test]
    fn dipole_tensor_is_traceless_at_long_range() {
        // With f = g = 1 the bare dipole tensor has zero trace.
        let params = GcpmParams::gcpm();
        let tensor = dipole_tensor(&params, &Vector3::new(30.0, 10.0, -20.0));
        assert!(tensor.trace().abs() < TOLERANCE);
    }

    #[test]
    fn assemble_leaves_a_single_molecule_with_zero_field() {
        let params = GcpmParams::gcpm();
        let molecules = [gcpm_water(0, Point3::origin())];
        let mut workspace = InductionWorkspace::new();
        let buffers = workspace.acquire(1);
        assert!(assemble(&params, &molecules, buffers));
        assert_eq!(buffers.field.norm(), 0.0);
    }

    #[test]
    fn assemble_builds_equal_and_opposite_fields_for_a_mirrored_pair() {
        let params = GcpmParams::gcpm();
        // Both molecules upright and stacked along z: the geometry seen by
        // each center is the other's mirror through the midplane, so the
        // in-plane field components vanish and the z components need not.
        let molecules = [
            gcpm_water(0, Point3::origin()),
            gcpm_water(1, Point3::new(0.0, 0.0, 3.0)),
        ];
        let mut workspace = InductionWorkspace::new();
        let buffers = workspace.acquire(2);
        assert!(assemble(&params, &molecules, buffers));

        for i in 0..2 {
            assert!(buffers.field[3 * i].abs() < TOLERANCE);
            assert!(buffers.field[3 * i + 1].abs() < TOLERANCE);
        }
        assert!(buffers.field[2].abs() > 0.0);
    }

    #[test]
    fn assemble_writes_transposed_coupling_blocks() {
        let params = GcpmParams::gcpm();
        let molecules = [
            gcpm_water(0, Point3::origin()),
            gcpm_water(1, Point3::new(2.6, 1.1, 1.8)),
        ];
        let mut workspace = InductionWorkspace::new();
        let buffers = workspace.acquire(2);
        assert!(assemble(&params, &molecules, buffers));

        let upper = buffers.coupling.fixed_view::<3, 3>(0, 3).clone_owned();
        let lower = buffers.coupling.fixed_view::<3, 3>(3, 0).clone_owned();
        assert!((upper - lower.transpose()).norm() < TOLERANCE);
        assert!(upper.norm() > 0.0);
    }

    #[test]
    fn assemble_keeps_identity_diagonal_blocks() {
        let params = GcpmParams::gcpm();
        let molecules = [
            gcpm_water(0, Point3::origin()),
            gcpm_water(1, Point3::new(0.0, 3.2, 0.0)),
        ];
        let mut workspace = InductionWorkspace::new();
        let buffers = workspace.acquire(2);
        assert!(assemble(&params, &molecules, buffers));

        for i in 0..2 {
            let block = buffers.coupling.fixed_view::<3, 3>(3 * i, 3 * i).clone_owned();
            assert!((block - Matrix3::identity()).norm() < TOLERANCE);
        }
    }

    #[test]
    fn assemble_reports_a_hard_core_overlap() {
        let params = GcpmParams::gcpm();
        let molecules = [
            gcpm_water(0, Point3::origin()),
            gcpm_water(1, Point3::new(0.0, 0.0, 1.4)),
        ];
        let mut workspace = InductionWorkspace::new();
        let buffers = workspace.acquire(2);
        assert!(!assemble(&params, &molecules, buffers));
    }

    #[test]
    fn field_magnitude_decays_with_separation() {
        let params = GcpmParams::gcpm();
        let mut workspace = InductionWorkspace::new();
        let mut previous = f64::INFINITY;
        for separation in [3.0, 6.0, 12.0] {
            let molecules = [
                gcpm_water(0, Point3::origin()),
                gcpm_water(1, Point3::new(0.0, 0.0, separation)),
            ];
            let buffers = workspace.acquire(2);
            assert!(assemble(&params, &molecules, buffers));
            let magnitude = buffers.field.norm();
            assert!(magnitude < previous);
            previous = magnitude;
        }
    }
}
