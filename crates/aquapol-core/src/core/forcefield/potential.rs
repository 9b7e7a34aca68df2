use super::induction;
use super::pairwise;
use super::params::GcpmParams;
use super::solver::{self, PolarizationError, PolarizationSolver};
use super::term::EnergyTerm;
use super::workspace::InductionWorkspace;
use crate::core::models::molecule::WaterMolecule;
use std::collections::HashMap;

/// Selects which part of the potential an evaluation computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Component {
    /// Only the pairwise-additive dispersion + electrostatics sum.
    TwoBody,
    /// Only the many-body polarization energy.
    Induction,
    /// Both; the physical potential.
    #[default]
    Full,
}

/// The polarizable water potential.
///
/// Owns its model parameters, a solver strategy, and the scratch buffers for
/// the induced-dipole solve, so repeated evaluations at the same cluster
/// size allocate nothing. One instance serves one evaluation thread;
/// concurrent evaluations need their own instance.
///
/// The energy is a pure function of the current site positions: no state
/// carried between calls influences the result.
#[derive(Debug)]
pub struct GcpmPotential {
    params: GcpmParams,
    solver: PolarizationSolver,
    component: Component,
    workspace: InductionWorkspace,
    last_polarization: f64,
    pair_polarization: HashMap<(usize, usize), f64>,
}

impl GcpmPotential {
    pub fn new(params: GcpmParams) -> Self {
        Self::with_solver(params, PolarizationSolver::default())
    }

    pub fn with_solver(params: GcpmParams, solver: PolarizationSolver) -> Self {
        Self {
            params,
            solver,
            component: Component::default(),
            workspace: InductionWorkspace::new(),
            last_polarization: 0.0,
            pair_polarization: HashMap::new(),
        }
    }

    pub fn params(&self) -> &GcpmParams {
        &self.params
    }

    pub fn set_component(&mut self, component: Component) {
        self.component = component;
    }

    /// Total configurational energy of the cluster: the pairwise term summed
    /// over all unordered pairs plus the polarization energy, or `+∞` as
    /// soon as any pair violates the hard core (in which case the
    /// polarization machinery is skipped entirely and its energy is 0).
    ///
    /// Molecule ordering within the cluster does not affect the result.
    pub fn energy(&mut self, molecules: &[WaterMolecule]) -> Result<f64, PolarizationError> {
        let mut sum = 0.0;

        if self.component != Component::Induction {
            for (i, a) in molecules.iter().enumerate() {
                for b in &molecules[i + 1..] {
                    sum += pairwise::pair_energy(&self.params, a, b).total();
                    if sum.is_infinite() {
                        self.last_polarization = 0.0;
                        return Ok(f64::INFINITY);
                    }
                }
            }
        }

        if self.component != Component::TwoBody && molecules.len() > 1 {
            let polarization = self.polarization_energy(molecules)?;
            self.last_polarization = polarization;
            if let [a, b] = molecules {
                self.pair_polarization
                    .insert(pair_key(a.index, b.index), polarization);
            }
            sum += polarization;
        } else {
            self.last_polarization = 0.0;
        }

        Ok(sum)
    }

    /// Like [`Self::energy`], but with the additive breakdown retained.
    pub fn energy_terms(
        &mut self,
        molecules: &[WaterMolecule],
    ) -> Result<EnergyTerm, PolarizationError> {
        let mut term = EnergyTerm::default();

        if self.component != Component::Induction {
            for (i, a) in molecules.iter().enumerate() {
                for b in &molecules[i + 1..] {
                    term += pairwise::pair_energy(&self.params, a, b);
                    if term.total().is_infinite() {
                        self.last_polarization = 0.0;
                        return Ok(term);
                    }
                }
            }
        }

        if self.component != Component::TwoBody && molecules.len() > 1 {
            term.polarization = self.polarization_energy(molecules)?;
            self.last_polarization = term.polarization;
        } else {
            self.last_polarization = 0.0;
        }

        Ok(term)
    }

    /// The polarization component of the most recent evaluation, for
    /// diagnostics and statistics.
    pub fn last_polarization_energy(&self) -> f64 {
        self.last_polarization
    }

    /// The polarization energy recorded the last time the pair `(i, j)` was
    /// evaluated as a two-molecule cluster; order-insensitive.
    pub fn cached_pair_polarization(&self, i: usize, j: usize) -> Option<f64> {
        self.pair_polarization.get(&pair_key(i, j)).copied()
    }

    fn polarization_energy(
        &mut self,
        molecules: &[WaterMolecule],
    ) -> Result<f64, PolarizationError> {
        let buffers = self.workspace.acquire(molecules.len());
        if !induction::assemble(&self.params, molecules, buffers) {
            // An overlapping cluster carries no induced response; the
            // pairwise term is what rejects the configuration.
            return Ok(0.0);
        }
        solver::solve(self.solver, self.params.alpha, buffers)?;
        Ok(solver::polarization_energy(buffers))
    }
}

fn pair_key(i: usize, j: usize) -> (usize, usize) {
    if i <= j { (i, j) } else { (j, i) }
}
