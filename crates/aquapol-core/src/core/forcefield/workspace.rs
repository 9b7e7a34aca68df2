use nalgebra::{DMatrix, DVector, Point3};

/// Scratch storage for one induced-dipole solve at a fixed cluster size.
///
/// Invariant: `reset` must run before each assembly so no entry from a
/// previous evaluation survives. The coupling matrix is restored to the
/// identity (its diagonal blocks are never touched by assembly).
#[derive(Debug, Clone)]
pub(crate) struct ClusterBuffers {
    /// Static field at each induction center, length 3N.
    pub field: DVector<f64>,
    /// The coupling matrix `I − α·T`, size 3N×3N.
    pub coupling: DMatrix<f64>,
    /// Solved induced dipoles, length 3N.
    pub dipoles: DVector<f64>,
    /// Induction centers of the cluster, length N.
    pub centers: Vec<Point3<f64>>,
}

impl ClusterBuffers {
    fn new(molecules: usize) -> Self {
        let dim = 3 * molecules;
        Self {
            field: DVector::zeros(dim),
            coupling: DMatrix::identity(dim, dim),
            dipoles: DVector::zeros(dim),
            centers: Vec::with_capacity(molecules),
        }
    }

    fn reset(&mut self) {
        self.field.fill(0.0);
        self.dipoles.fill(0.0);
        self.coupling.fill_with_identity();
        self.centers.clear();
    }

    /// Number of molecules this buffer set is sized for.
    pub fn molecules(&self) -> usize {
        self.field.len() / 3
    }
}

/// A pool of [`ClusterBuffers`] keyed by cluster size, so repeated
/// evaluations at the same size reuse their allocations. The pool grows
/// geometrically and is owned by one evaluation context; concurrent
/// evaluations need their own workspace.
#[derive(Debug, Default)]
pub(crate) struct InductionWorkspace {
    pool: Vec<Option<ClusterBuffers>>,
}

impl InductionWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers for a cluster of `molecules`, freshly reset.
    pub fn acquire(&mut self, molecules: usize) -> &mut ClusterBuffers {
        if self.pool.len() <= molecules {
            let target = (molecules + 1).next_power_of_two();
            self.pool.resize_with(target, || None);
        }
        let buffers = self.pool[molecules].get_or_insert_with(|| ClusterBuffers::new(molecules));
        buffers.reset();
        buffers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_sizes_buffers_to_the_cluster() {
        let mut workspace = InductionWorkspace::new();
        let buffers = workspace.acquire(4);
        assert_eq!(buffers.molecules(), 4);
        assert_eq!(buffers.field.len(), 12);
        assert_eq!(buffers.coupling.nrows(), 12);
        assert_eq!(buffers.coupling.ncols(), 12);
        assert_eq!(buffers.dipoles.len(), 12);
    }

    #[test]
    fn acquire_resets_stale_entries() {
        let mut workspace = InductionWorkspace::new();
        {
            let buffers = workspace.acquire(2);
            buffers.field[3] = 7.0;
            buffers.dipoles[0] = -1.0;
            buffers.coupling[(0, 5)] = 0.25;
            buffers.centers.push(Point3::origin());
        }
        let buffers = workspace.acquire(2);
        assert_eq!(buffers.field[3], 0.0);
        assert_eq!(buffers.dipoles[0], 0.0);
        assert_eq!(buffers.coupling[(0, 5)], 0.0);
        assert_eq!(buffers.coupling[(5, 5)], 1.0);
        assert!(buffers.centers.is_empty());
    }

    #[test]
    fn acquire_keeps_distinct_sizes_apart() {
        let mut workspace = InductionWorkspace::new();
        workspace.acquire(2).field[0] = 1.0;
        assert_eq!(workspace.acquire(5).molecules(), 5);
        assert_eq!(workspace.acquire(2).molecules(), 2);
    }

    #[test]
    fn coupling_starts_as_the_identity() {
        let mut workspace = InductionWorkspace::new();
        let buffers = workspace.acquire(3);
        for i in 0..9 {
            for j in 0..9 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(buffers.coupling[(i, j)], expected);
            }
        }
    }
}
