//! # AquaPol Core Library
//!
//! A library for many-body polarizable water potentials, built around the
//! Gaussian charge polarizable model (GCPM) family of rigid-molecule force
//! fields.
//!
//! ## Architectural Philosophy
//!
//! The library separates pure numerics from stateful evaluation so that each
//! layer stays independently testable.
//!
//! - **[`core::models`]: Molecular Representation.** Rigid water molecules as
//!   fixed charge sites plus a derived induction center, with geometry
//!   helpers for placing rigid molecules in space.
//!
//! - **[`core::forcefield`]: Energy Evaluation.** Closed-form damping and
//!   potential functions, the pairwise dispersion/electrostatics term, and
//!   the self-consistent induced-dipole machinery (field assembly, dense
//!   linear solve, polarization energy). The stateful entry point is
//!   [`core::forcefield::potential::GcpmPotential`], which owns reusable
//!   scratch buffers and exposes the single `energy(cluster)` contract the
//!   surrounding Monte Carlo layers consume.

pub mod core;
