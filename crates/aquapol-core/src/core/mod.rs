//! # Core Module
//!
//! The computational core of the library: molecular data structures, the
//! polarizable force field, and shared numeric utilities.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Charge sites, rigid water
//!   molecules, induction centers, and rigid placement geometry
//! - **Energy Calculations** ([`forcefield`]) - Damping functions, pairwise
//!   potentials, induced-dipole assembly and solve, model parameters
//! - **Utilities** ([`utils`]) - Simulation units and element data

pub mod forcefield;
pub mod models;
pub mod utils;
