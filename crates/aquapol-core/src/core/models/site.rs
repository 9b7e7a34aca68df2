use crate::core::utils::elements;
use nalgebra::Point3;

/// Classifies a site within a rigid water molecule.
///
/// The kind determines the site's mass (the M site is massless) and which
/// Gaussian smearing width applies when its charge interacts with other
/// sites or with an induction center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteKind {
    /// The oxygen atom; carries the dispersion center and, in 3-site
    /// variants, the negative charge.
    Oxygen,
    /// A hydrogen atom carrying the positive partial charge.
    Hydrogen,
    /// The massless charge site displaced from oxygen along the H-O-H
    /// bisector in 4-site variants.
    MSite,
}

impl SiteKind {
    /// Element symbol for the site, if it corresponds to a physical atom.
    pub fn element(&self) -> Option<&'static str> {
        match self {
            SiteKind::Oxygen => Some("O"),
            SiteKind::Hydrogen => Some("H"),
            SiteKind::MSite => None,
        }
    }

    /// Mass in daltons. The M site is massless and does not contribute to
    /// the center of mass.
    pub fn mass(&self) -> f64 {
        self.element()
            .and_then(elements::atomic_mass)
            .unwrap_or(0.0)
    }
}

/// A fixed charge site: a position and a scalar charge in simulation units.
///
/// Sites are owned by exactly one molecule and are immutable for the duration
/// of one energy evaluation; only the external move layer repositions them
/// between evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub kind: SiteKind,
    pub position: Point3<f64>,
    pub charge: f64,
}

impl Site {
    pub fn new(kind: SiteKind, position: Point3<f64>, charge: f64) -> Self {
        Self {
            kind,
            position,
            charge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrogen_and_oxygen_have_tabulated_masses() {
        assert!((SiteKind::Hydrogen.mass() - 1.00794).abs() < 1e-12);
        assert!((SiteKind::Oxygen.mass() - 15.9994).abs() < 1e-12);
    }

    #[test]
    fn m_site_is_massless() {
        assert_eq!(SiteKind::MSite.mass(), 0.0);
        assert_eq!(SiteKind::MSite.element(), None);
    }

    #[test]
    fn new_site_stores_kind_position_and_charge() {
        let site = Site::new(SiteKind::Hydrogen, Point3::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(site.kind, SiteKind::Hydrogen);
        assert_eq!(site.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(site.charge, 0.5);
    }
}
