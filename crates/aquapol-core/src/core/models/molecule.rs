use super::site::{Site, SiteKind};
use nalgebra::{Point3, Rotation3, Vector3};

/// A rigid 4-site water molecule.
///
/// The molecule owns its sites; positions are fixed relative to one another
/// (rigidity is the move layer's responsibility, not enforced here). The
/// `index` identifies the molecule within its box and is used to key cached
/// per-pair quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterMolecule {
    pub index: usize,
    pub oxygen: Site,
    pub hydrogen1: Site,
    pub hydrogen2: Site,
    pub m_site: Site,
}

impl WaterMolecule {
    /// Builds a molecule from explicit site positions and charges. The
    /// oxygen carries no charge in the 4-site model; 3-site variants place
    /// the M site at the oxygen position.
    pub fn new(
        index: usize,
        oxygen: Point3<f64>,
        hydrogen1: Point3<f64>,
        hydrogen2: Point3<f64>,
        m_site: Point3<f64>,
        charge_h: f64,
        charge_m: f64,
    ) -> Self {
        Self {
            index,
            oxygen: Site::new(SiteKind::Oxygen, oxygen, 0.0),
            hydrogen1: Site::new(SiteKind::Hydrogen, hydrogen1, charge_h),
            hydrogen2: Site::new(SiteKind::Hydrogen, hydrogen2, charge_h),
            m_site: Site::new(SiteKind::MSite, m_site, charge_m),
        }
    }

    /// The charged sites visible to electrostatics, in a fixed order.
    pub fn charged_sites(&self) -> [&Site; 3] {
        [&self.hydrogen1, &self.hydrogen2, &self.m_site]
    }

    /// The induction center: the mass-weighted center of the physical atoms.
    /// The massless M site does not contribute.
    pub fn center_of_mass(&self) -> Point3<f64> {
        let mut weighted = Vector3::zeros();
        let mut total_mass = 0.0;
        for site in [&self.oxygen, &self.hydrogen1, &self.hydrogen2, &self.m_site] {
            let mass = site.kind.mass();
            weighted += site.position.coords * mass;
            total_mass += mass;
        }
        Point3::from(weighted / total_mass)
    }

    /// Returns a copy of the molecule rigidly shifted by `displacement`.
    pub fn translated(&self, displacement: Vector3<f64>) -> Self {
        let mut shifted = self.clone();
        for site in [
            &mut shifted.oxygen,
            &mut shifted.hydrogen1,
            &mut shifted.hydrogen2,
            &mut shifted.m_site,
        ] {
            site.position += displacement;
        }
        shifted
    }
}

/// Internal geometry of a rigid water molecule: O-H bond length, H-O-H
/// angle, and the O-M displacement along the bisector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterGeometry {
    /// O-H bond length in Ångströms.
    pub bond_length_oh: f64,
    /// H-O-H angle in radians.
    pub angle_hoh: f64,
    /// Distance from oxygen to the M site along the bisector, toward the
    /// hydrogens, in Ångströms. Zero collapses the M site onto the oxygen.
    pub m_site_offset: f64,
}

impl WaterGeometry {
    /// The TIP4P rigid geometry (0.9572 Å, 104.52°, r_OM = 0.15 Å).
    pub fn tip4p() -> Self {
        Self {
            bond_length_oh: 0.9572,
            angle_hoh: 104.52_f64.to_radians(),
            m_site_offset: 0.15,
        }
    }

    /// The GCPM rigid geometry: TIP4P bond length and angle with the M site
    /// displaced 0.27 Å from oxygen.
    pub fn gcpm() -> Self {
        Self {
            m_site_offset: 0.27,
            ..Self::tip4p()
        }
    }

    /// Places a rigid molecule with its oxygen at `oxygen` and the given
    /// orientation. In the reference frame the hydrogens straddle the +z
    /// axis in the xz-plane and the bisector points along +z.
    pub fn place(
        &self,
        index: usize,
        oxygen: Point3<f64>,
        orientation: Rotation3<f64>,
        charge_h: f64,
        charge_m: f64,
    ) -> WaterMolecule {
        let half_angle = 0.5 * self.angle_hoh;
        let h_local = Vector3::new(
            self.bond_length_oh * half_angle.sin(),
            0.0,
            self.bond_length_oh * half_angle.cos(),
        );
        let h_mirror = Vector3::new(-h_local.x, 0.0, h_local.z);
        let m_local = Vector3::new(0.0, 0.0, self.m_site_offset);

        WaterMolecule::new(
            index,
            oxygen,
            oxygen + orientation * h_local,
            oxygen + orientation * h_mirror,
            oxygen + orientation * m_local,
            charge_h,
            charge_m,
        )
    }
}
