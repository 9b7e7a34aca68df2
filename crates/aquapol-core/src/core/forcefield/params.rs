use crate::core::models::site::SiteKind;
use crate::core::utils::units;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Exponential-6 dispersion parameters in laboratory units.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct DispersionConfig {
    /// Dispersion length σ in Ångströms.
    pub sigma: f64,
    /// Well depth ε in Kelvin.
    pub well_depth: f64,
    /// Exponential steepness γ (dimensionless).
    pub gamma: f64,
}

/// Site charges in elementary charge units.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ChargeConfig {
    pub hydrogen: f64,
    pub m_site: f64,
}

/// Gaussian smearing widths in Ångströms. The M-site width also applies to
/// the oxygen in 3-site variants and to the induction center.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SmearingConfig {
    pub hydrogen: f64,
    pub m_site: f64,
}

/// A water model description in laboratory units, as read from a TOML file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct WaterModelConfig {
    pub dispersion: DispersionConfig,
    pub charges: ChargeConfig,
    pub smearing: SmearingConfig,
    /// Molecular polarizability α in Å³.
    pub polarizability: f64,
    /// Squared O-O hard-core distance in Å²; at or below it the pair energy
    /// is +∞.
    pub hard_core: f64,
}

impl WaterModelConfig {
    /// The GCPM parameter set.
    pub fn gcpm() -> Self {
        Self {
            dispersion: DispersionConfig {
                sigma: 3.69,
                well_depth: 110.0,
                gamma: 12.75,
            },
            charges: ChargeConfig {
                hydrogen: 0.6113,
                m_site: -1.2226,
            },
            smearing: SmearingConfig {
                hydrogen: 0.455,
                m_site: 0.610,
            },
            polarizability: 1.444,
            hard_core: 4.41,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Compiled model parameters in simulation units, immutable for the lifetime
/// of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GcpmParams {
    /// Dispersion length σ in Ångströms.
    pub sigma: f64,
    /// Well depth ε in simulation energy units.
    pub epsilon: f64,
    /// Exponential steepness γ.
    pub gamma: f64,
    /// Hydrogen charge in simulation units.
    pub charge_h: f64,
    /// M-site charge in simulation units.
    pub charge_m: f64,
    /// Squared O-O hard-core distance in Å².
    pub core: f64,
    /// Hydrogen smearing width in Ångströms.
    pub sigma_h: f64,
    /// M-site (and induction-center) smearing width in Ångströms.
    pub sigma_m: f64,
    /// Molecular polarizability α in Å³.
    pub alpha: f64,
}

impl GcpmParams {
    /// The GCPM model in simulation units.
    pub fn gcpm() -> Self {
        Self::from_config(&WaterModelConfig::gcpm())
    }

    /// Compiles a laboratory-unit description into simulation units.
    pub fn from_config(config: &WaterModelConfig) -> Self {
        Self {
            sigma: config.dispersion.sigma,
            epsilon: units::kelvin(config.dispersion.well_depth),
            gamma: config.dispersion.gamma,
            charge_h: units::electron(config.charges.hydrogen),
            charge_m: units::electron(config.charges.m_site),
            core: config.hard_core,
            sigma_h: config.smearing.hydrogen,
            sigma_m: config.smearing.m_site,
            alpha: config.polarizability,
        }
    }

    /// Loads a water model description from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: WaterModelConfig =
            toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(Self::from_config(&config))
    }

    /// Smearing width of one site kind. The oxygen shares the M-site width.
    fn smearing_width(&self, kind: SiteKind) -> f64 {
        match kind {
            SiteKind::Hydrogen => self.sigma_h,
            SiteKind::Oxygen | SiteKind::MSite => self.sigma_m,
        }
    }

    /// Combined squared smearing width σ_a² + σ_b² for a pair of charged
    /// sites. The single combination rule reproduces the model's H-H, H-M,
    /// and M-M screening lengths.
    pub(crate) fn charge_width_sq(&self, a: SiteKind, b: SiteKind) -> f64 {
        let sa = self.smearing_width(a);
        let sb = self.smearing_width(b);
        sa * sa + sb * sb
    }

    /// Combined squared smearing width between a charged site and an
    /// induction center (which carries the M-site width).
    pub(crate) fn field_width_sq(&self, kind: SiteKind) -> f64 {
        let s = self.smearing_width(kind);
        s * s + self.sigma_m * self.sigma_m
    }
}

impl Default for GcpmParams {
    fn default() -> Self {
        Self::gcpm()
    }
}
