use phf::{Map, phf_map};

static ATOMIC_MASSES: Map<&'static str, f64> = phf_map! {
    "H" => 1.00794,
    "D" => 2.014102,
    "C" => 12.0107,
    "N" => 14.0067,
    "O" => 15.9994,
};

/// Atomic mass in daltons for an element symbol, if tabulated.
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ATOMIC_MASSES.get(symbol.trim()).copied()
}
