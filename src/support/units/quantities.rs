use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, P3, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Molar volume, m³/mol in SI.
pub type MolarVolume = Quantity<ISQ<P3, Z0, Z0, Z0, Z0, N1, Z0>, SI<f64>, f64>;
