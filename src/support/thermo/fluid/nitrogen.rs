//! Nitrogen gas (N₂) and its Shomate heat capacity correlation.
//!
//! [`enthalpy_n2`] is the plain-`f64` entry point:
//!
//! ```
//! use enthalpy_models::support::{
//!     thermo::{fluid::nitrogen::enthalpy_n2, model::shomate::ShomateBand},
//!     units::TemperatureScale,
//! };
//!
//! let change = enthalpy_n2(1800.0, 298.15, TemperatureScale::Kelvin).unwrap();
//! assert_eq!(change.band, ShomateBand::Band500To2000K);
//! assert!((change.dh - 49.057).abs() < 1e-3); // kJ/mol
//! ```

use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, MolarMass, Volume},
    molar_mass::gram_per_mole,
    volume::cubic_meter,
};

use crate::support::{
    thermo::{
        PropertyError,
        model::shomate::{
            CpCoefficientSet, EnthalpyChange, Shomate, ShomateFluid, ShomateParameters,
        },
    },
    units::TemperatureScale,
};

/// Molar mass of N₂, g/mol.
pub const MOLAR_MASS: f64 = 28.0134;

/// Ideal gas molar volume at 0 °C and 1 atm, m³/mol.
pub const STANDARD_MOLAR_VOLUME: f64 = 0.022_414;

/// Shomate coefficients `[A, B, C, D, E]` for N₂, ordered by band.
pub const CP_COEFFICIENTS: [CpCoefficientSet; 3] = [
    // 0 K to 500 K
    CpCoefficientSet([28.9864, 1.85398, -9.64746, 16.6354, 0.00012]),
    // 500 K to 2000 K
    CpCoefficientSet([19.50583, 19.88705, -8.598535, 1.369784, 0.527601]),
    // 2000 K to 6000 K
    CpCoefficientSet([35.51872, 1.128728, -0.196103, 0.014662, -4.553760]),
];

/// Canonical identifier for nitrogen gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nitrogen;

impl ShomateFluid for Nitrogen {
    fn parameters() -> ShomateParameters {
        ShomateParameters::new(
            CP_COEFFICIENTS,
            MolarMass::new::<gram_per_mole>(MOLAR_MASS),
            Volume::new::<cubic_meter>(STANDARD_MOLAR_VOLUME)
                / AmountOfSubstance::new::<mole>(1.0),
        )
    }
}

/// Computes the enthalpy change of nitrogen from `reftemp` to `temp`.
///
/// Both temperatures are read on `scale`; pass
/// [`TemperatureScale::default()`] for °C.
/// The result holds `dh` in kJ/mol, the mean heat capacity on a mass basis in
/// kJ/(kg·K), the mean heat capacity per standard cubic meter in kJ/(m³·K),
/// and the band used.
///
/// The band is chosen from `temp` only, and the same coefficients are applied
/// at `reftemp`. See [`Shomate::enthalpy_change`] for the full behavior.
///
/// # Errors
///
/// Returns [`PropertyError::OutOfDomain`] if `temp` is outside `(0, 6000] K`
/// or `reftemp` is at or below absolute zero.
pub fn enthalpy_n2(
    temp: f64,
    reftemp: f64,
    scale: TemperatureScale,
) -> Result<EnthalpyChange, PropertyError> {
    let thermo = Shomate::<Nitrogen>::new().map_err(|err| PropertyError::Calculation {
        context: err.to_string(),
    })?;

    thermo.enthalpy_change(temp, reftemp, scale)
}
