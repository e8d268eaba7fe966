use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

use crate::support::thermo::{
    PropertyError,
    fluid::Nitrogen,
    model::shomate::{EnthalpyChange, Shomate, ShomateParametersError},
};

/// Input to [`NitrogenEnthalpy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NitrogenEnthalpyInput {
    /// Process temperature; selects the correlation band.
    pub temperature: ThermodynamicTemperature,
    pub reference_temperature: ThermodynamicTemperature,
}

/// Enthalpy change and mean heat capacity of nitrogen between two temperatures.
///
/// Typed counterpart of
/// [`enthalpy_n2`](crate::support::thermo::fluid::nitrogen::enthalpy_n2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NitrogenEnthalpy {
    thermo: Shomate<Nitrogen>,
}

impl NitrogenEnthalpy {
    /// Creates the model from the built-in nitrogen correlation.
    ///
    /// # Errors
    ///
    /// Returns [`ShomateParametersError`] if the nitrogen constants are invalid.
    pub fn new() -> Result<Self, ShomateParametersError> {
        Ok(Self {
            thermo: Shomate::new()?,
        })
    }
}

impl Model for NitrogenEnthalpy {
    type Input = NitrogenEnthalpyInput;
    type Output = EnthalpyChange;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.thermo
            .enthalpy_change_between(input.temperature, input.reference_temperature)
    }
}
