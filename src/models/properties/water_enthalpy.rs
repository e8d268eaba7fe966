use twine_core::Model;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::{
    thermo::{PropertyError, State, capability::HasEnthalpy, fluid::Water, model::Region1},
    units::SpecificEnthalpy,
};

/// Input to [`WaterEnthalpy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterEnthalpyInput {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

/// Specific enthalpy of liquid water from IAPWS-IF97 Region 1.
///
/// Inputs outside Region 1 still produce a value; see
/// [`if97_region1`](crate::support::thermo::model::if97_region1).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaterEnthalpy {
    thermo: Region1,
}

impl WaterEnthalpy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for WaterEnthalpy {
    type Input = WaterEnthalpyInput;
    type Output = SpecificEnthalpy;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let state = State::new(input.temperature, input.pressure, Water);
        self.thermo.enthalpy(&state)
    }
}
