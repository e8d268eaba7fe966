use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// Both property models in this crate are explicit in temperature (and, for
/// liquid water, pressure), so a state is defined by those two values plus the
/// fluid it describes.
///
/// # Example
///
/// ```
/// use enthalpy_models::support::thermo::{State, fluid::Water};
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::megapascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let state = State {
///     temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
///     pressure: Pressure::new::<megapascal>(3.0),
///     fluid: Water,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, pressure, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, pressure: Pressure, fluid: Fluid) -> Self {
        Self {
            temperature,
            pressure,
            fluid,
        }
    }

    /// Returns a new state with the given temperature, keeping other fields unchanged.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    /// Returns a new state with the given pressure, keeping other fields unchanged.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self { pressure, ..self }
    }
}
