/// Offset between the Celsius and Kelvin scales, in K.
const CELSIUS_OFFSET: f64 = 273.15;

/// Converts a temperature in °C to K.
#[must_use]
pub fn celsius_to_kelvin(t: f64) -> f64 {
    t + CELSIUS_OFFSET
}

/// The scale a raw `f64` temperature is expressed in.
///
/// Defaults to [`TemperatureScale::Celsius`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureScale {
    #[default]
    Celsius,
    Kelvin,
}

impl TemperatureScale {
    /// Returns `t`, read on this scale, as an absolute temperature in K.
    #[must_use]
    pub fn to_kelvin(self, t: f64) -> f64 {
        match self {
            Self::Celsius => celsius_to_kelvin(t),
            Self::Kelvin => t,
        }
    }
}
