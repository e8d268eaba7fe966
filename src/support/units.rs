//! Extensions to [`uom`].
//!
//! Typed APIs in this crate use [`uom`] for physical units.
//! This module adds the quantities and helpers that [`uom`] does not provide,
//! plus the plain-`f64` temperature helpers used by the correlation code.
//!
//! ## Temperature scales
//!
//! The correlations are written against raw `f64` temperatures.
//! [`TemperatureScale`] says how such a value should be read, and
//! [`celsius_to_kelvin`] performs the only conversion the correlations need:
//!
//! ```
//! use enthalpy_models::support::units::{TemperatureScale, celsius_to_kelvin};
//!
//! assert_eq!(celsius_to_kelvin(0.0), 273.15);
//! assert_eq!(TemperatureScale::Celsius.to_kelvin(25.0), celsius_to_kelvin(25.0));
//! assert_eq!(TemperatureScale::Kelvin.to_kelvin(298.15), 298.15);
//! ```

mod quantities;
mod temperature_scale;

pub use quantities::{MolarVolume, SpecificEnthalpy};
pub use temperature_scale::{TemperatureScale, celsius_to_kelvin};
