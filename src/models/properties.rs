//! Property evaluation models.
//!
//! - [`WaterEnthalpy`]: liquid water enthalpy from IAPWS-IF97 Region 1.
//! - [`NitrogenEnthalpy`]: nitrogen enthalpy change and mean heat capacity.

mod nitrogen_enthalpy;
mod water_enthalpy;

pub use nitrogen_enthalpy::{NitrogenEnthalpy, NitrogenEnthalpyInput};
pub use water_enthalpy::{WaterEnthalpy, WaterEnthalpyInput};
