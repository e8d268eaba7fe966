//! Thermodynamic property models.

pub mod if97_region1;
pub mod shomate;

pub use if97_region1::Region1;
pub use shomate::Shomate;
