/// Base trait for thermodynamic property models.
///
/// Ties a model to the fluid type its states carry.
/// Capability traits such as [`HasEnthalpy`](super::HasEnthalpy) build on it.
pub trait ThermoModel {
    type Fluid;
}
