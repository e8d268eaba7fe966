//! # Enthalpy Models
//!
//! Closed-form enthalpy and heat capacity models built in the style of
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Two independent property models are provided:
//!
//! - **Liquid water**: specific enthalpy from the IAPWS-IF97 Region 1 Gibbs
//!   free energy correlation, see [`support::thermo::model::if97_region1`].
//! - **Nitrogen gas**: enthalpy change and apparent heat capacity from a
//!   three-band NIST Shomate correlation, see
//!   [`support::thermo::fluid::nitrogen`] and [`support::thermo::model::shomate`].
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters over the property models.
//! - [`support`]: The property models themselves, plus the unit, constraint,
//!   and capability utilities they are built on.
//!
//! Both models are pure functions of their inputs.
//! Coefficient tables are `const` data and no state is shared between calls.

pub mod models;
pub mod support;
