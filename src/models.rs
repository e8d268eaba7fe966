//! Public Twine models.
//!
//! Each model is a thin [`twine_core::Model`] adapter that delegates to a
//! property model in [`crate::support::thermo`].
//! The adapters exist so the property calculations can be composed with other
//! Twine models; the calculations themselves live in `support`.

pub mod properties;
