//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted, often via trait implementations (e.g., correlation constants
//! for [`Shomate`](crate::support::thermo::model::Shomate)).

pub mod nitrogen;

mod water;

pub use nitrogen::Nitrogen;
pub use water::Water;
