/// Canonical identifier for water.
///
/// Used with [`Region1`](crate::support::thermo::model::Region1), whose
/// constants are fixed by IAPWS-IF97 and need no per-fluid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;
