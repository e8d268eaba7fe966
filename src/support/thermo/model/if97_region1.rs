//! IAPWS-IF97 Region 1 model for compressed liquid water.
//!
//! Region 1 expresses the dimensionless Gibbs free energy `γ(π, τ)` as a
//! 34-term series in reduced pressure `π = p/p*` and inverse reduced
//! temperature `τ = T*/T`. Specific enthalpy follows from its `τ` derivative:
//!
//! ```text
//! h = τ · γ_τ · R · T
//! γ_τ = Σ nᵢ · (7.1 − π)^Iᵢ · Jᵢ · (τ − 1.222)^(Jᵢ − 1)
//! ```
//!
//! # Validity
//!
//! The correlation covers `273.15 K ≤ T ≤ 623.15 K` and `p_sat(T) ≤ p ≤ 100 MPa`.
//! Inputs are **not** range checked: outside that domain the series still
//! evaluates to a number, it just no longer describes water.
//! A temperature of 0 K yields `NaN`, which is returned as-is.
//!
//! # Example
//!
//! ```
//! use enthalpy_models::support::thermo::model::if97_region1::enthalpy_region1;
//!
//! // IF97 verification point: 300 K, 3 MPa.
//! let h = enthalpy_region1(300.0, 3.0);
//! assert!((h - 115.331_273).abs() < 1e-5);
//! ```

use std::convert::Infallible;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, ThermodynamicTemperature},
    pressure::megapascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{
    PropertyError, State,
    capability::{HasEnthalpy, StateFrom, ThermoModel},
    fluid::Water,
};
use crate::support::units::SpecificEnthalpy;

/// Specific gas constant of water, kJ/(kg·K).
pub const GAS_CONSTANT: f64 = 0.461_526;

/// Reducing pressure `p*`, MPa.
pub const REDUCING_PRESSURE: f64 = 16.53;

/// Reducing temperature `T*`, K.
pub const REDUCING_TEMPERATURE: f64 = 1386.0;

/// One `(I, J, n)` term of the Region 1 Gibbs free energy series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialTerm {
    /// Exponent on `(7.1 − π)`.
    pub i: i32,
    /// Exponent on `(τ − 1.222)`.
    pub j: i32,
    /// Coefficient.
    pub n: f64,
}

impl PolynomialTerm {
    const fn new(i: i32, j: i32, n: f64) -> Self {
        Self { i, j, n }
    }

    /// Returns this term's contribution to `γ_τ`.
    ///
    /// Both powers are integer powers, so a negative `(7.1 − π)` base keeps
    /// its sign instead of turning into `NaN`.
    fn gamma_tau(&self, pi: f64, tau: f64) -> f64 {
        self.n * (7.1 - pi).powi(self.i) * f64::from(self.j) * (tau - 1.222).powi(self.j - 1)
    }
}

/// Coefficients and exponents of the Region 1 series, in IF97 table order.
pub const COEFFICIENTS: [PolynomialTerm; 34] = [
    PolynomialTerm::new(0, -2, 0.146_329_712_131_67),
    PolynomialTerm::new(0, -1, -0.845_481_871_691_14),
    PolynomialTerm::new(0, 0, -0.375_636_036_720_40e1),
    PolynomialTerm::new(0, 1, 0.338_551_691_683_85e1),
    PolynomialTerm::new(0, 2, -0.957_919_633_878_72),
    PolynomialTerm::new(0, 3, 0.157_720_385_132_28),
    PolynomialTerm::new(0, 4, -0.166_164_171_995_01e-1),
    PolynomialTerm::new(0, 5, 0.812_146_299_835_68e-3),
    PolynomialTerm::new(1, -9, 0.283_190_801_238_04e-3),
    PolynomialTerm::new(1, -7, -0.607_063_015_658_74e-3),
    PolynomialTerm::new(1, -1, -0.189_900_682_184_19e-1),
    PolynomialTerm::new(1, 0, -0.325_297_487_705_05e-1),
    PolynomialTerm::new(1, 1, -0.218_417_171_754_14e-1),
    PolynomialTerm::new(1, 3, -0.528_383_579_699_30e-4),
    PolynomialTerm::new(2, -3, -0.471_843_210_732_67e-3),
    PolynomialTerm::new(2, 0, -0.300_017_807_930_26e-3),
    PolynomialTerm::new(2, 1, 0.476_613_939_069_87e-4),
    PolynomialTerm::new(2, 3, -0.441_418_453_308_46e-5),
    PolynomialTerm::new(2, 17, -0.726_949_962_975_94e-15),
    PolynomialTerm::new(3, -4, -0.316_796_448_450_54e-4),
    PolynomialTerm::new(3, 0, -0.282_707_979_853_12e-5),
    PolynomialTerm::new(3, 6, -0.852_051_281_201_03e-9),
    PolynomialTerm::new(4, -5, -0.224_252_819_080_00e-5),
    PolynomialTerm::new(4, -2, -0.651_712_228_956_01e-6),
    PolynomialTerm::new(4, 10, -0.143_417_299_379_24e-12),
    PolynomialTerm::new(5, -8, -0.405_169_968_601_17e-6),
    PolynomialTerm::new(8, -11, -0.127_343_017_416_41e-8),
    PolynomialTerm::new(8, -6, -0.174_248_712_306_34e-9),
    PolynomialTerm::new(21, -29, -0.687_621_312_955_31e-18),
    PolynomialTerm::new(23, -31, 0.144_783_078_285_21e-19),
    PolynomialTerm::new(29, -38, 0.263_357_816_627_95e-22),
    PolynomialTerm::new(30, -39, -0.119_476_226_400_71e-22),
    PolynomialTerm::new(31, -40, 0.182_280_945_814_04e-23),
    PolynomialTerm::new(32, -41, -0.935_370_872_924_58e-25),
];

/// Returns `γ_τ`, the partial derivative of the dimensionless Gibbs free
/// energy with respect to `τ`.
fn gamma_tau(pi: f64, tau: f64) -> f64 {
    COEFFICIENTS.iter().map(|term| term.gamma_tau(pi, tau)).sum()
}

/// Computes the specific enthalpy of water in Region 1, in kJ/kg.
///
/// - `temperature`: absolute temperature, K.
/// - `pressure`: absolute pressure, MPa.
///
/// No range check is applied; see the [module docs](self) for the validity
/// domain and how degenerate inputs behave.
#[must_use]
pub fn enthalpy_region1(temperature: f64, pressure: f64) -> f64 {
    let pi = pressure / REDUCING_PRESSURE;
    let tau = REDUCING_TEMPERATURE / temperature;

    tau * gamma_tau(pi, tau) * GAS_CONSTANT * temperature
}

/// IAPWS-IF97 Region 1 property model for liquid [`Water`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region1;

impl Region1 {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ThermoModel for Region1 {
    type Fluid = Water;
}

impl HasEnthalpy for Region1 {
    /// Computes enthalpy with `h = τ·γ_τ·R·T`.
    ///
    /// Never fails; non-physical states produce non-finite values.
    fn enthalpy(&self, state: &State<Water>) -> Result<SpecificEnthalpy, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        let p = state.pressure.get::<megapascal>();

        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(
            enthalpy_region1(t, p),
        ))
    }
}

impl StateFrom<(Water, ThermodynamicTemperature, Pressure)> for Region1 {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Water, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Water>, Self::Error> {
        Ok(State {
            temperature,
            pressure,
            fluid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::bar, thermodynamic_temperature::degree_celsius};

    #[test]
    fn verification_points() {
        assert_relative_eq!(
            enthalpy_region1(300.0, 3.0),
            115.331_273,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            enthalpy_region1(300.0, 80.0),
            184.142_828,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            enthalpy_region1(500.0, 3.0),
            975.542_239,
            max_relative = 1e-8
        );
    }

    #[test]
    fn enthalpy_rises_with_temperature() {
        let cold = enthalpy_region1(300.0, 10.0);
        let warm = enthalpy_region1(400.0, 10.0);
        assert!(warm > cold);
    }

    #[test]
    fn negative_pressure_base_stays_finite() {
        // Above 117.4 MPa the `(7.1 − π)` base is negative.
        let h = enthalpy_region1(300.0, 200.0);
        assert!(h.is_finite());
    }

    #[test]
    fn zero_temperature_is_not_masked() {
        assert!(enthalpy_region1(0.0, 3.0).is_nan());
    }

    #[test]
    fn typed_model_matches_plain_function() -> Result<(), PropertyError> {
        let thermo = Region1::new();

        let temp = ThermodynamicTemperature::new::<degree_celsius>(26.85);
        let pres = Pressure::new::<bar>(30.0);
        let state: State<Water> = thermo.state_from((temp, pres)).unwrap();

        let h = thermo.enthalpy(&state)?;
        assert_relative_eq!(
            h.get::<kilojoule_per_kilogram>(),
            enthalpy_region1(300.0, 3.0),
            max_relative = 1e-12
        );

        Ok(())
    }

    #[test]
    fn with_pressure_reevaluates() -> Result<(), PropertyError> {
        let thermo = Region1::new();

        let state = State::new(
            ThermodynamicTemperature::new::<kelvin>(300.0),
            Pressure::new::<megapascal>(3.0),
            Water,
        );
        let compressed = state.with_pressure(Pressure::new::<megapascal>(80.0));

        assert!(thermo.enthalpy(&compressed)? > thermo.enthalpy(&state)?);

        Ok(())
    }
}
