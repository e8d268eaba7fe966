//! Ideal gas model with a banded Shomate heat capacity correlation.
//!
//! `Shomate` evaluates the NIST Shomate fit for molar heat capacity,
//! written in terms of the reduced temperature `x = T / 1000 K`:
//!
//! ```text
//! Cp(x) = A + B·x + C·x² + D·x³ + E/x²          [J/(mol·K)]
//! H(x)  = A·x + B·x²/2 + C·x³/3 + D·x⁴/4 − E/x  [kJ/mol]
//! ```
//!
//! Each fluid provides one [`CpCoefficientSet`] per [`ShomateBand`].
//! The model then reports enthalpy differences and apparent (mean) heat
//! capacities between a process temperature and a reference temperature.
//!
//! # Band selection
//!
//! The band is chosen from the **process** temperature alone.
//! The reference enthalpy is evaluated with the same coefficient set even when
//! the reference temperature lies in a different band, so results for
//! temperature pairs that straddle 500 K or 2000 K carry a small error relative
//! to a band-by-band integration. Existing consumers depend on these numbers;
//! treat any change here as a breaking change.
//!
//! # Domain
//!
//! Process temperatures outside `(0, 6000] K` (including `NaN`) are rejected
//! with [`PropertyError::OutOfDomain`].
//! The reference temperature must be above absolute zero but has no upper
//! limit.
//! At 0 K the `−E/x` term is singular, so neither temperature may be zero.

use std::{convert::Infallible, marker::PhantomData};

use thiserror::Error;
use uom::si::{
    amount_of_substance::mole,
    available_energy::kilojoule_per_kilogram,
    energy::kilojoule,
    f64::{
        AmountOfSubstance, Energy, MolarEnergy, MolarMass, Pressure, SpecificHeatCapacity,
        ThermodynamicTemperature,
    },
    molar_mass::gram_per_mole,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, State,
        capability::{HasCp, HasEnthalpy, StateFrom, ThermoModel},
    },
    units::{MolarVolume, SpecificEnthalpy, TemperatureScale},
};

/// Temperature scaling used by the correlation, K.
const TEMPERATURE_SCALE: f64 = 1000.0;

/// Offset added to the process temperature, in K, when it equals the
/// reference temperature.
const COINCIDENT_TEMPERATURE_OFFSET: f64 = 0.01;

/// The five Shomate coefficients `[A, B, C, D, E]` of one temperature band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpCoefficientSet(pub [f64; 5]);

impl CpCoefficientSet {
    /// Returns the molar heat capacity at reduced temperature `x`, J/(mol·K).
    #[must_use]
    pub fn cp(&self, x: f64) -> f64 {
        let [a, b, c, d, e] = self.0;
        a + b * x + c * x.powi(2) + d * x.powi(3) + e / x.powi(2)
    }

    /// Returns the integrated heat capacity at reduced temperature `x`, kJ/mol.
    ///
    /// The first four coefficients form the polynomial part and the fifth is
    /// the coefficient of the `−E/x` term.
    /// Only differences of this value are meaningful.
    #[must_use]
    pub fn enthalpy(&self, x: f64) -> f64 {
        let polynomial: f64 = self.0[..4]
            .iter()
            .zip(1..)
            .map(|(coefficient, power)| x.powi(power) * coefficient / f64::from(power))
            .sum();

        polynomial - self.0[4] / x
    }
}

/// A temperature band with its own fitted coefficient set.
///
/// The lowest band excludes absolute zero, `(0, 500)`.
/// The middle band is half-open, `[500, 2000)`, and the top band is closed,
/// `[2000, 6000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShomateBand {
    Band0To500K,
    Band500To2000K,
    Band2000To6000K,
}

impl ShomateBand {
    /// All bands, ordered by temperature.
    pub const ALL: [Self; 3] = [
        Self::Band0To500K,
        Self::Band500To2000K,
        Self::Band2000To6000K,
    ];

    /// Highest temperature covered by any band, K.
    pub const MAX_TEMPERATURE: f64 = 6000.0;

    /// Selects the band containing `temperature`, in K.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if `temperature` is zero,
    /// negative, `NaN`, or above [`Self::MAX_TEMPERATURE`].
    pub fn select(temperature: f64) -> Result<Self, PropertyError> {
        StrictlyPositive::check(&temperature).map_err(|err| PropertyError::OutOfDomain {
            context: format!("temperature {temperature} K: {err}"),
        })?;

        if temperature < 500.0 {
            Ok(Self::Band0To500K)
        } else if temperature < 2000.0 {
            Ok(Self::Band500To2000K)
        } else if temperature <= Self::MAX_TEMPERATURE {
            Ok(Self::Band2000To6000K)
        } else {
            Err(PropertyError::OutOfDomain {
                context: format!(
                    "temperature {temperature} K is above the {} K correlation limit",
                    Self::MAX_TEMPERATURE
                ),
            })
        }
    }

    /// Lower bound of the band, K.
    ///
    /// Inclusive except for the 0 K bound of [`Self::Band0To500K`].
    #[must_use]
    pub fn lower_bound(self) -> f64 {
        match self {
            Self::Band0To500K => 0.0,
            Self::Band500To2000K => 500.0,
            Self::Band2000To6000K => 2000.0,
        }
    }

    /// Upper bound of the band, K.
    ///
    /// See [`Self::is_upper_inclusive`].
    #[must_use]
    pub fn upper_bound(self) -> f64 {
        match self {
            Self::Band0To500K => 500.0,
            Self::Band500To2000K => 2000.0,
            Self::Band2000To6000K => Self::MAX_TEMPERATURE,
        }
    }

    /// Whether [`Self::upper_bound`] belongs to the band.
    #[must_use]
    pub fn is_upper_inclusive(self) -> bool {
        matches!(self, Self::Band2000To6000K)
    }

    fn index(self) -> usize {
        match self {
            Self::Band0To500K => 0,
            Self::Band500To2000K => 1,
            Self::Band2000To6000K => 2,
        }
    }
}

/// Enthalpy change and apparent heat capacity between two temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyChange {
    /// Molar enthalpy change `H(T) − H(T_ref)`, kJ/mol.
    pub dh: f64,
    /// Mean heat capacity over `[T_ref, T]` on a mass basis, kJ/(kg·K).
    pub cpm_by_mass: f64,
    /// Mean heat capacity over `[T_ref, T]` per standard cubic meter, kJ/(m³·K).
    pub cpm_by_volume: f64,
    /// Band whose coefficients were used for both temperatures.
    pub band: ShomateBand,
}

impl EnthalpyChange {
    /// Returns [`Self::dh`] as a typed quantity.
    #[must_use]
    pub fn molar_enthalpy(&self) -> MolarEnergy {
        Energy::new::<kilojoule>(self.dh) / AmountOfSubstance::new::<mole>(1.0)
    }

    /// Returns [`Self::cpm_by_mass`] as a typed quantity.
    #[must_use]
    pub fn mean_cp(&self) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(self.cpm_by_mass)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShomateParametersError {
    #[error("invalid molar mass: {molar_mass:?}")]
    MolarMass { molar_mass: MolarMass },
    #[error("invalid standard molar volume: {volume:?}")]
    StandardMolarVolume { volume: MolarVolume },
    #[error("invalid reference temperature: {t_ref:?}")]
    ReferenceTemperature { t_ref: ThermodynamicTemperature },
}

/// Reference values used to define the enthalpy offset for a [`Shomate`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShomateReference {
    pub temperature: ThermodynamicTemperature,
}

impl ShomateReference {
    /// Returns the thermochemical standard reference, 298.15 K.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<kelvin>(298.15),
        }
    }
}

/// Constant parameters for the [`Shomate`] model.
///
/// These values are typically provided by a fluid's [`ShomateFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShomateParameters {
    /// Coefficients indexed in [`ShomateBand::ALL`] order.
    pub coefficients: [CpCoefficientSet; 3],
    pub molar_mass: MolarMass,
    /// Ideal gas molar volume at standard conditions.
    pub standard_molar_volume: MolarVolume,
    pub reference: ShomateReference,
}

impl ShomateParameters {
    #[must_use]
    pub fn new(
        coefficients: [CpCoefficientSet; 3],
        molar_mass: MolarMass,
        standard_molar_volume: MolarVolume,
    ) -> Self {
        Self {
            coefficients,
            molar_mass,
            standard_molar_volume,
            reference: ShomateReference::standard(),
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: ShomateReference) -> Self {
        self.reference = reference;
        self
    }
}

/// Fluid constants required by the [`Shomate`] model.
pub trait ShomateFluid {
    /// Returns the constant parameters for use with [`Shomate`].
    fn parameters() -> ShomateParameters;
}

/// Ideal gas model with a three-band Shomate heat capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shomate<Fluid> {
    coefficients: [CpCoefficientSet; 3],
    molar_mass: MolarMass,
    standard_molar_volume: MolarVolume,
    t_ref: ThermodynamicTemperature,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for Shomate<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: ShomateFluid> Shomate<Fluid> {
    /// Creates a Shomate model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`ShomateParametersError`] if any required constant is invalid.
    pub fn new() -> Result<Self, ShomateParametersError> {
        let parameters = Fluid::parameters();

        let molar_mass = parameters.molar_mass;
        if StrictlyPositive::check(&molar_mass.get::<gram_per_mole>()).is_err() {
            return Err(ShomateParametersError::MolarMass { molar_mass });
        }

        let volume = parameters.standard_molar_volume;
        if StrictlyPositive::check(&volume.value).is_err() {
            return Err(ShomateParametersError::StandardMolarVolume { volume });
        }

        let t_ref = parameters.reference.temperature;
        if StrictlyPositive::check(&t_ref.get::<kelvin>()).is_err() {
            return Err(ShomateParametersError::ReferenceTemperature { t_ref });
        }

        Ok(Self {
            coefficients: parameters.coefficients,
            molar_mass,
            standard_molar_volume: volume,
            t_ref,
            _marker: PhantomData,
        })
    }
}

impl<Fluid> Shomate<Fluid> {
    /// Returns the coefficient set fitted for `band`.
    #[must_use]
    pub fn coefficients(&self, band: ShomateBand) -> &CpCoefficientSet {
        &self.coefficients[band.index()]
    }

    /// Returns the reference temperature used by [`HasEnthalpy`].
    #[must_use]
    pub fn reference_temperature(&self) -> ThermodynamicTemperature {
        self.t_ref
    }

    /// Computes the enthalpy change and mean heat capacity from
    /// `reference_temperature` to `temperature`.
    ///
    /// Both values are read on `scale`.
    /// If the two temperatures coincide, the process temperature is nudged up
    /// by 0.01 K so the mean heat capacity stays finite; the returned `dh` is
    /// then small but non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if `temperature` is outside
    /// `(0, 6000] K` or `reference_temperature` is not above 0 K.
    pub fn enthalpy_change(
        &self,
        temperature: f64,
        reference_temperature: f64,
        scale: TemperatureScale,
    ) -> Result<EnthalpyChange, PropertyError> {
        let t = scale.to_kelvin(temperature);
        let t_ref = scale.to_kelvin(reference_temperature);

        let band = ShomateBand::select(t)?;
        StrictlyPositive::check(&t_ref).map_err(|err| PropertyError::OutOfDomain {
            context: format!("reference temperature {t_ref} K: {err}"),
        })?;
        let coefficients = self.coefficients(band);

        let mut x = t / TEMPERATURE_SCALE;
        let x_ref = t_ref / TEMPERATURE_SCALE;
        if t == t_ref {
            x += COINCIDENT_TEMPERATURE_OFFSET / TEMPERATURE_SCALE;
        }

        let dh = coefficients.enthalpy(x) - coefficients.enthalpy(x_ref);

        let molar_mass = self.molar_mass.get::<gram_per_mole>();
        let cpm_by_mass = (dh / molar_mass * 1000.0) / (x - x_ref) / 1000.0;
        let cpm_by_volume =
            (1.0 / self.standard_molar_volume.value) * (molar_mass / 1000.0) * cpm_by_mass;

        Ok(EnthalpyChange {
            dh,
            cpm_by_mass,
            cpm_by_volume,
            band,
        })
    }

    /// Typed form of [`Self::enthalpy_change`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] under the same conditions as
    /// [`Self::enthalpy_change`].
    pub fn enthalpy_change_between(
        &self,
        temperature: ThermodynamicTemperature,
        reference_temperature: ThermodynamicTemperature,
    ) -> Result<EnthalpyChange, PropertyError> {
        self.enthalpy_change(
            temperature.get::<kelvin>(),
            reference_temperature.get::<kelvin>(),
            TemperatureScale::Kelvin,
        )
    }
}

impl<Fluid> HasEnthalpy for Shomate<Fluid> {
    /// Computes enthalpy relative to the reference temperature,
    /// `h = (H(x) − H(x_ref)) / M`.
    fn enthalpy(&self, state: &State<Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        let coefficients = self.coefficients(ShomateBand::select(t)?);

        let x = t / TEMPERATURE_SCALE;
        let x_ref = self.t_ref.get::<kelvin>() / TEMPERATURE_SCALE;
        let dh = coefficients.enthalpy(x) - coefficients.enthalpy(x_ref);

        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(
            dh / self.molar_mass.get::<gram_per_mole>() * 1000.0,
        ))
    }
}

impl<Fluid> HasCp for Shomate<Fluid> {
    /// Evaluates the instantaneous `Cp(x)` of the band containing the state.
    fn cp(&self, state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        let coefficients = self.coefficients(ShomateBand::select(t)?);

        // J/(mol·K) over g/mol is kJ/(kg·K).
        Ok(SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(
            coefficients.cp(t / TEMPERATURE_SCALE) / self.molar_mass.get::<gram_per_mole>(),
        ))
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Pressure)> for Shomate<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (Fluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Fluid>, Self::Error> {
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
    use uom::si::{f64::Volume, pressure::kilopascal, volume::cubic_meter};

    /// Constant `cp` of 30 J/(mol·K) and a molar mass of 30 g/mol,
    /// i.e. exactly 1 kJ/(kg·K) in every band.
    #[derive(Debug, Clone, Copy, Default)]
    struct MockGas;

    impl ShomateFluid for MockGas {
        fn parameters() -> ShomateParameters {
            let flat = CpCoefficientSet([30.0, 0.0, 0.0, 0.0, 0.0]);
            ShomateParameters::new(
                [flat; 3],
                MolarMass::new::<gram_per_mole>(30.0),
                Volume::new::<cubic_meter>(0.0224) / AmountOfSubstance::new::<mole>(1.0),
            )
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    struct MasslessGas;

    impl ShomateFluid for MasslessGas {
        fn parameters() -> ShomateParameters {
            ShomateParameters {
                molar_mass: MolarMass::new::<gram_per_mole>(0.0),
                ..MockGas::parameters()
            }
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    struct VolumelessGas;

    impl ShomateFluid for VolumelessGas {
        fn parameters() -> ShomateParameters {
            ShomateParameters {
                standard_molar_volume: Volume::new::<cubic_meter>(0.0)
                    / AmountOfSubstance::new::<mole>(1.0),
                ..MockGas::parameters()
            }
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    struct ColdReferenceGas;

    impl ShomateFluid for ColdReferenceGas {
        fn parameters() -> ShomateParameters {
            MockGas::parameters().with_reference(ShomateReference {
                temperature: ThermodynamicTemperature::new::<kelvin>(0.0),
            })
        }
    }

    fn mock_gas_model() -> Shomate<MockGas> {
        Shomate::<MockGas>::new().expect("mock gas parameters must be valid")
    }

    #[test]
    fn flat_cp_gives_exact_mean_cp() -> Result<(), PropertyError> {
        let thermo = mock_gas_model();

        let change = thermo.enthalpy_change(400.0, 300.0, TemperatureScale::Kelvin)?;
        assert_relative_eq!(change.dh, 3.0, max_relative = 1e-12);
        assert_relative_eq!(change.cpm_by_mass, 1.0, max_relative = 1e-12);
        assert_relative_eq!(
            change.cpm_by_volume,
            0.030 / 0.0224,
            max_relative = 1e-12
        );
        assert_eq!(change.band, ShomateBand::Band0To500K);

        Ok(())
    }

    #[test]
    fn typed_accessors() -> Result<(), PropertyError> {
        let thermo = mock_gas_model();

        let change = thermo.enthalpy_change_between(
            ThermodynamicTemperature::new::<kelvin>(1500.0),
            ThermodynamicTemperature::new::<kelvin>(500.0),
        )?;
        // J/mol in SI.
        assert_relative_eq!(change.molar_enthalpy().value, 30_000.0, max_relative = 1e-12);
        assert_relative_eq!(
            change.mean_cp().get::<kilojoule_per_kilogram_kelvin>(),
            1.0,
            max_relative = 1e-12
        );

        Ok(())
    }

    #[test]
    fn coincident_temperatures_are_offset() -> Result<(), PropertyError> {
        let thermo = mock_gas_model();

        let change = thermo.enthalpy_change(25.0, 25.0, TemperatureScale::Celsius)?;
        assert_relative_eq!(change.dh, 30.0 * 1e-5, max_relative = 1e-6);
        assert_relative_eq!(change.cpm_by_mass, 1.0, max_relative = 1e-6);

        Ok(())
    }

    #[test]
    fn band_selection() {
        let cases = [
            (0.001, ShomateBand::Band0To500K),
            (499.999, ShomateBand::Band0To500K),
            (500.0, ShomateBand::Band500To2000K),
            (1999.999, ShomateBand::Band500To2000K),
            (2000.0, ShomateBand::Band2000To6000K),
            (6000.0, ShomateBand::Band2000To6000K),
        ];
        for (t, band) in cases {
            assert_eq!(ShomateBand::select(t), Ok(band), "temperature {t} K");
        }
    }

    #[test]
    fn out_of_domain_temperatures() {
        for t in [0.0, -0.001, 6000.001, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    ShomateBand::select(t),
                    Err(PropertyError::OutOfDomain { .. })
                ),
                "temperature {t} K"
            );
        }
    }

    #[test]
    fn absolute_zero_is_rejected_for_either_temperature() {
        let thermo = mock_gas_model();

        for (t, t_ref) in [(0.0, 0.0), (300.0, 0.0), (300.0, -50.0), (300.0, f64::NAN)] {
            assert!(
                matches!(
                    thermo.enthalpy_change(t, t_ref, TemperatureScale::Kelvin),
                    Err(PropertyError::OutOfDomain { .. })
                ),
                "temperature {t} K against {t_ref} K"
            );
        }
    }

    #[test]
    fn band_bounds_tile_the_domain() {
        let [low, mid, high] = ShomateBand::ALL;
        assert_eq!(low.lower_bound(), 0.0);
        assert_eq!(low.upper_bound(), mid.lower_bound());
        assert_eq!(mid.upper_bound(), high.lower_bound());
        assert_eq!(high.upper_bound(), ShomateBand::MAX_TEMPERATURE);

        assert!(!low.is_upper_inclusive());
        assert!(!mid.is_upper_inclusive());
        assert!(high.is_upper_inclusive());
    }

    #[test]
    fn enthalpy_is_zero_at_reference() -> Result<(), PropertyError> {
        let thermo = mock_gas_model();

        let state: State<MockGas> = thermo
            .state_from((
                thermo.reference_temperature(),
                Pressure::new::<kilopascal>(101.325),
            ))
            .unwrap();
        let h_ref = thermo.enthalpy(&state)?;
        assert_eq!(h_ref.get::<kilojoule_per_kilogram>(), 0.0);

        let hotter = state.with_temperature(ThermodynamicTemperature::new::<kelvin>(398.15));
        assert_relative_eq!(
            thermo.enthalpy(&hotter)?.get::<kilojoule_per_kilogram>(),
            100.0,
            max_relative = 1e-10
        );

        Ok(())
    }

    #[test]
    fn cp_is_rejected_outside_domain() {
        let thermo = mock_gas_model();

        let state = State::new(
            ThermodynamicTemperature::new::<kelvin>(7000.0),
            Pressure::new::<kilopascal>(101.325),
            MockGas,
        );
        assert!(thermo.cp(&state).is_err());
    }

    #[test]
    fn invalid_parameters() {
        assert!(matches!(
            Shomate::<MasslessGas>::new(),
            Err(ShomateParametersError::MolarMass { .. })
        ));
        assert!(matches!(
            Shomate::<VolumelessGas>::new(),
            Err(ShomateParametersError::StandardMolarVolume { .. })
        ));
        assert!(matches!(
            Shomate::<ColdReferenceGas>::new(),
            Err(ShomateParametersError::ReferenceTemperature { .. })
        ));
    }
}
