//! Prints water and nitrogen enthalpies for a fixed set of inputs.
//!
//! Run with `cargo run --example enthalpy_report`.

use enthalpy_models::support::{
    thermo::{PropertyError, fluid::nitrogen::enthalpy_n2, model::if97_region1::enthalpy_region1},
    units::TemperatureScale,
};

fn main() -> Result<(), PropertyError> {
    let (t, p) = (500.0, 3.0);
    println!(
        "water, IF97 Region 1 at {t} K, {p} MPa: h = {:.6} kJ/kg",
        enthalpy_region1(t, p)
    );

    let (t, t_ref) = (1800.0, 298.15);
    let change = enthalpy_n2(t, t_ref, TemperatureScale::Kelvin)?;
    println!("nitrogen from {t_ref} K to {t} K ({:?}):", change.band);
    println!("  dH            = {:.6} kJ/mol", change.dh);
    println!("  cpm (mass)    = {:.6} kJ/(kg·K)", change.cpm_by_mass);
    println!("  cpm (volume)  = {:.6} kJ/(m³·K)", change.cpm_by_volume);

    Ok(())
}
