//! International Standard Atmosphere model for the troposphere.
//!
//! Every performance figure starts from the state of the air at some
//! altitude. This module provides the simplified ISA model used across the
//! library: a linear temperature lapse floored at the tropopause, pressure
//! from the barometric power law, and density from the ideal gas law.

/// Physical constants for the atmosphere model.
pub mod constants {
    /// Sea-level standard temperature (K)
    pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;

    /// Sea-level standard pressure (Pa)
    pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.0;

    /// Temperature lapse rate in the troposphere (K/m)
    pub const LAPSE_RATE_K_PER_M: f64 = 0.0065;

    /// Temperature floor at the tropopause (K)
    pub const TROPOPAUSE_TEMPERATURE_K: f64 = 216.65;

    /// Specific gas constant for dry air (J/(kg·K))
    pub const GAS_CONSTANT_AIR: f64 = 287.0528;

    /// Standard gravitational acceleration (m/s²)
    pub const STANDARD_GRAVITY: f64 = 9.80665;
}

/// State of the air at a given altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    /// Static air temperature (K)
    pub temperature_k: f64,
    /// Static pressure (Pa)
    pub pressure_pa: f64,
    /// Air density (kg/m³)
    pub density_kg_m3: f64,
}

/// Compute air temperature, pressure, and density at the given altitude.
///
/// The calculation follows the ISA troposphere model:
/// ```text
/// T   = max(216.65, T0 - L*h)
/// P   = P0 * (T/T0)^(g / (L*R))
/// rho = P / (R*T)
/// ```
///
/// Negative altitudes are clamped to sea level. Above the tropopause the
/// temperature floor holds `T` constant, so pressure and density are
/// likewise constant there; the model does not switch to the isothermal
/// exponential branch.
///
/// # Examples
///
/// ```
/// use warbird_lib::atmosphere::air_properties_at;
///
/// let sea_level = air_properties_at(0.0);
/// assert!((sea_level.temperature_k - 288.15).abs() < 1e-9);
/// assert!((sea_level.density_kg_m3 - 1.225).abs() < 1e-3);
/// ```
pub fn air_properties_at(altitude_m: f64) -> AirProperties {
    let altitude = altitude_m.max(0.0);

    let temperature_k = (constants::SEA_LEVEL_TEMPERATURE_K
        - constants::LAPSE_RATE_K_PER_M * altitude)
        .max(constants::TROPOPAUSE_TEMPERATURE_K);

    let exponent = constants::STANDARD_GRAVITY
        / (constants::LAPSE_RATE_K_PER_M * constants::GAS_CONSTANT_AIR);
    let pressure_pa = constants::SEA_LEVEL_PRESSURE_PA
        * (temperature_k / constants::SEA_LEVEL_TEMPERATURE_K).powf(exponent);

    let density_kg_m3 = pressure_pa / (constants::GAS_CONSTANT_AIR * temperature_k);

    AirProperties {
        temperature_k,
        pressure_pa,
        density_kg_m3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_matches_standard_values() {
        let air = air_properties_at(0.0);

        assert!((air.temperature_k - 288.15).abs() < 1e-9);
        assert!((air.pressure_pa - 101_325.0).abs() < 1e-6);
        // Standard sea-level density is 1.225 kg/m³
        assert!((air.density_kg_m3 - 1.225).abs() < 1e-4);
    }

    #[test]
    fn negative_altitude_clamps_to_sea_level() {
        let below = air_properties_at(-500.0);
        let sea_level = air_properties_at(0.0);

        assert_eq!(below, sea_level);
    }

    #[test]
    fn temperature_lapses_linearly_in_troposphere() {
        let air = air_properties_at(5500.0);

        // 288.15 - 0.0065 * 5500 = 252.4 K
        assert!((air.temperature_k - 252.4).abs() < 1e-9);
    }

    #[test]
    fn density_at_fighter_altitudes_is_plausible() {
        // Roughly half sea-level density around 5500 m
        let air = air_properties_at(5500.0);
        assert!((air.density_kg_m3 - 0.697).abs() < 0.005);
    }

    #[test]
    fn tropopause_pressure_matches_standard_atmosphere() {
        let air = air_properties_at(11_000.0);

        assert!((air.temperature_k - 216.65).abs() < 1e-9);
        // ISA tabulates 22632 Pa and 0.3639 kg/m³ at 11 km
        assert!((air.pressure_pa - 22_632.0).abs() < 50.0);
        assert!((air.density_kg_m3 - 0.3639).abs() < 0.001);
    }

    #[test]
    fn temperature_never_drops_below_tropopause_floor() {
        for altitude in [11_000.0, 12_500.0, 15_000.0, 20_000.0] {
            let air = air_properties_at(altitude);
            assert!(air.temperature_k >= constants::TROPOPAUSE_TEMPERATURE_K);
        }
    }

    #[test]
    fn temperature_is_non_increasing_with_altitude() {
        let mut previous = air_properties_at(0.0).temperature_k;
        for step in 1..=60 {
            let current = air_properties_at(f64::from(step) * 250.0).temperature_k;
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn properties_are_constant_above_the_tropopause() {
        // The floored temperature freezes pressure and density as well; the
        // model does not switch to the isothermal exponential branch.
        let at_tropopause = air_properties_at(11_000.0);
        let above = air_properties_at(15_000.0);

        assert_eq!(at_tropopause, above);
    }
}
