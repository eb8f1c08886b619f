//! Engine power delivery versus altitude.

use crate::atmosphere::air_properties_at;
use crate::craft::profile::SuperchargerRating;

/// Engine shaft power delivered at the given altitude.
///
/// The model scales rated sea-level power with air density and lets a
/// supercharger hold full power up to its rated altitude:
///
/// ```text
/// no supercharger:      P = P0 * rho(h) / rho(0)
/// h <= rated altitude:  P = P0
/// h >  rated altitude:  P = P0 * rho(h) / rho(rated)
/// ```
///
/// The result is a power curve with a knee at the rated altitude: flat
/// below it, then falling off at the naturally-aspirated rate from that
/// point upward.
///
/// # Examples
///
/// ```
/// use warbird_lib::craft::SuperchargerRating;
/// use warbird_lib::perf::power_at_altitude;
///
/// let rating = SuperchargerRating { rated_altitude_m: 5500.0 };
/// let at_rating = power_at_altitude(1450.0, 5500.0, Some(&rating));
/// assert!((at_rating - 1450.0).abs() < 1e-9);
/// ```
pub fn power_at_altitude(
    base_power_hp: f64,
    altitude_m: f64,
    supercharger: Option<&SuperchargerRating>,
) -> f64 {
    let density = air_properties_at(altitude_m).density_kg_m3;

    match supercharger {
        None => base_power_hp * density / air_properties_at(0.0).density_kg_m3,
        Some(rating) if altitude_m <= rating.rated_altitude_m => base_power_hp,
        Some(rating) => {
            base_power_hp * density / air_properties_at(rating.rated_altitude_m).density_kg_m3
        }
    }
}
