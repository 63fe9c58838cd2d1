// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The atmosphere module contains International Standard Atmosphere (ISA)
//! temperatures, airspeed conversions and the ICAO standard wind.
//!
//! Altitudes are in metres and airspeeds in km/h. The ISA variance is the
//! temperature deviation from ISA in Kelvin, `DEFAULT_ISA_VARIANCE` is the
//! ISA+15 hot day.

use crate::error::{Error, Result};
use icao_units::non_si::Knots;
use icao_units::si::{Kelvin, Metres, MetresPerSecond};

/// The ISA temperature at mean sea level.
pub const ISA_SEA_LEVEL_TEMPERATURE: Kelvin = Kelvin(288.15);

/// The temperature lapse rate in Kelvin per metre.
pub const TEMPERATURE_GRADIENT: f64 = 0.006_496;

/// The default ISA variance, ISA+15.
pub const DEFAULT_ISA_VARIANCE: f64 = 15.0;

/// The number of km/h in a knot.
pub const KMH_PER_KNOT: f64 = 1.852;

/// The number of metres in a foot.
pub const METRES_PER_FOOT: f64 = 0.3048;

const TAS_FACTOR: f64 = 171_233.0;
const TAS_EXPONENT: f64 = 2.628;
const SPEED_OF_SOUND_FACTOR: f64 = 20.046_796;

/// The temperature decrease from sea level at `altitude`.
fn temperature_decrease(altitude: Metres) -> f64 {
    TEMPERATURE_GRADIENT * altitude.0
}

fn positive_temperature(temperature: f64) -> Result<f64> {
    if 0.0 < temperature {
        Ok(temperature)
    } else {
        Err(Error::DomainError("temperature must be above absolute zero"))
    }
}

fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::DomainError("result is not finite"))
    }
}

/// The ISA temperature at `altitude`.
/// * `altitude` - the altitude.
/// * `variance` - the deviation from ISA, in Kelvin.
///
/// # Examples
/// ```
/// use nav_toolkit::Metres;
/// use nav_toolkit::atmosphere::isa_temperature;
///
/// assert_eq!(288.15, isa_temperature(Metres(0.0), 0.0).0);
/// ```
#[must_use]
pub fn isa_temperature(altitude: Metres, variance: f64) -> Kelvin {
    Kelvin(ISA_SEA_LEVEL_TEMPERATURE.0 + variance - temperature_decrease(altitude))
}

/// The ratio of true to indicated airspeed at `altitude`.
fn tas_ratio(altitude: Metres, variance: f64) -> Result<f64> {
    let standard = positive_temperature(ISA_SEA_LEVEL_TEMPERATURE.0 - temperature_decrease(altitude))?;
    let actual = positive_temperature(isa_temperature(altitude, variance).0)?;
    finite(TAS_FACTOR * libm::sqrt(actual) / libm::pow(standard, TAS_EXPONENT))
}

/// Convert an indicated airspeed to a true airspeed.
/// * `ias` - the indicated airspeed, km/h.
/// * `altitude` - the altitude.
/// * `variance` - the deviation from ISA, in Kelvin.
///
/// returns the true airspeed in km/h.
/// # Errors
/// `DomainError` if a temperature is not above absolute zero.
pub fn true_airspeed(ias: f64, altitude: Metres, variance: f64) -> Result<f64> {
    finite(ias * tas_ratio(altitude, variance)?)
}

/// Convert a true airspeed to an indicated airspeed, the inverse of
/// `true_airspeed`.
/// # Errors
/// `DomainError` if a temperature is not above absolute zero.
pub fn indicated_airspeed(tas: f64, altitude: Metres, variance: f64) -> Result<f64> {
    finite(tas / tas_ratio(altitude, variance)?)
}

/// Convert km/h to knots.
#[must_use]
pub fn knots(kmh: f64) -> Knots {
    Knots(kmh / KMH_PER_KNOT)
}

/// Convert knots to km/h.
#[must_use]
pub fn kmh(speed: Knots) -> f64 {
    speed.0 * KMH_PER_KNOT
}

/// Convert a vertical speed in metres per second to feet per minute.
#[must_use]
pub fn feet_per_minute(speed: MetresPerSecond) -> f64 {
    speed.0 * 60.0 / METRES_PER_FOOT
}

/// Convert a vertical speed in feet per minute to metres per second.
#[must_use]
pub fn metres_per_second(fpm: f64) -> MetresPerSecond {
    MetresPerSecond(fpm * METRES_PER_FOOT / 60.0)
}

/// The ICAO standard wind speed at `altitude`, in km/h.
#[must_use]
pub fn icao_standard_wind(altitude: Metres) -> f64 {
    12.0 * altitude.0 * 0.001 + 87.0
}

/// The speed of sound at `altitude`.
/// # Errors
/// `DomainError` if the temperature is not above absolute zero.
pub fn speed_of_sound(altitude: Metres, variance: f64) -> Result<MetresPerSecond> {
    let temperature = positive_temperature(isa_temperature(altitude, variance).0)?;
    Ok(MetresPerSecond(SPEED_OF_SOUND_FACTOR * libm::sqrt(temperature)))
}

/// The Mach number of an indicated airspeed at `altitude`, or the speed of
/// sound in m/s if `ias` is `None`. An `ias` of `Some(0.0)` is Mach 0.
/// * `altitude` - the altitude.
/// * `ias` - the indicated airspeed, km/h.
/// * `variance` - the deviation from ISA, in Kelvin.
///
/// # Errors
/// `DomainError` if a temperature is not above absolute zero.
///
/// # Examples
/// ```
/// use nav_toolkit::Metres;
/// use nav_toolkit::atmosphere::{mach_number, DEFAULT_ISA_VARIANCE};
///
/// let mach = mach_number(Metres(3000.0), Some(500.0), DEFAULT_ISA_VARIANCE).unwrap();
/// assert!((mach - 0.490_067_6).abs() < 1e-7);
/// ```
pub fn mach_number(altitude: Metres, ias: Option<f64>, variance: f64) -> Result<f64> {
    let sonic_speed = speed_of_sound(altitude, variance)?;
    match ias {
        None => Ok(sonic_speed.0),
        Some(ias) => {
            let tas = true_airspeed(ias, altitude, variance)?;
            finite(tas / (sonic_speed.0 * 3.6))
        }
    }
}
