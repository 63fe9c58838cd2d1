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

//! The turn module contains the turn performance geometry of procedure
//! design: turn rate and radius for a bank angle, the signed turn angle
//! between two headings, linear turn anticipation and the minimum
//! stabilizing distance between turns.
//!
//! Airspeeds are true airspeeds in km/h unless stated otherwise.

use crate::atmosphere::true_airspeed;
use crate::error::{Error, Result};
use angle_sc::Degrees;
use icao_units::si::Metres;

/// The default bank angle of a turn.
pub const DEFAULT_BANK_ANGLE: Degrees = Degrees(25.0);

/// Turns smaller than this are stabilized as if they were this large.
pub const MSD_MINIMUM_TURN_ANGLE: Degrees = Degrees(50.0);

/// The angle at which a flyover turn rejoins the outbound track.
pub const FLYOVER_LEAD_ANGLE: Degrees = Degrees(30.0);

/// The bank angle of the recovery turn after a flyover waypoint.
pub const FLYOVER_RECOVERY_BANK_ANGLE: Degrees = Degrees(15.0);

fn check_tas(tas: f64) -> Result<f64> {
    if tas.is_finite() && 0.0 < tas {
        Ok(tas)
    } else {
        Err(Error::DomainError("true airspeed must be positive"))
    }
}

fn check_bank(bank: Degrees) -> Result<f64> {
    if 0.0 < bank.0 && bank.0 < 90.0 {
        Ok(bank.0.to_radians())
    } else {
        Err(Error::DomainError("bank angle must be between 0 and 90 degrees"))
    }
}

/// The rate of turn at a bank angle, in degrees per second.
/// * `tas` - the true airspeed, km/h.
/// * `bank` - the bank angle.
///
/// # Errors
/// `DomainError` if `tas` is not positive or `bank` is not in (0, 90).
pub fn turn_rate(tas: f64, bank: Degrees) -> Result<f64> {
    let tas = check_tas(tas)?;
    let bank = check_bank(bank)?;
    Ok(6355.0 * libm::tan(bank) / (core::f64::consts::PI * tas))
}

/// The radius of a turn at a bank angle in still air.
/// * `tas` - the true airspeed, km/h.
/// * `bank` - the bank angle.
///
/// # Errors
/// `DomainError` if `tas` is not positive or `bank` is not in (0, 90).
///
/// # Examples
/// ```
/// use nav_toolkit::Degrees;
/// use nav_toolkit::turn::turn_radius;
///
/// let radius = turn_radius(300.0, Degrees(25.0)).unwrap();
/// assert!((radius.0 - 1518.533_617_984_738).abs() < 1e-6);
/// ```
pub fn turn_radius(tas: f64, bank: Degrees) -> Result<Metres> {
    let rate = turn_rate(tas, bank)?;
    let kilometres = tas / (20.0 * core::f64::consts::PI * rate);
    Ok(Metres(kilometres * 1000.0))
}

/// The signed angle of a turn from `heading_start` to `heading_end`.
/// Positive is a right turn, negative a left turn.
///
/// # Examples
/// ```
/// use nav_toolkit::Degrees;
/// use nav_toolkit::turn::signed_turn_angle;
///
/// assert_eq!(Degrees(20.0), signed_turn_angle(Degrees(350.0), Degrees(10.0)));
/// assert_eq!(Degrees(-20.0), signed_turn_angle(Degrees(10.0), Degrees(350.0)));
/// ```
#[must_use]
pub fn signed_turn_angle(heading_start: Degrees, heading_end: Degrees) -> Degrees {
    let delta = heading_end.0 - heading_start.0;
    if 180.0 < delta {
        Degrees(delta - 360.0)
    } else if 180.0 < heading_start.0 - heading_end.0 {
        Degrees(delta + 360.0)
    } else {
        Degrees(delta)
    }
}

/// The linear turn anticipation (LTA): the distance before a fly-by
/// waypoint at which a turn of `angle` starts.
#[must_use]
pub fn linear_turn_anticipation(radius: Metres, angle: Degrees) -> Metres {
    Metres(radius.0 * libm::tan(libm::fabs(angle.0).to_radians() / 2.0))
}

/// The minimum stabilizing distance (MSD) of a turn: the shortest leg
/// after a waypoint on which the aircraft can complete the turn and
/// stabilize on the next track.
/// * `ias` - the indicated airspeed, km/h.
/// * `altitude` - the altitude.
/// * `heading_start`, `heading_end` - the headings before and after the turn.
/// * `bank` - the bank angle.
/// * `variance` - the deviation from ISA, in Kelvin.
/// * `flyover` - whether the waypoint is a flyover waypoint.
///
/// # Errors
/// `DomainError` if the true airspeed is not positive or `bank` is not in
/// (0, 90).
pub fn minimum_stabilizing_distance(
    ias: f64,
    altitude: Metres,
    heading_start: Degrees,
    heading_end: Degrees,
    bank: Degrees,
    variance: f64,
    flyover: bool,
) -> Result<Metres> {
    let tas = true_airspeed(ias, altitude, variance)?;
    let r1 = turn_radius(tas, bank)?.0 / 1000.0;

    let angle = libm::fabs(signed_turn_angle(heading_start, heading_end).0);
    let theta = angle.max(MSD_MINIMUM_TURN_ANGLE.0).to_radians();

    let kilometres = if flyover {
        let r2 = turn_radius(tas, FLYOVER_RECOVERY_BANK_ANGLE)?.0 / 1000.0;
        let a = FLYOVER_LEAD_ANGLE.0.to_radians();
        let l1 = r1 * libm::sin(theta);
        let l2 = r1 * libm::cos(theta) * libm::tan(a);
        let l3 = r1
            * (1.0 / libm::sin(a)
                - 2.0 * libm::cos(theta) / libm::sin(core::f64::consts::FRAC_PI_2 - a));
        let l4 = r2 * libm::tan(a / 2.0);
        let l5 = 10.0 * tas / 3600.0;
        l1 + l2 + l3 + l4 + l5
    } else {
        r1 * libm::tan(theta / 2.0) + 5.0 * tas / 3600.0
    };
    Ok(Metres(kilometres * 1000.0))
}
