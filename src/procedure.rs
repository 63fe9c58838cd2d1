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

//! The procedure module contains the waypoints and procedure points of an
//! instrument flight procedure and calculates its turn corrected length,
//! the TRD.
//!
//! A procedure is an ordered slice of `ProcedurePoint`s. Each procedure
//! point borrows a published `WayPoint`, so several procedures may share the
//! same waypoints.
//!
//! Each leg between consecutive points is solved on the ellipsoid. The turn
//! at an interior point shortens the legs on either side of it by the
//! linear turn anticipation (LTA) and lengthens each by half of the turn's
//! arc:
//!
//! ```text
//! d - r1 * tan(|t1| / 2) - r2 * tan(|t2| / 2) + PI * r1 * |t1| / 360 + PI * r2 * |t2| / 360
//! ```
//!
//! where `t1`, `t2` are the turn angles in degrees at the start and end of
//! the leg and `r1`, `r2` the turn radii there. A turn angle is taken
//! between the initial headings of the legs into and out of its point.

use crate::atmosphere::true_airspeed;
use crate::error::{Error, Result};
use crate::point::{normalise_azimuth, GeographicPoint};
use crate::turn::{
    linear_turn_anticipation, minimum_stabilizing_distance, signed_turn_angle, turn_radius,
    DEFAULT_BANK_ANGLE,
};
use crate::{Ellipsoid, GeodesicSegment};
use angle_sc::Degrees;
use icao_units::si::Metres;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use unit_sphere::LatLong;

/// A published point of a procedure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WayPointFields")]
pub struct WayPoint {
    codename: String,
    position: GeographicPoint,
    area_navigation: bool,
}

#[derive(Deserialize)]
struct WayPointFields {
    codename: String,
    position: GeographicPoint,
    area_navigation: bool,
}

impl TryFrom<WayPointFields> for WayPoint {
    type Error = Error;

    fn try_from(fields: WayPointFields) -> Result<Self> {
        Self::new(fields.codename, fields.position, fields.area_navigation)
    }
}

impl WayPoint {
    /// Constructor.
    /// * `codename` - the published name, e.g. `"ABVAN"`.
    /// * `position` - the position of the waypoint.
    /// * `area_navigation` - whether it is an RNAV waypoint.
    ///
    /// # Errors
    /// `InvalidWayPoint` if `codename` is blank.
    pub fn new(
        codename: impl Into<String>,
        position: GeographicPoint,
        area_navigation: bool,
    ) -> Result<Self> {
        let codename = codename.into();
        if codename.trim().is_empty() {
            return Err(Error::InvalidWayPoint(codename));
        }
        Ok(Self {
            codename,
            position,
            area_navigation,
        })
    }

    #[must_use]
    pub fn codename(&self) -> &str {
        &self.codename
    }

    #[must_use]
    pub const fn position(&self) -> &GeographicPoint {
        &self.position
    }

    #[must_use]
    pub const fn is_area_navigation(&self) -> bool {
        self.area_navigation
    }
}

/// A point of a procedure: a waypoint with the altitude window, speed limit
/// and turn to fly at it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcedurePoint<'a> {
    waypoint: &'a WayPoint,
    minimum_altitude: Metres,
    maximum_altitude: Metres,
    /// The indicated airspeed limit, km/h.
    speed_limit: f64,
    bank_angle: Degrees,
    flyover: bool,
}

impl<'a> ProcedurePoint<'a> {
    /// Construct a fly-by `ProcedurePoint` with the default bank angle.
    /// * `waypoint` - the waypoint.
    /// * `minimum_altitude`, `maximum_altitude` - the altitude window.
    /// * `speed_limit` - the indicated airspeed limit, km/h.
    ///
    /// # Errors
    /// `InvalidAltitudeWindow` if the minimum altitude is above the maximum,
    /// `DomainError` if the speed limit is not positive.
    pub fn new(
        waypoint: &'a WayPoint,
        minimum_altitude: Metres,
        maximum_altitude: Metres,
        speed_limit: f64,
    ) -> Result<Self> {
        if minimum_altitude.0.is_nan()
            || maximum_altitude.0.is_nan()
            || minimum_altitude.0 > maximum_altitude.0
        {
            return Err(Error::InvalidAltitudeWindow {
                minimum: minimum_altitude.0,
                maximum: maximum_altitude.0,
            });
        }
        if !(speed_limit.is_finite() && 0.0 < speed_limit) {
            return Err(Error::DomainError("speed limit must be positive"));
        }
        Ok(Self {
            waypoint,
            minimum_altitude,
            maximum_altitude,
            speed_limit,
            bank_angle: DEFAULT_BANK_ANGLE,
            flyover: false,
        })
    }

    /// Set the bank angle of the turn at the point.
    /// # Errors
    /// `DomainError` unless 0 < `bank_angle` < 90.
    pub fn with_bank_angle(mut self, bank_angle: Degrees) -> Result<Self> {
        if !(0.0 < bank_angle.0 && bank_angle.0 < 90.0) {
            return Err(Error::DomainError("bank angle must be between 0 and 90 degrees"));
        }
        self.bank_angle = bank_angle;
        Ok(self)
    }

    /// Set whether the point is a flyover point.
    #[must_use]
    pub const fn with_flyover(mut self, flyover: bool) -> Self {
        self.flyover = flyover;
        self
    }

    #[must_use]
    pub const fn waypoint(&self) -> &'a WayPoint {
        self.waypoint
    }

    #[must_use]
    pub const fn minimum_altitude(&self) -> Metres {
        self.minimum_altitude
    }

    #[must_use]
    pub const fn maximum_altitude(&self) -> Metres {
        self.maximum_altitude
    }

    #[must_use]
    pub const fn speed_limit(&self) -> f64 {
        self.speed_limit
    }

    #[must_use]
    pub const fn bank_angle(&self) -> Degrees {
        self.bank_angle
    }

    #[must_use]
    pub const fn is_flyover(&self) -> bool {
        self.flyover
    }

    /// The true airspeed at the speed limit and maximum altitude, km/h.
    /// # Errors
    /// `DomainError` if the temperature at the maximum altitude is not above
    /// absolute zero.
    pub fn true_airspeed(&self, variance: f64) -> Result<f64> {
        true_airspeed(self.speed_limit, self.maximum_altitude, variance)
    }

    /// The radius of the turn at the point.
    /// # Errors
    /// `DomainError` if the true airspeed can not be calculated.
    pub fn turn_radius(&self, variance: f64) -> Result<Metres> {
        turn_radius(self.true_airspeed(variance)?, self.bank_angle)
    }
}

/// A leg of a procedure, between two consecutive procedure points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    from: String,
    to: String,
    distance: Metres,
    initial_azimuth: Degrees,
    final_azimuth: Degrees,
    start_turn_angle: Degrees,
    end_turn_angle: Degrees,
    start_anticipation: Metres,
    end_anticipation: Metres,
    corrected_length: Metres,
    minimum_stabilizing_distance: Option<Metres>,
}

impl Leg {
    /// The codename of the waypoint at the start of the leg.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The codename of the waypoint at the end of the leg.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// The geodesic distance between the waypoints.
    #[must_use]
    pub const fn distance(&self) -> Metres {
        self.distance
    }

    /// The azimuth of the leg at its start.
    #[must_use]
    pub const fn initial_azimuth(&self) -> Degrees {
        self.initial_azimuth
    }

    /// The azimuth of the leg at its end.
    #[must_use]
    pub const fn final_azimuth(&self) -> Degrees {
        self.final_azimuth
    }

    /// The signed turn angle onto the leg, from the initial azimuth of the
    /// previous leg to the initial azimuth of this one. Zero for the first leg.
    #[must_use]
    pub const fn start_turn_angle(&self) -> Degrees {
        self.start_turn_angle
    }

    /// The signed turn angle off the leg, zero for the last leg.
    #[must_use]
    pub const fn end_turn_angle(&self) -> Degrees {
        self.end_turn_angle
    }

    /// The part of the leg flown in the turn onto it.
    #[must_use]
    pub const fn start_anticipation(&self) -> Metres {
        self.start_anticipation
    }

    /// The part of the leg flown in the turn off it.
    #[must_use]
    pub const fn end_anticipation(&self) -> Metres {
        self.end_anticipation
    }

    /// The length of the leg corrected for the turns at either end.
    #[must_use]
    pub const fn corrected_length(&self) -> Metres {
        self.corrected_length
    }

    /// The minimum stabilizing distance required after the turn onto the
    /// leg, `None` for the first leg.
    #[must_use]
    pub const fn minimum_stabilizing_distance(&self) -> Option<Metres> {
        self.minimum_stabilizing_distance
    }

    /// Whether the leg is long enough to stabilize after the turn onto it
    /// before the turn off it starts.
    #[must_use]
    pub fn is_stabilized(&self) -> bool {
        self.minimum_stabilizing_distance
            .map_or(true, |msd| msd.0 <= self.distance.0 - self.end_anticipation.0)
    }
}

/// The geodesic between two procedure points: distance and the azimuths at
/// its start and end.
fn solve_leg(
    from: &ProcedurePoint,
    to: &ProcedurePoint,
    ellipsoid: &Ellipsoid,
) -> (Metres, Degrees, Degrees) {
    let segment = GeodesicSegment::between_positions(
        &LatLong::from(from.waypoint().position()),
        &LatLong::from(to.waypoint().position()),
        ellipsoid,
    );
    (
        segment.length(),
        normalise_azimuth(Degrees::from(segment.azi())),
        normalise_azimuth(Degrees::from(segment.end_azimuth())),
    )
}

/// Calculate the legs of a procedure.
/// * `points` - the procedure points, in order.
/// * `ellipsoid` - the `Ellipsoid` to solve the legs on.
/// * `variance` - the deviation from ISA, in Kelvin.
///
/// # Errors
/// `InvalidProcedure` if there are fewer than 2 points, `DomainError` if a
/// turn radius can not be calculated.
pub fn calculate_legs(
    points: &[ProcedurePoint],
    ellipsoid: &Ellipsoid,
    variance: f64,
) -> Result<Vec<Leg>> {
    if points.len() < 2 {
        return Err(Error::InvalidProcedure(points.len()));
    }

    let geodesics: Vec<(Metres, Degrees, Degrees)> = points
        .windows(2)
        .map(|pair| solve_leg(&pair[0], &pair[1], ellipsoid))
        .collect();

    // the turn at each point, between the initial headings of the legs into
    // and out of it
    let last = points.len() - 1;
    let turn_angles: Vec<Degrees> = (0..points.len())
        .map(|i| {
            if i == 0 || i == last {
                Degrees(0.0)
            } else {
                signed_turn_angle(geodesics[i - 1].1, geodesics[i].1)
            }
        })
        .collect();

    let radii = points
        .iter()
        .map(|point| point.turn_radius(variance))
        .collect::<Result<Vec<Metres>>>()?;

    let mut legs = Vec::with_capacity(last);
    for i in 1..=last {
        let (distance, initial_azimuth, final_azimuth) = geodesics[i - 1];
        let start_turn = libm::fabs(turn_angles[i - 1].0);
        let end_turn = libm::fabs(turn_angles[i].0);

        let start_anticipation = linear_turn_anticipation(radii[i - 1], turn_angles[i - 1]);
        let end_anticipation = linear_turn_anticipation(radii[i], turn_angles[i]);
        let half_arcs = core::f64::consts::PI * (radii[i - 1].0 * start_turn + radii[i].0 * end_turn)
            / 360.0;
        let corrected_length =
            Metres(distance.0 - start_anticipation.0 - end_anticipation.0 + half_arcs);

        let msd = if i == 1 {
            None
        } else {
            let point = &points[i - 1];
            Some(minimum_stabilizing_distance(
                point.speed_limit(),
                point.maximum_altitude(),
                geodesics[i - 2].1,
                initial_azimuth,
                point.bank_angle(),
                variance,
                point.is_flyover(),
            )?)
        };

        let leg = Leg {
            from: points[i - 1].waypoint().codename().to_owned(),
            to: points[i].waypoint().codename().to_owned(),
            distance,
            initial_azimuth,
            final_azimuth,
            start_turn_angle: turn_angles[i - 1],
            end_turn_angle: turn_angles[i],
            start_anticipation,
            end_anticipation,
            corrected_length,
            minimum_stabilizing_distance: msd,
        };
        debug!(
            "leg {} -> {}: distance {:.3} m, corrected {:.3} m",
            leg.from, leg.to, leg.distance.0, leg.corrected_length.0
        );
        legs.push(leg);
    }

    Ok(legs)
}

/// Calculate the turn corrected length of a procedure, its TRD.
/// * `points` - the procedure points, in order.
/// * `ellipsoid` - the `Ellipsoid` to solve the legs on.
/// * `variance` - the deviation from ISA, in Kelvin.
///
/// # Errors
/// `InvalidProcedure` if there are fewer than 2 points, `DomainError` if a
/// turn radius can not be calculated.
pub fn total_route_distance(
    points: &[ProcedurePoint],
    ellipsoid: &Ellipsoid,
    variance: f64,
) -> Result<Metres> {
    let legs = calculate_legs(points, ellipsoid, variance)?;
    let total = legs.iter().map(|leg| leg.corrected_length.0).sum();
    trace!("TRD of {} legs: {total:.3} m", legs.len());
    Ok(Metres(total))
}
