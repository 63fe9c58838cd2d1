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

//! nav-toolkit
//!
//! A library of air navigation procedure design calculations:
//!
//! - the direct and inverse geodesic problems on a reference ellipsoid,
//!   [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//!   or PZ-90.11;
//! - International Standard Atmosphere temperatures and airspeed conversions;
//! - turn performance: turn rate and radius, linear turn anticipation and
//!   minimum stabilizing distance;
//! - the turn corrected length of a procedure, its TRD.
//!
//! ## Geodesics
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic segment](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//! Following Charles Karney's [GeographicLib](https://geographiclib.sourceforge.io/),
//! a geodesic segment is modelled as a great circle arc on an auxiliary
//! sphere, together with the series that convert latitudes, longitudes and
//! distances between the sphere and the ellipsoid.
//!
//! `direct_problem` finds the destination at an azimuth and distance from a
//! position. `inverse_problem` finds the azimuth and distance between two
//! positions.
//!
//! ```
//! use nav_toolkit::*;
//!
//! let origin = GeographicPoint::default();
//! let course = PolarPoint::new(Degrees(90.0), Metres(111_320.0)).unwrap();
//! let destination = direct_problem(&origin, &course, &WGS84_ELLIPSOID);
//!
//! assert!(destination.latitude().0.abs() < 1e-9);
//! assert!((destination.longitude().0 - 1.0).abs() < 1e-5);
//! ```
//!
//! ## Design
//!
//! Angles are `angle_sc::Degrees` at the interface and `angle_sc::Angle`
//! (a sine and cosine pair) inside the calculations. Distances and altitudes
//! are `icao_units::si::Metres`. Airspeeds are in km/h.
//!
//! The `Ellipsoid` struct holds the constants of an ellipsoid of revolution.
//! The statics `WGS84_ELLIPSOID` and `PZ90_ELLIPSOID` are selected by the
//! `Datum` of a `GeographicPoint`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`
//!   and perform great-circle calculations;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`,
//!   `Kelvin` and `Knots`;
//! - [log](https://crates.io/crates/log) - the calculations log through the
//!   `log` facade, the library never installs a logger.

pub mod atmosphere;
pub mod ellipsoid;
pub mod error;
pub mod geodesic;
pub mod point;
pub mod procedure;
pub mod turn;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use ellipsoid::Datum;
pub use error::{Error, Result};
pub use icao_units::non_si::{Feet, Knots, NauticalMiles};
pub use icao_units::si::{Kelvin, Metres, MetresPerSecond};
pub use point::{CartesianPoint, GeographicPoint, PolarPoint};
pub use procedure::{calculate_legs, total_route_distance, Leg, ProcedurePoint, WayPoint};
pub use unit_sphere::LatLong;

use angle_sc::trig;
use lazy_static::lazy_static;
use unit_sphere::great_circle;

/// An ellipsoid of revolution, defined by its Semimajor axis and flattening,
/// with the constants of Karney's geodesic series.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis.
    a: Metres,
    /// The flattening, a ratio.
    f: f64,

    /// The Semiminor axis.
    b: Metres,
    one_minus_f: f64,
    recip_one_minus_f: f64,
    /// The square of the Eccentricity.
    e_2: f64,
    /// The square of the second Eccentricity.
    ep_2: f64,
    /// The third flattening.
    n: f64,

    /// The A3 series coefficients.
    a3: [f64; 6],
    /// The C3x series coefficients.
    c3x: [f64; 15],
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis.
    /// * `f` - the flattening, a ratio.
    #[must_use]
    pub fn new(a: Metres, f: f64) -> Self {
        let one_minus_f = 1.0 - f;
        let n = ellipsoid::calculate_3rd_flattening(f);
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            one_minus_f,
            recip_one_minus_f: 1.0 / one_minus_f,
            e_2: ellipsoid::calculate_sq_eccentricity(f),
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
            n,
            a3: ellipsoid::coefficients::evaluate_coeffs_a3(n),
            c3x: ellipsoid::coefficients::evaluate_coeffs_c3x(n),
        }
    }

    /// The WGS-84 `Ellipsoid`.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The PZ-90.11 `Ellipsoid`.
    #[must_use]
    pub fn pz90() -> Self {
        Self::new(ellipsoid::pz90::A, ellipsoid::pz90::F)
    }

    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    #[must_use]
    pub const fn recip_one_minus_f(&self) -> f64 {
        self.recip_one_minus_f
    }

    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    #[must_use]
    pub const fn n(&self) -> f64 {
        self.n
    }

    /// Calculate epsilon, the small positive variable of the series expansions.
    /// * `clairaut` - Clairaut's constant.
    #[must_use]
    pub fn calculate_epsilon(&self, clairaut: trig::UnitNegRange) -> f64 {
        ellipsoid::calculate_epsilon(clairaut, self.ep_2)
    }

    /// Evaluate the A3 series at `eps`.
    #[must_use]
    pub fn calculate_a3f(&self, eps: f64) -> f64 {
        ellipsoid::coefficients::evaluate_polynomial(&self.a3, eps)
    }

    /// The scale factor between geodesic and great circle longitudes.
    /// * `clairaut` - Clairaut's constant.
    /// * `eps` - epsilon
    #[must_use]
    pub fn calculate_a3c(&self, clairaut: trig::UnitNegRange, eps: f64) -> f64 {
        self.f * clairaut.0 * self.calculate_a3f(eps)
    }

    /// The `C3[l]` Fourier coefficients at `eps`.
    #[must_use]
    pub fn calculate_c3y(&self, eps: f64) -> [f64; 6] {
        ellipsoid::coefficients::evaluate_coeffs_c3y(&self.c3x, eps)
    }

    /// Convert a geodetic latitude to a parametric latitude on the
    /// auxiliary sphere.
    #[must_use]
    pub fn calculate_parametric_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_parametric_latitude(lat, self.one_minus_f)
    }

    /// Convert a parametric latitude on the auxiliary sphere to a
    /// geodetic latitude.
    #[must_use]
    pub fn calculate_geodetic_latitude(&self, beta: Angle) -> Angle {
        ellipsoid::calculate_geodetic_latitude(beta, self.one_minus_f)
    }
}

lazy_static! {
    /// The WGS-84 `Ellipsoid`.
    pub static ref WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();

    /// The PZ-90.11 `Ellipsoid`.
    pub static ref PZ90_ELLIPSOID: Ellipsoid = Ellipsoid::pz90();
}

/// A geodesic segment on the surface of an ellipsoid, represented by a
/// great circle arc on the auxiliary sphere.
#[derive(Clone, Debug, PartialEq)]
pub struct GeodesicSegment<'a> {
    /// The parametric start latitude on the auxiliary sphere.
    beta: Angle,
    /// The start longitude.
    lon: Angle,
    /// The start azimuth.
    azi: Angle,
    /// The azimuth at the Equator.
    azi0: Angle,
    /// The arc distance from the Northbound Equator crossing to the start.
    sigma1: Angle,
    /// The arc length on the auxiliary sphere.
    arc_length: Radians,
    eps: f64,
    /// Scale factor of the distance series.
    a1: f64,
    /// Scale factor of the longitude series.
    a3c: f64,
    /// The distance series at the start.
    b11: Radians,
    ellipsoid: &'a Ellipsoid,
}

impl Validate for GeodesicSegment<'_> {
    /// Whether the start latitude is valid and 0 <= `arc_length` <= π.
    fn is_valid(&self) -> bool {
        self.beta.cos().0 >= 0.0 && (0.0..=core::f64::consts::PI).contains(&self.arc_length.0)
    }
}

impl<'a> GeodesicSegment<'a> {
    /// Constructor.
    /// * `beta` - the start parametric latitude on the auxiliary sphere.
    /// * `lon` - the start longitude.
    /// * `azi` - the start azimuth.
    /// * `arc_length` - the arc length on the auxiliary sphere.
    /// * `ellipsoid` - the `Ellipsoid`.
    #[must_use]
    pub fn new(
        beta: Angle,
        lon: Angle,
        azi: Angle,
        arc_length: Radians,
        ellipsoid: &'a Ellipsoid,
    ) -> Self {
        let clairaut = trig::UnitNegRange(azi.sin().0 * beta.cos().0);
        let azi0 = Angle::new(clairaut, trig::swap_sin_cos(clairaut));
        let sigma1 = Angle::from_y_x(beta.sin().0, beta.cos().0 * azi.cos().0);

        let eps = ellipsoid.calculate_epsilon(azi0.sin());
        let c1 = ellipsoid::coefficients::evaluate_coeffs_c1(eps);
        Self {
            beta,
            lon,
            azi,
            azi0,
            sigma1,
            arc_length,
            eps,
            a1: ellipsoid::coefficients::evaluate_a1(eps) + 1.0,
            a3c: ellipsoid.calculate_a3c(azi0.sin(), eps),
            b11: ellipsoid::coefficients::sin_cos_series(&c1, sigma1),
            ellipsoid,
        }
    }

    /// Construct a `GeodesicSegment` from a start position, azimuth and arc
    /// length on the auxiliary sphere.
    #[must_use]
    pub fn from_lat_lon_azi_arc_length(
        a: &LatLong,
        azimuth: Angle,
        arc_length: Radians,
        ellipsoid: &'a Ellipsoid,
    ) -> Self {
        Self::new(
            ellipsoid.calculate_parametric_latitude(Angle::from(a.lat())),
            Angle::from(a.lon()),
            azimuth,
            arc_length,
            ellipsoid,
        )
    }

    /// Construct a `GeodesicSegment` from a start position, azimuth and
    /// length on the ellipsoid, the "direct" problem.
    #[must_use]
    pub fn from_lat_lon_azi_length(
        a: &LatLong,
        azimuth: Angle,
        length: Metres,
        ellipsoid: &'a Ellipsoid,
    ) -> Self {
        let mut segment = Self::from_lat_lon_azi_arc_length(a, azimuth, Radians(0.0), ellipsoid);
        segment.arc_length = segment.metres_to_radians(length);
        segment
    }

    /// Construct the `GeodesicSegment` between a pair of positions, the
    /// "inverse" problem.
    #[must_use]
    pub fn between_positions(a: &LatLong, b: &LatLong, ellipsoid: &'a Ellipsoid) -> Self {
        let (azimuth, arc_length) = geodesic::calculate_azimuth_aux_length(a, b, ellipsoid);
        // the longitude of a pole is taken from the other position
        let start = if Angle::from(a.lat()).cos().0 < great_circle::MIN_VALUE {
            LatLong::new(a.lat(), b.lon())
        } else {
            *a
        };
        Self::from_lat_lon_azi_arc_length(&start, azimuth, arc_length, ellipsoid)
    }

    #[must_use]
    pub const fn beta(&self) -> Angle {
        self.beta
    }

    #[must_use]
    pub const fn lon(&self) -> Angle {
        self.lon
    }

    /// The start azimuth.
    #[must_use]
    pub const fn azi(&self) -> Angle {
        self.azi
    }

    /// The arc length on the auxiliary sphere.
    #[must_use]
    pub const fn arc_length(&self) -> Radians {
        self.arc_length
    }

    #[must_use]
    pub const fn ellipsoid(&self) -> &Ellipsoid {
        self.ellipsoid
    }

    /// Convert a distance along the geodesic to an arc distance on the
    /// auxiliary sphere.
    #[must_use]
    pub fn metres_to_radians(&self, distance: Metres) -> Radians {
        if libm::fabs(distance.0) < great_circle::MIN_VALUE {
            Radians(0.0)
        } else {
            let tau12 = Radians(distance.0 / (self.ellipsoid.b().0 * self.a1));
            let tau_sum = Angle::from(Radians(self.b11.0 + tau12.0));
            let c1p = ellipsoid::coefficients::evaluate_coeffs_c1p(self.eps);
            let b12 = ellipsoid::coefficients::sin_cos_series(&c1p, self.sigma1 + tau_sum);

            // arcs may exceed π, so the terms are not summed as Radians
            Radians(tau12.0 + b12.0 + self.b11.0)
        }
    }

    /// Convert an arc distance on the auxiliary sphere to a distance along
    /// the geodesic.
    /// * `arc_distance` - the arc distance.
    /// * `sigma` - `arc_distance` as an `Angle`.
    #[must_use]
    pub fn radians_to_metres(&self, arc_distance: Radians, sigma: Angle) -> Metres {
        let c1 = ellipsoid::coefficients::evaluate_coeffs_c1(self.eps);
        let b12 = ellipsoid::coefficients::sin_cos_series(&c1, self.sigma1 + sigma);
        Metres(self.ellipsoid.b().0 * self.a1 * (arc_distance.0 + b12.0 - self.b11.0))
    }

    /// The length of the `GeodesicSegment` on the ellipsoid.
    #[must_use]
    pub fn length(&self) -> Metres {
        self.radians_to_metres(self.arc_length, Angle::from(self.arc_length))
    }

    /// The parametric latitude at arc distance `sigma`.
    #[must_use]
    pub fn arc_beta(&self, sigma: Angle) -> Angle {
        let sigma_sum = self.sigma1 + sigma;
        let cos_azi0_sin = self.azi0.cos().0 * sigma_sum.sin().0;
        let cos_azi0_cos = self.azi0.cos().0 * sigma_sum.cos().0;
        Angle::from_y_x(cos_azi0_sin, libm::hypot(self.azi0.sin().0, cos_azi0_cos))
    }

    /// The geodetic latitude at arc distance `sigma`.
    #[must_use]
    pub fn arc_latitude(&self, sigma: Angle) -> Angle {
        self.ellipsoid
            .calculate_geodetic_latitude(self.arc_beta(sigma))
    }

    /// The azimuth at arc distance `sigma`.
    #[must_use]
    pub fn arc_azimuth(&self, sigma: Angle) -> Angle {
        const MAX_LAT: f64 = 1.0 - great_circle::MIN_VALUE;

        let sigma_sum = self.sigma1 + sigma;
        let sin_beta = self.azi0.cos().0 * sigma_sum.sin().0;

        // due South from the North pole
        if MAX_LAT < sin_beta {
            Angle::new(trig::UnitNegRange(0.0), trig::UnitNegRange(-1.0))
        } else {
            Angle::from_y_x(self.azi0.sin().0, self.azi0.cos().0 * sigma_sum.cos().0)
        }
    }

    /// The azimuth at `distance` along the geodesic.
    #[must_use]
    pub fn azimuth(&self, distance: Metres) -> Angle {
        self.arc_azimuth(Angle::from(self.metres_to_radians(distance)))
    }

    /// The azimuth at the end of the `GeodesicSegment`.
    #[must_use]
    pub fn end_azimuth(&self) -> Angle {
        self.arc_azimuth(Angle::from(self.arc_length))
    }

    /// The longitude difference from the start at arc distance `arc_distance`.
    /// * `sigma` - `arc_distance` as an `Angle`.
    #[must_use]
    pub fn delta_longitude(&self, arc_distance: Radians, sigma: Angle) -> Angle {
        if arc_distance.abs().0 < great_circle::MIN_VALUE {
            return Angle::default();
        }

        // longitudes on the auxiliary sphere from the Northbound Equator crossing
        let sigma_sum = self.sigma1 + sigma;
        let omega1 = Angle::from_y_x(
            self.azi0.sin().0 * self.beta.sin().0,
            self.beta.cos().0 * self.azi.cos().0,
        );
        let omega2 = Angle::from_y_x(self.azi0.sin().0 * sigma_sum.sin().0, sigma_sum.cos().0);

        let c3 = self.ellipsoid.calculate_c3y(self.eps);
        let b31 = ellipsoid::coefficients::sin_cos_series(&c3, self.sigma1);
        let b32 = ellipsoid::coefficients::sin_cos_series(&c3, sigma_sum);

        (omega2 - omega1) - Angle::from(Radians(self.a3c * (arc_distance.0 + (b32.0 - b31.0))))
    }

    /// The position at `distance` along the geodesic.
    #[must_use]
    pub fn lat_long(&self, distance: Metres) -> LatLong {
        let arc_distance = self.metres_to_radians(distance);
        let sigma = Angle::from(arc_distance);
        LatLong::new(
            Degrees::from(self.arc_latitude(sigma)),
            Degrees::from(self.lon + self.delta_longitude(arc_distance, sigma)),
        )
    }
}

/// Solve the direct geodesic problem: the position at a course (initial
/// azimuth and distance) from an origin.
/// * `origin` - the start position.
/// * `course` - the initial azimuth and the distance along the geodesic.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the destination, on the datum of `origin`.
///
/// # Examples
/// ```
/// use nav_toolkit::*;
///
/// let origin = GeographicPoint::new(Degrees(55.0), Degrees(37.0)).unwrap();
/// let course = PolarPoint::new(Degrees(45.0), Metres(10_000.0)).unwrap();
/// let destination = direct_problem(&origin, &course, &WGS84_ELLIPSOID);
///
/// let back = inverse_problem(&origin, &destination, &WGS84_ELLIPSOID, false);
/// assert!((back.distance().0 - 10_000.0).abs() < 1e-6);
/// assert!((back.azimuth().0 - 45.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn direct_problem(
    origin: &GeographicPoint,
    course: &PolarPoint,
    ellipsoid: &Ellipsoid,
) -> GeographicPoint {
    let start = LatLong::from(origin);
    let segment = GeodesicSegment::from_lat_lon_azi_length(
        &start,
        Angle::from(course.azimuth()),
        course.distance(),
        ellipsoid,
    );
    let position = segment.lat_long(course.distance());
    GeographicPoint::from_lat_long(&position, origin.datum())
}

/// Solve the inverse geodesic problem: the azimuth and distance between
/// two positions.
/// * `start`, `end` - the positions.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `want_subsequent_azimuth` - return the azimuth of the geodesic at `end`
///   instead of its initial azimuth at `start`.
///
/// returns the azimuth, in the range [0, 360), and the geodesic distance.
/// Coincident positions return a zero distance.
///
/// # Examples
/// ```
/// use nav_toolkit::*;
///
/// let istanbul = GeographicPoint::new(Degrees(42.0), Degrees(29.0)).unwrap();
/// let washington = GeographicPoint::new(Degrees(39.0), Degrees(-77.0)).unwrap();
/// let result = inverse_problem(&istanbul, &washington, &WGS84_ELLIPSOID, false);
///
/// assert!((result.azimuth().0 - 309.306_246_959).abs() < 1e-6);
/// assert!((result.distance().0 - 8_339_863.136).abs() < 1e-2);
/// ```
#[must_use]
pub fn inverse_problem(
    start: &GeographicPoint,
    end: &GeographicPoint,
    ellipsoid: &Ellipsoid,
    want_subsequent_azimuth: bool,
) -> PolarPoint {
    let segment =
        GeodesicSegment::between_positions(&LatLong::from(start), &LatLong::from(end), ellipsoid);
    let azimuth = if want_subsequent_azimuth {
        segment.end_azimuth()
    } else {
        segment.azi()
    };
    PolarPoint::from_azimuth_length(Degrees::from(azimuth), segment.length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_ellipsoid_wgs84() {
        let geoid = Ellipsoid::wgs84();
        assert_eq!(ellipsoid::wgs84::A, geoid.a());
        assert_eq!(ellipsoid::wgs84::F, geoid.f());
        assert_eq!(
            ellipsoid::calculate_minor_axis(ellipsoid::wgs84::A, ellipsoid::wgs84::F),
            geoid.b()
        );
        assert_eq!(1.0 - ellipsoid::wgs84::F, geoid.one_minus_f());
        assert_eq!(1.0 / (1.0 - ellipsoid::wgs84::F), geoid.recip_one_minus_f());
        assert_eq!(
            ellipsoid::calculate_sq_eccentricity(ellipsoid::wgs84::F),
            geoid.e_2()
        );
        assert_eq!(
            ellipsoid::calculate_3rd_flattening(ellipsoid::wgs84::F),
            geoid.n()
        );
        assert_eq!(geoid, *WGS84_ELLIPSOID);
    }

    #[test]
    fn test_ellipsoid_pz90() {
        let geoid = Ellipsoid::pz90();
        assert_eq!(ellipsoid::pz90::A, geoid.a());
        assert_eq!(ellipsoid::pz90::F, geoid.f());
        assert_eq!(geoid, *PZ90_ELLIPSOID);
        assert_ne!(*WGS84_ELLIPSOID, *PZ90_ELLIPSOID);
    }

    #[test]
    fn test_geodesic_segment_direct() {
        let a = LatLong::new(Degrees(0.0), Degrees(0.0));
        let segment = GeodesicSegment::from_lat_lon_azi_length(
            &a,
            Angle::from(Degrees(90.0)),
            Metres(111_319.490_793_273_58),
            &WGS84_ELLIPSOID,
        );
        assert!(segment.is_valid());
        assert!(is_within_tolerance(
            111_319.490_793_273_58,
            segment.length().0,
            1e-6
        ));

        let b = segment.lat_long(segment.length());
        assert!(is_within_tolerance(0.0, b.lat().0, 1e-12));
        assert!(is_within_tolerance(1.0, b.lon().0, 1e-10));
        assert!(is_within_tolerance(
            90.0,
            Degrees::from(segment.end_azimuth()).0,
            1e-12
        ));
    }

    #[test]
    fn test_geodesic_segment_meridian() {
        let a = LatLong::new(Degrees(0.0), Degrees(10.0));
        let b = LatLong::new(Degrees(1.0), Degrees(10.0));
        let segment = GeodesicSegment::between_positions(&a, &b, &WGS84_ELLIPSOID);

        assert!(is_within_tolerance(0.0, Degrees::from(segment.azi()).0, 1e-12));
        assert!(is_within_tolerance(
            110_574.388_557_798,
            segment.length().0,
            1e-3
        ));

        let mid = segment.lat_long(Metres(segment.length().0 / 2.0));
        assert!(0.49 < mid.lat().0 && mid.lat().0 < 0.51);
        assert!(is_within_tolerance(10.0, mid.lon().0, 1e-12));
        assert!(is_within_tolerance(
            0.0,
            Degrees::from(segment.azimuth(Metres(50_000.0))).0,
            1e-12
        ));
    }

    #[test]
    fn test_direct_problem_zero_distance() {
        let origin = GeographicPoint::new(Degrees(-33.9), Degrees(151.2)).unwrap();
        let course = PolarPoint::new(Degrees(123.0), Metres(0.0)).unwrap();
        let result = direct_problem(&origin, &course, &WGS84_ELLIPSOID);

        assert!(is_within_tolerance(-33.9, result.latitude().0, 1e-12));
        assert!(is_within_tolerance(151.2, result.longitude().0, 1e-12));
        assert_eq!(Datum::Wgs84, result.datum());
    }

    #[test]
    fn test_direct_problem_keeps_datum() {
        let mut origin = GeographicPoint::default();
        origin.set_datum(Datum::Pz9011);
        let course = PolarPoint::new(Degrees(0.0), Metres(100_000.0)).unwrap();
        let result = direct_problem(&origin, &course, origin.datum().ellipsoid());

        assert_eq!(Datum::Pz9011, result.datum());
        assert!(0.9 < result.latitude().0 && result.latitude().0 < 0.91);
        assert!(is_within_tolerance(0.0, result.longitude().0, 1e-12));
    }

    #[test]
    fn test_inverse_problem_subsequent_azimuth() {
        let start = GeographicPoint::new(Degrees(-40.0), Degrees(70.0)).unwrap();
        let end = GeographicPoint::new(Degrees(30.0), Degrees(0.0)).unwrap();

        let result = inverse_problem(&start, &end, &WGS84_ELLIPSOID, false);
        assert!(is_within_tolerance(304.995_268_300_848, result.azimuth().0, 1e-6));
        assert!(is_within_tolerance(
            10_592_890.730_629_167,
            result.distance().0,
            1e-3
        ));

        let result = inverse_problem(&start, &end, &WGS84_ELLIPSOID, true);
        assert!(is_within_tolerance(313.529_389_832_794_8, result.azimuth().0, 1e-6));
    }

    #[test]
    fn test_inverse_problem_coincident_points() {
        let point = GeographicPoint::new(Degrees(45.0), Degrees(45.0)).unwrap();
        let result = inverse_problem(&point, &point, &WGS84_ELLIPSOID, false);
        assert_eq!(0.0, result.distance().0);
        assert!((0.0..360.0).contains(&result.azimuth().0));
    }

    #[test]
    fn test_inverse_problem_over_the_pole() {
        let start = GeographicPoint::new(Degrees(80.0), Degrees(40.0)).unwrap();
        let end = GeographicPoint::new(Degrees(80.0), Degrees(-140.0)).unwrap();

        let result = inverse_problem(&start, &end, &WGS84_ELLIPSOID, false);
        assert!(is_within_tolerance(0.0, result.azimuth().0, 1e-9));

        let result = inverse_problem(&start, &end, &WGS84_ELLIPSOID, true);
        assert!(is_within_tolerance(180.0, result.azimuth().0, 1e-9));
    }

    #[test]
    fn test_inverse_problem_equator_nearly_antipodal() {
        let start = GeographicPoint::default();
        let end = GeographicPoint::new(Degrees(0.0), Degrees(179.66)).unwrap();

        let result = inverse_problem(&start, &end, &WGS84_ELLIPSOID, false);
        assert!(is_within_tolerance(
            19_993_262.447_240_543,
            result.distance().0,
            1e-3
        ));
        assert!(is_within_tolerance(34.311_901_904_186_83, result.azimuth().0, 1e-9));

        let result = inverse_problem(&start, &end, &WGS84_ELLIPSOID, true);
        assert!(is_within_tolerance(145.688_098_095_813_17, result.azimuth().0, 1e-9));

        // westbound
        let end = GeographicPoint::new(Degrees(0.0), Degrees(-179.66)).unwrap();
        let result = inverse_problem(&start, &end, &WGS84_ELLIPSOID, false);
        assert!(is_within_tolerance(
            19_993_262.447_240_543,
            result.distance().0,
            1e-3
        ));
        assert!(is_within_tolerance(325.688_098_095_813_17, result.azimuth().0, 1e-9));
    }

    #[test]
    fn test_direct_problem_past_the_equatorial_antipode() {
        // 20,000 km East along the Equator is not the shortest geodesic back
        let start = GeographicPoint::new(Degrees(0.0), Degrees(10.0)).unwrap();
        let course = PolarPoint::new(Degrees(90.0), Metres(20_000_000.0)).unwrap();
        let end = direct_problem(&start, &course, &WGS84_ELLIPSOID);
        assert!(is_within_tolerance(0.0, end.latitude().0, 1e-9));

        let result = inverse_problem(&start, &end, &WGS84_ELLIPSOID, false);
        assert!(0.0 < result.distance().0);
        assert!(result.distance().0 < course.distance().0);
        assert!(result.azimuth().0 < 90.0);
    }
}
