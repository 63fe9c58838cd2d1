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

//! The geodesic module solves the inverse geodesic problem on the auxiliary
//! sphere: given two positions, find the start azimuth and the great circle
//! arc length of the geodesic between them.
//!
//! The method is CFF Karney's
//! [Algorithms for geodesics](https://arxiv.org/pdf/1109.4448.pdf):
//! Newton's method on the longitude difference, seeded by the great circle
//! azimuth or, for nearly antipodal positions, by the solution of the astroid
//! problem.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]

use crate::ellipsoid::coefficients::{
    evaluate_a1, evaluate_a2, evaluate_coeffs_c1, evaluate_coeffs_c2, sin_cos_series,
};
use crate::ellipsoid::calculate_parametric_latitude;
use crate::Ellipsoid;
use angle_sc::trig::{cosine_from_sine, UnitNegRange};
use angle_sc::{is_small, Angle, Radians};
use log::{trace, warn};
use unit_sphere::{great_circle, LatLong};

/// The convergence tolerance of the inverse solver, in Radians.
pub const MAX_PRECISION: Radians = Radians(2.0 * f64::EPSILON);

/// The maximum number of Newton iterations of the inverse solver.
pub const MAX_ITERATIONS: u32 = 20;

/// Solve `k^4 + 2k^3 - (x^2 + y^2 - 1)k^2 - 2y^2k - y^2 = 0` for its
/// positive root, Karney section 7.
/// * `x`, `y` - the astroid parameters.
#[must_use]
fn calculate_astroid(x: f64, y: f64) -> f64 {
    let p = x * x;
    let q = y * y;
    let r = (p + q - 1.0) / 6.0;

    // y == 0 inside the astroid
    if (q <= 0.0) && (r <= 0.0) {
        return 0.0;
    }

    let s = p * q / 4.0;
    let r2 = r * r;
    let r3 = r * r2;

    // zero on the evolute p^(1/3) + q^(1/3) = 1
    let discriminant = s * (s + 2.0 * r3);
    let u = if 0.0 <= discriminant {
        // the sign of the root maximises |t3|
        let t3 = s + r3;
        let t3 = t3 + libm::copysign(libm::sqrt(discriminant), t3);
        let t = libm::cbrt(t3);
        r + if t == 0.0 { 0.0 } else { t + r2 / t }
    } else {
        // discriminant < 0 implies r < 0
        let angle = libm::atan2(libm::sqrt(-discriminant), -(s + r3));
        r + 2.0 * r * libm::cos(angle / 3.0)
    };

    let v = libm::sqrt(u * u + q);
    // uv = u + v, always positive
    let uv = if u < 0.0 { q / (v - u) } else { u + v };
    let w = (uv - q) / (2.0 * v);

    uv / (libm::sqrt(uv + w * w) + w)
}

/// The reduced length of the geodesic divided by the semiminor axis.
#[allow(clippy::similar_names)]
#[must_use]
fn calculate_reduced_length(
    eps: f64,
    sigma12: Radians,
    sigma1: Angle,
    dn1: f64,
    sigma2: Angle,
    dn2: f64,
) -> f64 {
    let a1 = evaluate_a1(eps);
    let a2 = evaluate_a2(eps);
    let m0x = a1 - a2;

    let c1 = evaluate_coeffs_c1(eps);
    let mut c2 = evaluate_coeffs_c2(eps);
    for (c2i, c1i) in c2.iter_mut().zip(c1.iter()).skip(1) {
        *c2i = (1.0 + a1) * c1i - (1.0 + a2) * *c2i;
    }

    // f64 sums, Radians addition wraps at π
    let j12 = m0x * (sigma12.0 + sin_cos_series(&c2, sigma2).0 - sin_cos_series(&c2, sigma1).0);
    dn2 * (sigma1.cos().0 * sigma2.sin().0)
        - dn1 * (sigma1.sin().0 * sigma2.cos().0)
        - sigma1.cos().0 * sigma2.cos().0 * j12
}

/// Estimate the start azimuth on the auxiliary sphere of a nearly antipodal
/// geodesic by solving the astroid problem.
/// * `beta1`, `beta2` - the parametric latitudes of the start and finish.
/// * `lambda12` - the longitude difference between start and finish.
#[must_use]
fn estimate_antipodal_initial_azimuth(
    beta1: Angle,
    beta2: Angle,
    lambda12: Angle,
    ellipsoid: &Ellipsoid,
) -> Angle {
    const Y_TOLERANCE: f64 = 200.0 * f64::EPSILON;
    const X_TOLERANCE: f64 = 2000.0 / core::f64::consts::FRAC_2_SQRT_PI;

    // assumes sin(alpha1) == 1
    let clairaut = beta1.cos();
    let eps = ellipsoid.calculate_epsilon(clairaut);
    let a3f = ellipsoid.calculate_a3f(eps);

    let lamscale = ellipsoid.f() * beta1.cos().0 * a3f * core::f64::consts::PI;
    let betscale = lamscale * beta1.cos().0;

    let x = Radians::from(lambda12.opposite()).0 / lamscale;
    let y = (beta1 + beta2).sin().0 / betscale;

    if (x <= -(1.0 + X_TOLERANCE)) || (y < -Y_TOLERANCE) {
        let k = calculate_astroid(x, y);
        let omg12a = lamscale * (-x * k / (1.0 + k));
        let omega12 = Radians(core::f64::consts::PI - omg12a);
        great_circle::calculate_gc_azimuth(beta1, beta2, Angle::from(omega12))
    } else {
        let sin_alpha = UnitNegRange(if -x < 1.0 { -x } else { 1.0 });
        Angle::new(sin_alpha, cosine_from_sine(sin_alpha, -1.0))
    }
}

/// The cosine of the longitude from the Northbound Equator crossing.
/// * `beta` - the parametric latitude.
/// * `cos_azimuth` - the cosine of the azimuth at `beta`.
///
/// returns one when `beta` is on the Equator.
#[must_use]
pub fn calculate_cos_omega(beta: Angle, cos_azimuth: UnitNegRange) -> UnitNegRange {
    if is_small(libm::fabs(beta.sin().0), f64::EPSILON) {
        UnitNegRange(1.0)
    } else {
        UnitNegRange(cos_azimuth.0 * beta.cos().0)
    }
}

/// The azimuth on the auxiliary sphere at parametric latitude `beta2` of the
/// geodesic through `beta1` with azimuth `alpha1`.
#[must_use]
fn calculate_end_azimuth(beta1: Angle, beta2: Angle, alpha1: Angle) -> Angle {
    let clairaut = UnitNegRange(alpha1.sin().0 * beta1.cos().0);
    let same_cos = beta2.cos() == beta1.cos();

    let sin_alpha2 = if same_cos {
        alpha1.sin()
    } else {
        UnitNegRange::clamp(clairaut.0 / beta2.cos().0)
    };

    let cos_alpha2 = if !same_cos || (libm::fabs(beta2.sin().0) != -beta1.sin().0) {
        let temp1 = alpha1.cos().0 * beta1.cos().0;
        let temp2 = if beta1.cos().0 < libm::fabs(beta1.sin().0) {
            (beta2.cos().0 - beta1.cos().0) * (beta1.cos().0 + beta2.cos().0)
        } else {
            (beta1.sin().0 - beta2.sin().0) * (beta1.sin().0 + beta2.sin().0)
        };
        let temp3 = temp1 * temp1 + temp2;
        UnitNegRange::clamp(if 0.0 < temp3 {
            libm::sqrt(temp3) / beta2.cos().0
        } else {
            0.0
        })
    } else {
        UnitNegRange(libm::fabs(alpha1.cos().0))
    };

    Angle::new(sin_alpha2, cos_alpha2)
}

/// The difference between the geodesic longitude and the longitude on the
/// auxiliary sphere.
#[allow(clippy::similar_names)]
#[must_use]
fn delta_omega12(
    clairaut: UnitNegRange,
    eps: f64,
    sigma12: Radians,
    sigma1: Angle,
    sigma2: Angle,
    ellipsoid: &Ellipsoid,
) -> f64 {
    let c3 = ellipsoid.calculate_c3y(eps);
    let b31 = sin_cos_series(&c3, sigma1);
    let b32 = sin_cos_series(&c3, sigma2);
    ellipsoid.calculate_a3c(clairaut, eps) * (sigma12.0 + b32.0 - b31.0)
}

/// Clamp an `Angle` into the range 0 to π.
fn clamp_to_half_turn(angle: Angle) -> Angle {
    if angle.sin() < UnitNegRange(0.0) {
        Angle::from_y_x(0.0, angle.cos().0)
    } else {
        angle
    }
}

/// Find the start azimuth and the arc length on the auxiliary sphere with
/// Newton's method on `f(alpha1) = lambda12(alpha1) - lambda12 = 0`.
/// * `lat_a`, `lat_b` - the geodetic latitudes of the start and finish.
/// * `lambda12` - the longitude difference between start and finish.
/// * `gc_length` - the great circle distance between start and finish.
#[allow(clippy::similar_names)]
#[must_use]
fn find_azimuth_and_aux_length(
    lat_a: Angle,
    lat_b: Angle,
    lambda12: Angle,
    gc_length: Radians,
    ellipsoid: &Ellipsoid,
) -> (Angle, Radians) {
    let antipodal_arc_threshold = core::f64::consts::PI * ellipsoid.one_minus_f();

    // solve from the latitude furthest from the Equator, in the South
    let swap_latitudes = libm::fabs(lat_a.sin().0) < libm::fabs(lat_b.sin().0);
    let (mut lat1, mut lat2) = if swap_latitudes {
        (lat_b, lat_a)
    } else {
        (lat_a, lat_b)
    };
    let negate_latitude = 0.0 < lat1.sin().0;
    if negate_latitude {
        lat1 = -lat1;
        lat2 = -lat2;
    }

    let beta1 = calculate_parametric_latitude(lat1, ellipsoid.one_minus_f());
    let beta2 = calculate_parametric_latitude(lat2, ellipsoid.one_minus_f());
    let dn1 = libm::sqrt(1.0 + ellipsoid.ep_2() * beta1.sin().0 * beta1.sin().0);
    let dn2 = libm::sqrt(1.0 + ellipsoid.ep_2() * beta2.sin().0 * beta2.sin().0);

    // a positive longitude difference keeps every azimuth positive
    let abs_lambda12 = lambda12.abs();

    let mut alpha1 = if antipodal_arc_threshold < gc_length.0 {
        estimate_antipodal_initial_azimuth(beta1, beta2, abs_lambda12, ellipsoid)
    } else {
        great_circle::calculate_gc_azimuth(lat1, lat2, abs_lambda12)
    };
    let mut alpha2 = alpha1;
    let mut sigma12_rad = gc_length;
    let mut converged = false;

    for iteration in 1..=MAX_ITERATIONS {
        let clairaut = UnitNegRange(alpha1.sin().0 * beta1.cos().0);
        let eps = ellipsoid.calculate_epsilon(clairaut);

        // longitude (omega) and arc length (sigma) from the Northbound
        // Equator crossing at each end
        let cos_omega1 = calculate_cos_omega(beta1, alpha1.cos());
        let omega1 = Angle::from_y_x(clairaut.0 * beta1.sin().0, cos_omega1.0);
        let sigma1 = Angle::from_y_x(beta1.sin().0, cos_omega1.0);

        alpha2 = calculate_end_azimuth(beta1, beta2, alpha1);

        let cos_omega2 = calculate_cos_omega(beta2, alpha2.cos());
        let omega2 = Angle::from_y_x(clairaut.0 * beta2.sin().0, cos_omega2.0);
        let sigma2 = Angle::from_y_x(beta2.sin().0, cos_omega2.0);

        let omega12 = clamp_to_half_turn(omega2 - omega1);
        let sigma12 = clamp_to_half_turn(sigma2 - sigma1);
        sigma12_rad = Radians::from(sigma12);

        let eta = Radians::from(omega12 - abs_lambda12);
        let domg12 = delta_omega12(clairaut, eps, sigma12_rad, sigma1, sigma2, ellipsoid);
        let v = eta.0 - domg12;

        let dv = if is_small(libm::fabs(alpha2.cos().0), f64::EPSILON) {
            -2.0 * ellipsoid.one_minus_f() * dn1 / beta1.sin().0
        } else {
            let m12 = calculate_reduced_length(eps, sigma12_rad, sigma1, dn1, sigma2, dn2);
            ellipsoid.one_minus_f() * m12 / (alpha2.cos().0 * beta2.cos().0)
        };
        let dalpha1 = UnitNegRange::clamp(-v / dv);

        if is_small(libm::fabs(v), MAX_PRECISION.0)
            || is_small(libm::fabs(dv), MAX_PRECISION.0)
            || is_small(libm::fabs(dalpha1.0), MAX_PRECISION.0)
        {
            trace!("inverse geodesic converged after {iteration} iterations");
            converged = true;
            break;
        }

        alpha1 = alpha1 + Angle::from(Radians(dalpha1.0));
    }

    if !converged {
        warn!(
            "inverse geodesic did not converge in {MAX_ITERATIONS} iterations, arc length: {}",
            sigma12_rad.0
        );
    }

    if swap_latitudes {
        alpha1 = alpha2;
    }
    if swap_latitudes != negate_latitude {
        alpha1 = alpha1.negate_cos();
    }
    if lambda12.sin().0 < 0.0 {
        alpha1 = -alpha1;
    }

    (alpha1, sigma12_rad)
}

/// Find the start azimuth of the geodesic between nearly antipodal positions
/// on the Equator, Karney section 7.
///
/// The geodesic leaves the Equator at `alpha1` and returns to it after an arc
/// of π on the auxiliary sphere, so:
/// `π - lambda12 = f * sin(alpha1) * A3(eps) * π`.
/// * `lambda12` - the longitude difference, `π(1 - f) < |lambda12| < π`.
///
/// returns the start azimuth and an arc length of π.
#[must_use]
fn find_equatorial_antipodal_azimuth(lambda12: Angle, ellipsoid: &Ellipsoid) -> (Angle, Radians) {
    let abs_lambda12 = Radians::from(lambda12.abs());
    let target = (core::f64::consts::PI - abs_lambda12.0)
        / (ellipsoid.f() * core::f64::consts::PI);

    // fixed point iteration, A3 varies slowly with alpha1
    let mut sin_alpha1 = UnitNegRange::clamp(target);
    for iteration in 1..=MAX_ITERATIONS {
        let eps = ellipsoid.calculate_epsilon(sin_alpha1);
        let next = UnitNegRange::clamp(target / ellipsoid.calculate_a3f(eps));
        let delta = libm::fabs(next.0 - sin_alpha1.0);
        sin_alpha1 = next;
        if delta <= MAX_PRECISION.0 {
            trace!("equatorial antipodal geodesic converged after {iteration} iterations");
            break;
        }
    }

    let alpha1 = Angle::new(sin_alpha1, cosine_from_sine(sin_alpha1, 1.0));
    let alpha1 = if lambda12.sin().0 < 0.0 {
        -alpha1
    } else {
        alpha1
    };
    (alpha1, Radians(core::f64::consts::PI))
}

/// Calculate the start azimuth and great circle arc length on the auxiliary
/// sphere of the geodesic between two positions.
/// * `lat1`, `lat2` - the geodetic latitudes of the start and finish.
/// * `delta_long` - the longitude difference between start and finish.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// Coincident positions return a zero arc length and the great circle
/// azimuth of the degenerate pair.
#[must_use]
pub fn aux_sphere_azimuth_length(
    lat1: Angle,
    lat2: Angle,
    delta_long: Angle,
    ellipsoid: &Ellipsoid,
) -> (Angle, Radians) {
    const MIN_VALUE: UnitNegRange = UnitNegRange(great_circle::MIN_VALUE);
    const MAX_LENGTH: Radians = Radians(core::f64::consts::PI - 2.0 * great_circle::MIN_VALUE);

    let gc_azimuth = great_circle::calculate_gc_azimuth(lat1, lat2, delta_long);
    let gc_length = great_circle::calculate_gc_distance(lat1, lat2, delta_long);
    if gc_length.0 <= MIN_VALUE.0 {
        return (gc_azimuth, Radians(0.0));
    }

    // along a meridian, or from a pole
    let abs_delta_long = Radians::from(delta_long.abs());
    if (abs_delta_long.0 <= MIN_VALUE.0)
        || (MAX_LENGTH <= abs_delta_long)
        || (lat1.cos() <= MIN_VALUE)
        || (lat2.cos() <= MIN_VALUE)
    {
        let meridian_length = if MAX_LENGTH <= gc_length {
            Radians(core::f64::consts::PI)
        } else {
            let beta1 = calculate_parametric_latitude(lat1, ellipsoid.one_minus_f());
            let beta2 = calculate_parametric_latitude(lat2, ellipsoid.one_minus_f());
            great_circle::calculate_gc_distance(beta1, beta2, delta_long)
        };
        return (gc_azimuth, meridian_length);
    }

    // along the Equator, unless the positions are nearly antipodal
    if (lat1.abs().sin() <= MIN_VALUE) && (lat2.abs().sin() <= MIN_VALUE) {
        return if abs_delta_long.0 <= core::f64::consts::PI * ellipsoid.one_minus_f() {
            (
                gc_azimuth,
                Radians(gc_length.0 * ellipsoid.recip_one_minus_f()),
            )
        } else {
            find_equatorial_antipodal_azimuth(delta_long, ellipsoid)
        };
    }

    find_azimuth_and_aux_length(lat1, lat2, delta_long, gc_length, ellipsoid)
}

/// Calculate the start azimuth and great circle arc length on the auxiliary
/// sphere of the geodesic between a pair of positions.
/// * `a`, `b` - the start and finish positions.
/// * `ellipsoid` - the `Ellipsoid`.
#[must_use]
pub fn calculate_azimuth_aux_length(
    a: &LatLong,
    b: &LatLong,
    ellipsoid: &Ellipsoid,
) -> (Angle, Radians) {
    let delta_long = Angle::from(b.lon() - a.lon());
    aux_sphere_azimuth_length(
        Angle::from(a.lat()),
        Angle::from(b.lat()),
        delta_long,
        ellipsoid,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ellipsoid;
    use angle_sc::{is_within_tolerance, Degrees};

    #[test]
    fn test_calculate_astroid() {
        assert_eq!(0.0, calculate_astroid(0.0, 0.0));
        assert_eq!(0.0, calculate_astroid(1.0, 0.0));

        // (0, 0) to (0.5, 179.5)
        assert!(is_within_tolerance(
            0.91583665308532092,
            calculate_astroid(-0.82852367684428574, -0.82576675584253256),
            1e-14
        ));
        // (-30, 0) to (30, 179)
        assert!(is_within_tolerance(
            0.9121190093974804,
            calculate_astroid(-1.9121190093974805, 0.0),
            1e-14
        ));
    }

    #[test]
    fn test_calculate_end_azimuth() {
        let angle_50 = Angle::from(Degrees(50.0));
        let angle_20 = Angle::from(Degrees(20.0));

        let result = calculate_end_azimuth(angle_20, angle_50, angle_20);
        assert!(is_within_tolerance(30.0, Degrees::from(result).0, 1e-13));

        let result = calculate_end_azimuth(-angle_50, angle_50, angle_20);
        assert!(is_within_tolerance(20.0, Degrees::from(result).0, 1e-13));
    }

    #[test]
    fn test_delta_omega12() {
        let wgs84 = Ellipsoid::wgs84();

        // (0, 0) to (45, 90)
        let clairaut = Angle::from(Degrees(45.0)).sin();
        let eps = wgs84.calculate_epsilon(clairaut);
        let result = delta_omega12(
            clairaut,
            eps,
            Radians(core::f64::consts::FRAC_PI_2),
            Angle::from_y_x(0.0, 1.0),
            Angle::from_y_x(1.0, 0.0),
            &wgs84,
        );
        assert!(is_within_tolerance(0.0037224722989948442, result, 1e-15));
    }

    #[test]
    fn test_calculate_azimuth_aux_length_meridian() {
        let wgs84 = Ellipsoid::wgs84();

        let latlon1 = LatLong::new(Degrees(-70.0), Degrees(40.0));
        let latlon2 = LatLong::new(Degrees(80.0), Degrees(40.0));

        let (azimuth, length) = calculate_azimuth_aux_length(&latlon1, &latlon2, &wgs84);
        assert!(is_within_tolerance(0.0, Degrees::from(azimuth).0, 1e-12));
        assert!(is_within_tolerance(2.6163378712682306, length.0, 1e-12));

        let (azimuth, length) = calculate_azimuth_aux_length(&latlon2, &latlon1, &wgs84);
        assert!(is_within_tolerance(180.0, Degrees::from(azimuth).0, 1e-12));
        assert!(is_within_tolerance(2.6163378712682306, length.0, 1e-12));
    }

    #[test]
    fn test_calculate_azimuth_aux_length_equator() {
        let wgs84 = Ellipsoid::wgs84();

        let latlon1 = LatLong::new(Degrees(0.0), Degrees(-40.0));
        let latlon2 = LatLong::new(Degrees(0.0), Degrees(50.0));

        let (azimuth, length) = calculate_azimuth_aux_length(&latlon1, &latlon2, &wgs84);
        assert!(is_within_tolerance(90.0, Degrees::from(azimuth).0, 1e-12));
        assert!(is_within_tolerance(1.5760806267286946, length.0, 1e-12));

        let (azimuth, _) = calculate_azimuth_aux_length(&latlon2, &latlon1, &wgs84);
        assert!(is_within_tolerance(-90.0, Degrees::from(azimuth).0, 1e-12));
    }

    #[test]
    fn test_calculate_azimuth_aux_length_straddle_equator() {
        let wgs84 = Ellipsoid::wgs84();

        let latlon1 = LatLong::new(Degrees(-40.0), Degrees(70.0));
        let latlon2 = LatLong::new(Degrees(30.0), Degrees(0.0));
        let (azimuth, length) = calculate_azimuth_aux_length(&latlon1, &latlon2, &wgs84);
        assert!(is_within_tolerance(
            -55.00473169905792,
            Degrees::from(azimuth).0,
            1e-9
        ));
        assert!(is_within_tolerance(1.6656790467428875, length.0, 1e-12));

        let latlon1 = LatLong::new(Degrees(30.0), Degrees(0.0));
        let latlon2 = LatLong::new(Degrees(-40.0), Degrees(70.0));
        let (azimuth, length) = calculate_azimuth_aux_length(&latlon1, &latlon2, &wgs84);
        assert!(is_within_tolerance(
            133.52938983286407,
            Degrees::from(azimuth).0,
            1e-9
        ));
        assert!(is_within_tolerance(1.6656790467428875, length.0, 1e-12));
    }

    #[test]
    fn test_calculate_azimuth_aux_length_nearly_antipodal() {
        let wgs84 = Ellipsoid::wgs84();

        let latlon1 = LatLong::new(Degrees(0.0), Degrees(0.0));
        let latlon2 = LatLong::new(Degrees(0.5), Degrees(179.98));
        let (azimuth, length) = calculate_azimuth_aux_length(&latlon1, &latlon2, &wgs84);
        assert!(is_within_tolerance(
            1.042038151998155,
            Degrees::from(azimuth).0,
            1e-9
        ));
        assert!(is_within_tolerance(3.132893826005981, length.0, 1e-12));
    }

    #[test]
    fn test_calculate_azimuth_aux_length_equator_nearly_antipodal() {
        let wgs84 = Ellipsoid::wgs84();

        // the geodesic leaves the Equator beyond a longitude difference of π(1 - f)
        let latlon1 = LatLong::new(Degrees(0.0), Degrees(0.0));
        let latlon2 = LatLong::new(Degrees(0.0), Degrees(179.66));
        let (azimuth, length) = calculate_azimuth_aux_length(&latlon1, &latlon2, &wgs84);
        assert!(is_within_tolerance(
            34.311_901_904_186_83,
            Degrees::from(azimuth).0,
            1e-9
        ));
        assert_eq!(core::f64::consts::PI, length.0);

        let latlon2 = LatLong::new(Degrees(0.0), Degrees(-179.9));
        let (azimuth, length) = calculate_azimuth_aux_length(&latlon1, &latlon2, &wgs84);
        assert!(is_within_tolerance(
            -9.545_672_694_738_86,
            Degrees::from(azimuth).0,
            1e-9
        ));
        assert_eq!(core::f64::consts::PI, length.0);

        // still along the Equator
        let latlon2 = LatLong::new(Degrees(0.0), Degrees(179.3));
        let (azimuth, length) = calculate_azimuth_aux_length(&latlon1, &latlon2, &wgs84);
        assert!(is_within_tolerance(90.0, Degrees::from(azimuth).0, 1e-12));
        assert!(length.0 < core::f64::consts::PI);
    }

    #[test]
    fn test_coincident_positions() {
        let wgs84 = Ellipsoid::wgs84();
        let latlon = LatLong::new(Degrees(51.5), Degrees(-0.5));
        let (_, length) = calculate_azimuth_aux_length(&latlon, &latlon, &wgs84);
        assert_eq!(0.0, length.0);
    }

    #[test]
    fn test_aux_sphere_length_equator() {
        let wgs84 = Ellipsoid::wgs84();
        let (azimuth, length) = aux_sphere_azimuth_length(
            Angle::default(),
            Angle::default(),
            Angle::from(Degrees(1.0)),
            &wgs84,
        );
        assert!(is_within_tolerance(90.0, Degrees::from(azimuth).0, 1e-12));
        assert!(is_within_tolerance(
            1.0_f64.to_radians() * wgs84.recip_one_minus_f(),
            length.0,
            1e-15
        ));
    }
}
