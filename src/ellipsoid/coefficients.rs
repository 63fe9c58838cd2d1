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

//! Series coefficients for geodesic calculations on an ellipsoid.
//!
//! The equations are from CFF Karney,
//! [Algorithms for geodesics](https://arxiv.org/pdf/1109.4448.pdf), apart from
//! `A2` which is from
//! [Geodesics on an arbitrary ellipsoid of revolution](https://arxiv.org/pdf/2208.00492.pdf).
//! All series are truncated at sixth order in `eps`, enough for full double
//! precision on terrestrial ellipsoids.

use angle_sc::{Angle, Radians};

/// The scale factor `A1` minus one, Karney Eq. 17.
/// * `eps` - the integration variable derived from Clairaut's constant.
/// # Examples
/// ```
/// use nav_toolkit::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
/// use nav_toolkit::ellipsoid::coefficients::evaluate_a1;
///
/// let eps45 = calculate_sq_2nd_eccentricity(wgs84::F) / 2.0;
/// assert_eq!(0.0033839903702120875, evaluate_a1(eps45));
/// ```
#[must_use]
pub fn evaluate_a1(eps: f64) -> f64 {
    let eps2 = eps * eps;
    let t = eps2 * (eps2 * (eps2 + 4.0) + 64.0) / 256.0;
    (t + eps) / (1.0 - eps)
}

/// The scale factor `A2` minus one, Karney (2022) Eq. A1.
/// * `eps` - the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_a2(eps: f64) -> f64 {
    let eps2 = eps * eps;
    let t = eps2 * ((-11. * eps2 - 28.) * eps2 - 192.) / 256.;
    (t - eps) / (1. + eps)
}

/// The polynomial coefficients of `A3` in `eps`, Karney Eq. 23.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_a3(n: f64) -> [f64; 6] {
    [
        1.,
        (n - 1.) / 2.,
        (n * (3. * n - 1.) - 2.) / 8.,
        ((-n - 3.) * n - 1.) / 16.,
        (-2. * n - 3.) / 64.,
        -3. / 128.,
    ]
}

/// The Fourier coefficients `C1[l]` of `B1`, Karney Eq. 18.
/// * `eps` - the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c1(eps: f64) -> [f64; 7] {
    let eps2 = eps * eps;
    let eps4 = (eps2 * eps) * eps; // not the same as eps2 * eps2
    let eps6 = (eps4 * eps) * eps;

    [
        0.,
        eps * ((6. - eps2) * eps2 - 16.) / 32.,
        eps2 * ((64. - 9. * eps2) * eps2 - 128.) / 2048.,
        eps * eps2 * (9. * eps2 - 16.) / 768.,
        eps4 * (3. * eps2 - 5.) / 512.,
        eps * eps4 * (-7. / 1280.),
        eps6 * (-7. / 2048.),
    ]
}

/// The Fourier coefficients `C1p[l]` of the inverse series `B1p`, Karney Eq. 21.
/// * `eps` - the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c1p(eps: f64) -> [f64; 6] {
    let eps2 = eps * eps;
    let eps4 = (eps2 * eps) * eps;

    [
        0.,
        eps * (eps2 * (205. * eps2 - 432.) + 768.) / 1536.,
        eps2 * (30. - 37. * eps2) / 96.,
        eps * eps2 * (116. - 225. * eps2) / 384.,
        eps4 * 539. / 1536.,
        (eps * eps4) * 3467. / 7680.,
    ]
}

/// The Fourier coefficients `C2[l]` of `B2`, Karney Eq. 42.
/// * `eps` - the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c2(eps: f64) -> [f64; 7] {
    let eps2 = eps * eps;
    let eps4 = (eps2 * eps) * eps;
    let eps6 = (eps4 * eps) * eps;

    [
        0.,
        eps * (eps2 * (eps2 + 2.) + 16.) / 32.,
        eps2 * (eps2 * (35. * eps2 + 64.) + 384.) / 2048.,
        eps * eps2 * (15. * eps2 + 80.) / 768.,
        eps4 * (7. * eps2 + 35.) / 512.,
        eps * eps4 * 63. / 1280.,
        eps6 * 77. / 2048.,
    ]
}

/// The polynomial coefficients in `n` of the `C3[l]` Fourier coefficients,
/// Karney Eq. 25.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_c3x(n: f64) -> [f64; 15] {
    [
        (1. - n) / 4.,
        (1. - n * n) / 8.,
        (n * ((-5. * n - 1.) * n + 3.) + 3.) / 64.,
        (n * ((2. - 2. * n) * n + 2.) + 5.) / 128.,
        (n * (3. * n + 11.) + 12.) / 512.,
        ((n - 3.) * n + 2.) / 32.,
        (n * (n * (2. * n - 3.) - 2.) + 3.) / 64.,
        (n * ((-6. * n - 9.) * n + 2.) + 6.) / 256.,
        ((1. - 2. * n) * n + 5.) / 256.,
        (n * ((5. - n) * n - 9.) + 5.) / 192.,
        (n * (n * (10. * n - 6.) - 10.) + 9.) / 384.,
        ((-77. * n - 8.) * n + 42.) / 3072.,
        (n * ((20. - 7. * n) * n - 28.) + 14.) / 1024.,
        ((-7. * n - 40.) * n + 28.) / 2048.,
        (n * (75. * n - 90.) + 42.) / 5120.,
    ]
}

/// Evaluate a polynomial in `x` by Horner's method.
/// * `coeffs` - the coefficients, lowest order first.
/// * `x` - the variable.
#[must_use]
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .iter()
        .rev()
        .fold(0.0, |result, coeff| result.mul_add(x, *coeff))
}

/// The Fourier coefficients `C3[l]` of `I3`, Karney Eq. 26.
/// * `coeffs` - the polynomial coefficients from `evaluate_coeffs_c3x`.
/// * `eps` - the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c3y(coeffs: &[f64], eps: f64) -> [f64; 6] {
    let eps_2 = eps * eps;
    let eps_3 = eps * eps_2;
    let eps_4 = eps * eps_3;
    let eps_5 = eps * eps_4;
    [
        0.0,
        eps * evaluate_polynomial(&coeffs[0..5], eps),
        eps_2 * evaluate_polynomial(&coeffs[5..9], eps),
        eps_3 * evaluate_polynomial(&coeffs[9..12], eps),
        eps_4 * evaluate_polynomial(&coeffs[12..14], eps),
        eps_5 * evaluate_polynomial(&coeffs[14..15], eps),
    ]
}

/// Sum the series `sum(c[i] * sin(2*i * angle), i, 1, n)` by
/// [Clenshaw summation](https://en.wikipedia.org/wiki/Clenshaw_algorithm).
/// * `coeffs` - the Fourier coefficients, `coeffs[0]` is ignored.
/// * `angle` - the Angle.
#[must_use]
pub fn sin_cos_series(coeffs: &[f64], angle: Angle) -> Radians {
    let angle2x = angle.double();

    if coeffs.len() < 2 || angle2x.sin().abs().0 < f64::EPSILON {
        Radians(0.0)
    } else {
        let ar = 2.0 * angle2x.cos().0;

        let mut index = coeffs.len() - 1;
        let mut k1 = 0.0;
        if 0 == (index & 1) {
            k1 = coeffs[index];
            index -= 1;
        }
        let mut k0 = ar.mul_add(k1, coeffs[index]);
        index -= 1;

        // two steps per pass, so k0 and k1 keep their roles
        while 0 < index {
            k1 = coeffs[index] + ar.mul_add(k0, -k1);
            index -= 1;
            k0 = coeffs[index] + ar.mul_add(k1, -k0);
            index -= 1;
        }
        Radians(angle2x.sin().0 * k0)
    }
}
