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

//! The ellipsoid module contains types and functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius) and flattening ratio,
//! and the registry of named datums that select one.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod pz90;
pub mod wgs84;

use crate::error::{Error, Result};
use crate::{Ellipsoid, PZ90_ELLIPSOID, WGS84_ELLIPSOID};
use angle_sc::{trig, Angle};
use core::fmt;
use core::str::FromStr;
use icao_units::si::Metres;
use serde::{Deserialize, Serialize};

/// A named geodetic datum, i.e. a reference ellipsoid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datum {
    #[default]
    #[serde(rename = "WGS-84")]
    Wgs84,
    #[serde(rename = "PZ-90.11")]
    Pz9011,
}

impl Datum {
    /// The registered datums.
    pub const ALL: [Self; 2] = [Self::Wgs84, Self::Pz9011];

    /// The registered name of the datum.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wgs84 => wgs84::NAME,
            Self::Pz9011 => pz90::NAME,
        }
    }

    /// The `Ellipsoid` of the datum.
    #[must_use]
    pub fn ellipsoid(self) -> &'static Ellipsoid {
        match self {
            Self::Wgs84 => &*WGS84_ELLIPSOID,
            Self::Pz9011 => &*PZ90_ELLIPSOID,
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datum {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|datum| datum.name() == name)
            .ok_or_else(|| Error::UnknownDatum(name.to_owned()))
    }
}

/// Look up the `Ellipsoid` registered under `name`.
/// * `name` - "WGS-84" or "PZ-90.11".
/// # Errors
///
/// `Error::UnknownDatum` if `name` is not a registered datum.
/// # Examples
/// ```
/// use nav_toolkit::ellipsoid::{resolve_ellipsoid, pz90};
///
/// let ellipsoid = resolve_ellipsoid("PZ-90.11").unwrap();
/// assert_eq!(pz90::A, ellipsoid.a());
/// assert!(resolve_ellipsoid("SK-42").is_err());
/// ```
pub fn resolve_ellipsoid(name: &str) -> Result<&'static Ellipsoid> {
    name.parse::<Datum>().map(Datum::ellipsoid)
}

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use nav_toolkit::Metres;
/// use nav_toolkit::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Calculate the third flattening of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_3rd_flattening(f: f64) -> f64 {
    f / (2.0 - f)
}

/// Calculate `epsilon`, the variable used in the series expansions,
/// from Clairaut's constant.
///
/// CFF Karney, [Algorithms for geodesics](https://arxiv.org/pdf/1109.4448.pdf)
/// Eqs 9 & 16.
/// * `clairaut` - Clairaut's constant.
/// * `ep_2` - the square of the second Eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_epsilon(clairaut: trig::UnitNegRange, ep_2: f64) -> f64 {
    // Clairaut's constant is sin alpha0
    let sq_cos_alpha0 = (1.0 - clairaut.0) * (1.0 + clairaut.0);
    let k2 = ep_2 * sq_cos_alpha0;
    let sqrt_k2_1 = libm::sqrt(1.0 + k2) + 1.0;
    k2 / (sqrt_k2_1 * sqrt_k2_1)
}

/// Convert a `geodetic` Latitude to a `parametric` Latitude on the
/// auxiliary sphere.
/// * `lat` - the `geodetic` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_parametric_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(one_minus_f * lat.sin().0, lat.cos().0)
}

/// Convert a `parametric` Latitude on the auxiliary sphere to a
/// `geodetic` Latitude.
/// * `beta` - the `parametric` Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_geodetic_latitude(beta: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(beta.sin().0 / one_minus_f, beta.cos().0)
}
