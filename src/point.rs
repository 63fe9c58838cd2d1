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

//! The point module contains the position types of the library:
//! a `GeographicPoint` on an ellipsoid, a `PolarPoint` (azimuth and distance)
//! and a planar `CartesianPoint`.
//!
//! Setters check their arguments and return an error for an out of range or
//! non-finite value, leaving the point unchanged. Zero is a valid value for
//! every field.

use crate::ellipsoid::Datum;
use crate::error::{Error, Result};
use angle_sc::{Degrees, Validate};
use icao_units::si::Metres;
use serde::{Deserialize, Serialize};
use unit_sphere::{is_valid_latitude, is_valid_longitude, LatLong};

/// Return `value` if `is_valid`, otherwise an `InvalidCoordinate` error.
fn check(field: &'static str, value: f64, is_valid: bool) -> Result<f64> {
    if is_valid {
        Ok(value)
    } else {
        Err(Error::InvalidCoordinate { field, value })
    }
}

fn check_latitude(latitude: Degrees) -> Result<Degrees> {
    check("latitude", latitude.0, is_valid_latitude(latitude.0)).map(Degrees)
}

fn check_longitude(longitude: Degrees) -> Result<Degrees> {
    check("longitude", longitude.0, is_valid_longitude(longitude.0)).map(Degrees)
}

/// Normalise an azimuth into the range [0, 360).
/// # Examples
/// ```
/// use nav_toolkit::Degrees;
/// use nav_toolkit::point::normalise_azimuth;
///
/// assert_eq!(350.0, normalise_azimuth(Degrees(-10.0)).0);
/// assert_eq!(0.0, normalise_azimuth(Degrees(360.0)).0);
/// ```
#[must_use]
pub fn normalise_azimuth(azimuth: Degrees) -> Degrees {
    let value = azimuth.0 % 360.0;
    let value = if value < 0.0 { value + 360.0 } else { value };
    // a tiny negative value rounds up to 360
    Degrees(if value < 360.0 { value + 0.0 } else { 0.0 })
}

/// A position on the surface of an ellipsoid.
///
/// Deserialization checks the coordinates, as `new` does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeographicPointFields")]
pub struct GeographicPoint {
    latitude: Degrees,
    longitude: Degrees,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    datum: Datum,
}

/// The unchecked fields of a serialized `GeographicPoint`.
#[derive(Deserialize)]
struct GeographicPointFields {
    latitude: Degrees,
    longitude: Degrees,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    datum: Datum,
}

impl TryFrom<GeographicPointFields> for GeographicPoint {
    type Error = Error;

    fn try_from(fields: GeographicPointFields) -> Result<Self> {
        let mut point = Self::new(fields.latitude, fields.longitude)?.with_datum(fields.datum);
        point.name = fields.name;
        Ok(point)
    }
}

impl Default for GeographicPoint {
    /// (0, 0), unnamed, on WGS-84.
    fn default() -> Self {
        Self {
            latitude: Degrees(0.0),
            longitude: Degrees(0.0),
            name: None,
            datum: Datum::default(),
        }
    }
}

impl Validate for GeographicPoint {
    /// Whether -90 <= latitude <= 90 and -180 <= longitude <= 180.
    fn is_valid(&self) -> bool {
        is_valid_latitude(self.latitude.0) && is_valid_longitude(self.longitude.0)
    }
}

impl GeographicPoint {
    /// Construct an unnamed `GeographicPoint` on WGS-84.
    /// # Errors
    /// `InvalidCoordinate` if the latitude or longitude is out of range.
    pub fn new(latitude: Degrees, longitude: Degrees) -> Result<Self> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
            ..Self::default()
        })
    }

    /// Construct a `GeographicPoint` from a `LatLong` calculated by the
    /// library, so already in range.
    #[must_use]
    pub(crate) fn from_lat_long(position: &LatLong, datum: Datum) -> Self {
        Self {
            latitude: position.lat(),
            longitude: position.lon(),
            name: None,
            datum,
        }
    }

    /// Set the name of the point.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the datum of the point.
    #[must_use]
    pub const fn with_datum(mut self, datum: Datum) -> Self {
        self.datum = datum;
        self
    }

    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// The latitude and longitude.
    #[must_use]
    pub const fn coordinates(&self) -> (Degrees, Degrees) {
        (self.latitude, self.longitude)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn datum(&self) -> Datum {
        self.datum
    }

    /// # Errors
    /// `InvalidCoordinate` unless -90 <= `latitude` <= 90.
    pub fn set_latitude(&mut self, latitude: Degrees) -> Result<&mut Self> {
        self.latitude = check_latitude(latitude)?;
        Ok(self)
    }

    /// # Errors
    /// `InvalidCoordinate` unless -180 <= `longitude` <= 180.
    pub fn set_longitude(&mut self, longitude: Degrees) -> Result<&mut Self> {
        self.longitude = check_longitude(longitude)?;
        Ok(self)
    }

    /// Set both coordinates, or neither if either is out of range.
    /// The name and datum are unchanged.
    /// # Errors
    /// `InvalidCoordinate` if the latitude or longitude is out of range.
    pub fn set_coordinates(&mut self, latitude: Degrees, longitude: Degrees) -> Result<&mut Self> {
        let latitude = check_latitude(latitude)?;
        self.longitude = check_longitude(longitude)?;
        self.latitude = latitude;
        Ok(self)
    }

    pub fn set_name(&mut self, name: Option<String>) -> &mut Self {
        self.name = name;
        self
    }

    pub fn set_datum(&mut self, datum: Datum) -> &mut Self {
        self.datum = datum;
        self
    }
}

impl From<&GeographicPoint> for LatLong {
    fn from(point: &GeographicPoint) -> Self {
        Self::new(point.latitude, point.longitude)
    }
}

/// An azimuth and distance from a reference position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolarPointFields")]
pub struct PolarPoint {
    /// The azimuth, in the range [0, 360).
    azimuth: Degrees,
    distance: Metres,
}

#[derive(Deserialize)]
struct PolarPointFields {
    azimuth: Degrees,
    distance: Metres,
}

impl TryFrom<PolarPointFields> for PolarPoint {
    type Error = Error;

    fn try_from(fields: PolarPointFields) -> Result<Self> {
        Self::new(fields.azimuth, fields.distance)
    }
}

impl Default for PolarPoint {
    fn default() -> Self {
        Self {
            azimuth: Degrees(0.0),
            distance: Metres(0.0),
        }
    }
}

impl Validate for PolarPoint {
    fn is_valid(&self) -> bool {
        (0.0..360.0).contains(&self.azimuth.0)
            && self.distance.0.is_finite()
            && 0.0 <= self.distance.0
    }
}

fn check_azimuth(azimuth: Degrees) -> Result<Degrees> {
    check("azimuth", azimuth.0, azimuth.0.is_finite()).map(|value| normalise_azimuth(Degrees(value)))
}

fn check_distance(distance: Metres) -> Result<Metres> {
    check(
        "distance",
        distance.0,
        distance.0.is_finite() && 0.0 <= distance.0,
    )
    .map(Metres)
}

impl PolarPoint {
    /// Constructor, the azimuth is normalised into [0, 360).
    /// # Errors
    /// `InvalidCoordinate` if the azimuth is not finite or the distance is
    /// negative or not finite.
    pub fn new(azimuth: Degrees, distance: Metres) -> Result<Self> {
        Ok(Self {
            azimuth: check_azimuth(azimuth)?,
            distance: check_distance(distance)?,
        })
    }

    /// Construct a `PolarPoint` from a calculated azimuth and length.
    #[must_use]
    pub(crate) fn from_azimuth_length(azimuth: Degrees, distance: Metres) -> Self {
        Self {
            azimuth: normalise_azimuth(azimuth),
            distance,
        }
    }

    #[must_use]
    pub const fn azimuth(&self) -> Degrees {
        self.azimuth
    }

    #[must_use]
    pub const fn distance(&self) -> Metres {
        self.distance
    }

    /// The azimuth and distance.
    #[must_use]
    pub const fn polar(&self) -> (Degrees, Metres) {
        (self.azimuth, self.distance)
    }

    /// # Errors
    /// `InvalidCoordinate` if `azimuth` is not finite.
    pub fn set_azimuth(&mut self, azimuth: Degrees) -> Result<&mut Self> {
        self.azimuth = check_azimuth(azimuth)?;
        Ok(self)
    }

    /// # Errors
    /// `InvalidCoordinate` if `distance` is negative or not finite.
    pub fn set_distance(&mut self, distance: Metres) -> Result<&mut Self> {
        self.distance = check_distance(distance)?;
        Ok(self)
    }

    /// Set the azimuth and distance, or neither if either is invalid.
    /// # Errors
    /// `InvalidCoordinate` if the azimuth or distance is invalid.
    pub fn set_polar(&mut self, azimuth: Degrees, distance: Metres) -> Result<&mut Self> {
        *self = Self::new(azimuth, distance)?;
        Ok(self)
    }
}

impl From<&CartesianPoint> for PolarPoint {
    /// The bearing and range of a point East (x) and North (y) of the origin.
    fn from(point: &CartesianPoint) -> Self {
        let azimuth = Degrees(libm::atan2(point.x.0, point.y.0).to_degrees());
        Self::from_azimuth_length(azimuth, Metres(libm::hypot(point.x.0, point.y.0)))
    }
}

/// A position on a plane: x East and y North of an origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartesianPointFields")]
pub struct CartesianPoint {
    x: Metres,
    y: Metres,
}

#[derive(Deserialize)]
struct CartesianPointFields {
    x: Metres,
    y: Metres,
}

impl TryFrom<CartesianPointFields> for CartesianPoint {
    type Error = Error;

    fn try_from(fields: CartesianPointFields) -> Result<Self> {
        Self::new(fields.x, fields.y)
    }
}

impl Default for CartesianPoint {
    fn default() -> Self {
        Self {
            x: Metres(0.0),
            y: Metres(0.0),
        }
    }
}

impl Validate for CartesianPoint {
    fn is_valid(&self) -> bool {
        self.x.0.is_finite() && self.y.0.is_finite()
    }
}

fn check_finite(field: &'static str, value: Metres) -> Result<Metres> {
    check(field, value.0, value.0.is_finite()).map(Metres)
}

impl CartesianPoint {
    /// # Errors
    /// `InvalidCoordinate` if x or y is not finite.
    pub fn new(x: Metres, y: Metres) -> Result<Self> {
        Ok(Self {
            x: check_finite("x", x)?,
            y: check_finite("y", y)?,
        })
    }

    #[must_use]
    pub const fn x(&self) -> Metres {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> Metres {
        self.y
    }

    #[must_use]
    pub const fn cartesian(&self) -> (Metres, Metres) {
        (self.x, self.y)
    }

    /// # Errors
    /// `InvalidCoordinate` if `x` is not finite.
    pub fn set_x(&mut self, x: Metres) -> Result<&mut Self> {
        self.x = check_finite("x", x)?;
        Ok(self)
    }

    /// # Errors
    /// `InvalidCoordinate` if `y` is not finite.
    pub fn set_y(&mut self, y: Metres) -> Result<&mut Self> {
        self.y = check_finite("y", y)?;
        Ok(self)
    }

    /// Set x and y, or neither if either is not finite.
    /// # Errors
    /// `InvalidCoordinate` if x or y is not finite.
    pub fn set_cartesian(&mut self, x: Metres, y: Metres) -> Result<&mut Self> {
        *self = Self::new(x, y)?;
        Ok(self)
    }
}

impl From<&PolarPoint> for CartesianPoint {
    fn from(point: &PolarPoint) -> Self {
        let azimuth = point.azimuth.0.to_radians();
        Self {
            x: Metres(point.distance.0 * libm::sin(azimuth)),
            y: Metres(point.distance.0 * libm::cos(azimuth)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_geographic_point_default() {
        let point = GeographicPoint::default();
        assert_eq!((Degrees(0.0), Degrees(0.0)), point.coordinates());
        assert!(point.name().is_none());
        assert_eq!(Datum::Wgs84, point.datum());
        assert!(point.is_valid());
    }

    #[test]
    fn test_geographic_point_setters_accept_zero() {
        let mut point = GeographicPoint::new(Degrees(10.0), Degrees(20.0)).unwrap();
        point.set_latitude(Degrees(0.0)).unwrap();
        point.set_longitude(Degrees(0.0)).unwrap();
        assert_eq!((Degrees(0.0), Degrees(0.0)), point.coordinates());

        point
            .set_coordinates(Degrees(-90.0), Degrees(180.0))
            .unwrap()
            .set_latitude(Degrees(90.0))
            .unwrap();
        assert_eq!((Degrees(90.0), Degrees(180.0)), point.coordinates());
    }

    #[test]
    fn test_geographic_point_setters_reject_invalid() {
        let mut point = GeographicPoint::new(Degrees(10.0), Degrees(20.0))
            .unwrap()
            .with_name("ALPHA")
            .with_datum(Datum::Pz9011);

        assert_eq!(
            Err(Error::InvalidCoordinate {
                field: "latitude",
                value: 91.0
            }),
            point.set_latitude(Degrees(91.0)).map(|_| ())
        );
        assert!(point.set_longitude(Degrees(-180.5)).is_err());
        assert!(point.set_latitude(Degrees(f64::NAN)).is_err());

        // all or nothing
        assert!(point.set_coordinates(Degrees(45.0), Degrees(200.0)).is_err());
        assert_eq!((Degrees(10.0), Degrees(20.0)), point.coordinates());

        point.set_coordinates(Degrees(45.0), Degrees(-20.0)).unwrap();
        assert_eq!((Degrees(45.0), Degrees(-20.0)), point.coordinates());
        assert_eq!(Some("ALPHA"), point.name());
        assert_eq!(Datum::Pz9011, point.datum());

        assert!(GeographicPoint::new(Degrees(0.0), Degrees(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_geographic_point_to_lat_long() {
        let point = GeographicPoint::new(Degrees(51.5), Degrees(-0.1)).unwrap();
        let lat_long = LatLong::from(&point);
        assert_eq!(Degrees(51.5), lat_long.lat());
        assert_eq!(Degrees(-0.1), lat_long.lon());
    }

    #[test]
    fn test_polar_point() {
        let mut point = PolarPoint::default();
        assert_eq!((Degrees(0.0), Metres(0.0)), point.polar());

        point.set_azimuth(Degrees(-90.0)).unwrap();
        assert_eq!(Degrees(270.0), point.azimuth());
        point.set_azimuth(Degrees(720.0)).unwrap();
        assert_eq!(Degrees(0.0), point.azimuth());

        point.set_distance(Metres(0.0)).unwrap();
        assert!(point.set_distance(Metres(-1.0)).is_err());
        assert!(point.set_azimuth(Degrees(f64::NAN)).is_err());

        point.set_polar(Degrees(45.0), Metres(1000.0)).unwrap();
        assert!(point.set_polar(Degrees(90.0), Metres(f64::INFINITY)).is_err());
        assert_eq!((Degrees(45.0), Metres(1000.0)), point.polar());
        assert!(point.is_valid());
    }

    #[test]
    fn test_cartesian_point() {
        let mut point = CartesianPoint::default();
        point.set_x(Metres(-5.0)).unwrap().set_y(Metres(0.0)).unwrap();
        assert_eq!((Metres(-5.0), Metres(0.0)), point.cartesian());

        assert!(point.set_cartesian(Metres(1.0), Metres(f64::NAN)).is_err());
        assert_eq!((Metres(-5.0), Metres(0.0)), point.cartesian());
        assert!(point.set_y(Metres(f64::NEG_INFINITY)).is_err());
        assert!(point.is_valid());
    }

    #[test]
    fn test_polar_cartesian_conversion() {
        let polar = PolarPoint::new(Degrees(90.0), Metres(1000.0)).unwrap();
        let cartesian = CartesianPoint::from(&polar);
        assert!(is_within_tolerance(1000.0, cartesian.x().0, 1e-9));
        assert!(is_within_tolerance(0.0, cartesian.y().0, 1e-9));

        let cartesian = CartesianPoint::new(Metres(-3.0), Metres(-4.0)).unwrap();
        let polar = PolarPoint::from(&cartesian);
        assert!(is_within_tolerance(5.0, polar.distance().0, 1e-12));
        assert!(is_within_tolerance(
            180.0 + 36.869_897_645_844_02,
            polar.azimuth().0,
            1e-9
        ));
    }

    #[test]
    fn test_points_serde() {
        let point = GeographicPoint::new(Degrees(1.5), Degrees(2.5))
            .unwrap()
            .with_name("WPT01");
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(
            r#"{"latitude":1.5,"longitude":2.5,"name":"WPT01","datum":"WGS-84"}"#,
            json
        );
        let parsed: GeographicPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, parsed);

        let polar: PolarPoint = serde_json::from_str(r#"{"azimuth":90.0,"distance":10.0}"#).unwrap();
        assert_eq!((Degrees(90.0), Metres(10.0)), polar.polar());
    }

    #[test]
    fn test_points_deserialize_checks_values() {
        let result = serde_json::from_str::<GeographicPoint>(r#"{"latitude":200.0,"longitude":-999.0}"#);
        assert!(result.is_err());
        let result = serde_json::from_str::<GeographicPoint>(r#"{"latitude":45.0,"longitude":180.5}"#);
        assert!(result.unwrap_err().to_string().contains("longitude"));

        let point: GeographicPoint =
            serde_json::from_str(r#"{"latitude":-90.0,"longitude":180.0,"datum":"PZ-90.11"}"#)
                .unwrap();
        assert_eq!((Degrees(-90.0), Degrees(180.0)), point.coordinates());
        assert_eq!(Datum::Pz9011, point.datum());
        assert!(point.name().is_none());

        let result = serde_json::from_str::<PolarPoint>(r#"{"azimuth":-45.0,"distance":-10.0}"#);
        assert!(result.unwrap_err().to_string().contains("distance"));
        let polar: PolarPoint = serde_json::from_str(r#"{"azimuth":-45.0,"distance":10.0}"#).unwrap();
        assert_eq!(Degrees(315.0), polar.azimuth());

        // JSON has no non-finite numbers
        let fields = CartesianPointFields {
            x: Metres(1.0),
            y: Metres(f64::NAN),
        };
        assert!(CartesianPoint::try_from(fields).is_err());
        let cartesian: CartesianPoint = serde_json::from_str(r#"{"x":1.0,"y":-2.0}"#).unwrap();
        assert_eq!((Metres(1.0), Metres(-2.0)), cartesian.cartesian());
    }
}
