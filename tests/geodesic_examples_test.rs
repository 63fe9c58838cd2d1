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

// extern crate we're testing, same as any other code would do.
extern crate nav_toolkit;

use angle_sc::is_within_tolerance;
use nav_toolkit::{
    direct_problem, inverse_problem, Datum, Degrees, GeographicPoint, Metres, PolarPoint,
};
use serde::Deserialize;

const FILENAME: &str = "data/geodesic_examples.csv";

#[derive(Debug, Deserialize)]
struct Example {
    datum: Datum,
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    azi1: f64,
    azi2: f64,
    distance: f64,
}

impl Example {
    fn start(&self) -> GeographicPoint {
        GeographicPoint::new(Degrees(self.lat1), Degrees(self.lon1))
            .unwrap()
            .with_datum(self.datum)
    }

    fn end(&self) -> GeographicPoint {
        GeographicPoint::new(Degrees(self.lat2), Degrees(self.lon2))
            .unwrap()
            .with_datum(self.datum)
    }
}

fn read_examples() -> Vec<Example> {
    let mut rdr = csv::Reader::from_path(FILENAME).unwrap();
    rdr.deserialize::<Example>().map(Result::unwrap).collect()
}

#[test]
fn test_inverse_examples() {
    let examples = read_examples();
    assert_eq!(11, examples.len());

    for (index, example) in examples.iter().enumerate() {
        let ellipsoid = example.datum.ellipsoid();
        let (start, end) = (example.start(), example.end());

        let initial = inverse_problem(&start, &end, ellipsoid, false);
        assert!(
            is_within_tolerance(example.distance, initial.distance().0, 1e-3),
            "distance, index: {index} {:?}",
            initial.distance()
        );
        assert!(
            is_within_tolerance(example.azi1, initial.azimuth().0, 1e-6),
            "azimuth, index: {index} {:?}",
            initial.azimuth()
        );

        let subsequent = inverse_problem(&start, &end, ellipsoid, true);
        assert!(
            is_within_tolerance(example.azi2, subsequent.azimuth().0, 1e-6),
            "end azimuth, index: {index} {:?}",
            subsequent.azimuth()
        );
        assert_eq!(initial.distance(), subsequent.distance());
    }
}

#[test]
fn test_direct_examples() {
    for (index, example) in read_examples().iter().enumerate() {
        let ellipsoid = example.datum.ellipsoid();
        let course = PolarPoint::new(Degrees(example.azi1), Metres(example.distance)).unwrap();

        let result = direct_problem(&example.start(), &course, ellipsoid);
        assert_eq!(example.datum, result.datum());
        assert!(
            is_within_tolerance(example.lat2, result.latitude().0, 1e-7),
            "latitude, index: {index} {:?}",
            result.latitude()
        );
        assert!(
            is_within_tolerance(example.lon2, result.longitude().0, 1e-7),
            "longitude, index: {index} {:?}",
            result.longitude()
        );
    }
}

#[test]
fn test_inverse_direct_round_trip() {
    for (index, example) in read_examples().iter().enumerate() {
        let ellipsoid = example.datum.ellipsoid();
        let (start, end) = (example.start(), example.end());

        let polar = inverse_problem(&start, &end, ellipsoid, false);
        let result = direct_problem(&start, &polar, ellipsoid);
        assert!(
            is_within_tolerance(end.latitude().0, result.latitude().0, 1e-8),
            "latitude, index: {index} {:?}",
            result.latitude()
        );
        assert!(
            is_within_tolerance(end.longitude().0, result.longitude().0, 1e-8),
            "longitude, index: {index} {:?}",
            result.longitude()
        );
    }
}

#[test]
fn test_direct_inverse_round_trip_grid() {
    const LATITUDES: [f64; 5] = [-89.5, -0.5, 0.0, 0.5, 89.5];
    const AZIMUTHS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];
    const DISTANCES: [f64; 7] = [
        1_000.0,
        100_000.0,
        1_000_000.0,
        5_000_000.0,
        10_000_000.0,
        15_000_000.0,
        19_900_000.0,
    ];

    let ellipsoid = Datum::Wgs84.ellipsoid();
    for latitude in LATITUDES {
        let start = GeographicPoint::new(Degrees(latitude), Degrees(0.0)).unwrap();
        for azimuth in AZIMUTHS {
            for distance in DISTANCES {
                let course = PolarPoint::new(Degrees(azimuth), Metres(distance)).unwrap();
                let end = direct_problem(&start, &course, ellipsoid);
                let result = inverse_problem(&start, &end, ellipsoid, false);

                let delta_distance = libm::fabs(result.distance().0 - distance) / distance;
                assert!(
                    delta_distance <= 1e-9,
                    "distance, lat: {latitude} azi: {azimuth} distance: {distance} result: {:?}",
                    result.distance()
                );
                let delta_azimuth = libm::fabs((result.azimuth() - Degrees(azimuth)).0);
                assert!(
                    delta_azimuth <= 1e-6,
                    "azimuth, lat: {latitude} azi: {azimuth} distance: {distance} result: {:?}",
                    result.azimuth()
                );
            }
        }
    }
}

#[test]
fn test_datums_differ() {
    let start = GeographicPoint::new(Degrees(42.0), Degrees(29.0)).unwrap();
    let end = GeographicPoint::new(Degrees(39.0), Degrees(-77.0)).unwrap();

    let wgs84 = inverse_problem(&start, &end, Datum::Wgs84.ellipsoid(), false);
    let pz90 = inverse_problem(&start, &end, Datum::Pz9011.ellipsoid(), false);

    // PZ-90.11 has the smaller major axis
    let difference = wgs84.distance().0 - pz90.distance().0;
    assert!(is_within_tolerance(1.331, difference, 1e-2));
}
