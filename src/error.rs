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

//! The error module contains the errors returned by the library.

/// Errors returned by the navigation calculations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid {field}: {value}")]
    InvalidCoordinate { field: &'static str, value: f64 },

    #[error("unknown datum: {0:?}")]
    UnknownDatum(String),

    #[error("a procedure needs at least 2 points, found {0}")]
    InvalidProcedure(usize),

    #[error("invalid waypoint codename: {0:?}")]
    InvalidWayPoint(String),

    #[error("minimum altitude {minimum} m is above maximum altitude {maximum} m")]
    InvalidAltitudeWindow { minimum: f64, maximum: f64 },

    #[error("numeric domain error: {0}")]
    DomainError(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
