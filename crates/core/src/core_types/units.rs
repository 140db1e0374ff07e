//! Semantic unit types for weather observation fields
//!
//! Newtype wrappers prevent accidental mixing of incompatible quantities
//! (e.g. passing a wind speed where a temperature is expected). All wrappers
//! hold an `f64`, dereference to it for arithmetic, and serialize
//! transparently so the dashboard sees plain numbers.
//!
//! Constructors do not validate: the classifier's contract places input
//! validation (finiteness, physical plausibility) on the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

macro_rules! unit_type {
    ($(#[$doc:meta])* $name:ident, $suffix:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Wrap a raw value.
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Unwrap to the raw value.
            #[inline]
            #[must_use]
            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl From<f64> for $name {
            #[inline]
            fn from(value: f64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, $suffix)
            }
        }
    };
}

unit_type!(
    /// Air temperature in degrees Celsius.
    Celsius,
    "°C"
);

unit_type!(
    /// Relative humidity as a percentage (0–100).
    Percent,
    "%"
);

unit_type!(
    /// Wind speed in kilometres per hour.
    KilometersPerHour,
    " km/h"
);

unit_type!(
    /// Precipitation rate in millimetres per hour.
    MillimetersPerHour,
    " mm/h"
);

unit_type!(
    /// Atmospheric pressure in hectopascals.
    Hectopascals,
    " hPa"
);
