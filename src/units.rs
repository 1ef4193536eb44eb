//! # Units
//!
//! Every quantity in a nanolab record is stored as an `f64` in SI units, the same
//! way the ELN stores it. The lab enters and reads values in more convenient
//! units (millimetres, minutes, degrees Celsius, millitorr, sccm, ...); those are
//! modelled as [`DisplayUnit`]s that convert to and from their SI [`Unit`].
//!
//! ```
//! use nanolab::units::{to_si, from_si, DisplayUnit};
//!
//! let thickness_m = to_si(6.35, DisplayUnit::Millimetre);
//! assert!((thickness_m - 0.00635).abs() < 1e-12);
//! assert!((from_si(573.15, DisplayUnit::DegreeCelsius) - 300.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pascal per millitorr
pub const PASCAL_PER_MTORR: f64 = 101_325.0 / 760_000.0;

/// Pascal per millibar
pub const PASCAL_PER_MBAR: f64 = 100.0;

/// Gram per dalton
pub const GRAM_PER_DALTON: f64 = 1.660_539_066_60e-24;

/// Offset between kelvin and degrees Celsius
pub const KELVIN_OFFSET: f64 = 273.15;

/// SI storage unit of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// m
    Metre,
    /// s
    Second,
    /// K
    Kelvin,
    /// Pa, stored as kg/(m*s^2)
    Pascal,
    /// V
    Volt,
    /// W, stored as (kg*m^2)/s^3
    Watt,
    /// m^3
    CubicMetre,
    /// m^3/s
    CubicMetrePerSecond,
    /// m/s
    MetrePerSecond,
    /// rad
    Radian,
    /// 1/s
    Hertz,
    /// K/s
    KelvinPerSecond,
    /// W/s, stored as (kg*m^2)/s^4
    WattPerSecond,
    /// Ohm*m, stored as (kg*m^3)/(A^2*s^3)
    OhmMetre,
    /// g
    Gram,
    /// Fractions, counts and percentages
    Dimensionless,
}

impl Unit {
    /// Printable symbol as the ELN spells it
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Metre => "m",
            Unit::Second => "s",
            Unit::Kelvin => "kelvin",
            Unit::Pascal => "kg/(m*s^2)",
            Unit::Volt => "V",
            Unit::Watt => "(kg*m^2)/s^3",
            Unit::CubicMetre => "m^3",
            Unit::CubicMetrePerSecond => "m^3/s",
            Unit::MetrePerSecond => "m/s",
            Unit::Radian => "rad",
            Unit::Hertz => "1/s",
            Unit::KelvinPerSecond => "kelvin/s",
            Unit::WattPerSecond => "(kg*m^2)/s^4",
            Unit::OhmMetre => "(kg*m^3)/(A^2*s^3)",
            Unit::Gram => "g",
            Unit::Dimensionless => "",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unit a quantity is entered and displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayUnit {
    /// mm
    Millimetre,
    /// cm
    Centimetre,
    /// minute
    Minute,
    /// s
    Second,
    /// degC
    DegreeCelsius,
    /// mtorr
    Millitorr,
    /// mbar
    Millibar,
    /// V
    Volt,
    /// W
    Watt,
    /// W/second
    WattPerSecond,
    /// angstrom/s
    AngstromPerSecond,
    /// cm^3/minute (sccm)
    CubicCentimetrePerMinute,
    /// liter
    Litre,
    /// degree
    Degree,
    /// Hz
    Hertz,
    /// degC/minute
    DegreeCelsiusPerMinute,
    /// ohm*cm
    OhmCentimetre,
    /// Da
    Dalton,
}

impl DisplayUnit {
    /// All display units, in declaration order
    pub const ALL: [DisplayUnit; 18] = [
        DisplayUnit::Millimetre,
        DisplayUnit::Centimetre,
        DisplayUnit::Minute,
        DisplayUnit::Second,
        DisplayUnit::DegreeCelsius,
        DisplayUnit::Millitorr,
        DisplayUnit::Millibar,
        DisplayUnit::Volt,
        DisplayUnit::Watt,
        DisplayUnit::WattPerSecond,
        DisplayUnit::AngstromPerSecond,
        DisplayUnit::CubicCentimetrePerMinute,
        DisplayUnit::Litre,
        DisplayUnit::Degree,
        DisplayUnit::Hertz,
        DisplayUnit::DegreeCelsiusPerMinute,
        DisplayUnit::OhmCentimetre,
        DisplayUnit::Dalton,
    ];

    /// SI unit the value is stored in
    pub fn si_unit(&self) -> Unit {
        match self {
            DisplayUnit::Millimetre | DisplayUnit::Centimetre => Unit::Metre,
            DisplayUnit::Minute | DisplayUnit::Second => Unit::Second,
            DisplayUnit::DegreeCelsius => Unit::Kelvin,
            DisplayUnit::Millitorr | DisplayUnit::Millibar => Unit::Pascal,
            DisplayUnit::Volt => Unit::Volt,
            DisplayUnit::Watt => Unit::Watt,
            DisplayUnit::WattPerSecond => Unit::WattPerSecond,
            DisplayUnit::AngstromPerSecond => Unit::MetrePerSecond,
            DisplayUnit::CubicCentimetrePerMinute => Unit::CubicMetrePerSecond,
            DisplayUnit::Litre => Unit::CubicMetre,
            DisplayUnit::Degree => Unit::Radian,
            DisplayUnit::Hertz => Unit::Hertz,
            DisplayUnit::DegreeCelsiusPerMinute => Unit::KelvinPerSecond,
            DisplayUnit::OhmCentimetre => Unit::OhmMetre,
            DisplayUnit::Dalton => Unit::Gram,
        }
    }

    /// Symbol used in ELN annotations
    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayUnit::Millimetre => "mm",
            DisplayUnit::Centimetre => "cm",
            DisplayUnit::Minute => "minute",
            DisplayUnit::Second => "s",
            DisplayUnit::DegreeCelsius => "degC",
            DisplayUnit::Millitorr => "mtorr",
            DisplayUnit::Millibar => "mbar",
            DisplayUnit::Volt => "V",
            DisplayUnit::Watt => "W",
            DisplayUnit::WattPerSecond => "W/second",
            DisplayUnit::AngstromPerSecond => "angstrom/s",
            DisplayUnit::CubicCentimetrePerMinute => "cm^3/minute",
            DisplayUnit::Litre => "liter",
            DisplayUnit::Degree => "degree",
            DisplayUnit::Hertz => "Hz",
            DisplayUnit::DegreeCelsiusPerMinute => "degC/minute",
            DisplayUnit::OhmCentimetre => "ohm*cm",
            DisplayUnit::Dalton => "Da",
        }
    }

    /// Multiplicative factor from this unit to SI (ignores offsets)
    fn scale(&self) -> f64 {
        match self {
            DisplayUnit::Millimetre => 1e-3,
            DisplayUnit::Centimetre => 1e-2,
            DisplayUnit::Minute => 60.0,
            DisplayUnit::Second => 1.0,
            DisplayUnit::DegreeCelsius => 1.0,
            DisplayUnit::Millitorr => PASCAL_PER_MTORR,
            DisplayUnit::Millibar => PASCAL_PER_MBAR,
            DisplayUnit::Volt | DisplayUnit::Watt | DisplayUnit::WattPerSecond => 1.0,
            DisplayUnit::AngstromPerSecond => 1e-10,
            DisplayUnit::CubicCentimetrePerMinute => 1e-6 / 60.0,
            DisplayUnit::Litre => 1e-3,
            DisplayUnit::Degree => std::f64::consts::PI / 180.0,
            DisplayUnit::Hertz => 1.0,
            DisplayUnit::DegreeCelsiusPerMinute => 1.0 / 60.0,
            DisplayUnit::OhmCentimetre => 1e-2,
            DisplayUnit::Dalton => GRAM_PER_DALTON,
        }
    }

    fn offset(&self) -> f64 {
        match self {
            DisplayUnit::DegreeCelsius => KELVIN_OFFSET,
            _ => 0.0,
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a unit symbol is not known
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown display unit: {0}")]
pub struct UnknownUnit(pub String);

impl FromStr for DisplayUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(unit) = DisplayUnit::ALL.iter().find(|u| u.symbol() == s) {
            return Ok(*unit);
        }
        // Spellings that appear in older annotations
        match s {
            "minutes" | "min" => Ok(DisplayUnit::Minute),
            "degrees" => Ok(DisplayUnit::Degree),
            "cm^3/min" | "sccm" => Ok(DisplayUnit::CubicCentimetrePerMinute),
            "second" => Ok(DisplayUnit::Second),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}

/// Convert a value entered in `unit` to its SI representation
pub fn to_si(value: f64, unit: DisplayUnit) -> f64 {
    (value + unit.offset()) * unit.scale()
}

/// Convert an SI value to the given display unit
pub fn from_si(value: f64, unit: DisplayUnit) -> f64 {
    value / unit.scale() - unit.offset()
}
